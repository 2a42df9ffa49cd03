use petpals_domain::{Pet, PetSpecies, Sex, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PetDTO {
    pub id: ID,
    pub user_id: ID,
    pub name: String,
    pub sex: Sex,
    pub species: PetSpecies,
    pub date_of_birth: i64,
}

impl PetDTO {
    pub fn new(pet: Pet) -> Self {
        Self {
            id: pet.id,
            user_id: pet.user_id,
            name: pet.name,
            sex: pet.sex,
            species: pet.species,
            date_of_birth: pet.date_of_birth,
        }
    }
}
