use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Female,
    Male,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetSpecies {
    Dog,
    Cat,
    Bird,
    Other,
}

#[derive(Debug, Clone)]
pub struct Pet {
    pub id: ID,
    /// The owning `User`
    pub user_id: ID,
    pub name: String,
    pub sex: Sex,
    pub species: PetSpecies,
    /// UTC timestamp in millis
    pub date_of_birth: i64,
}

impl Pet {
    pub fn new(user_id: ID, name: &str, sex: Sex, species: PetSpecies, date_of_birth: i64) -> Self {
        Self {
            id: Default::default(),
            user_id,
            name: name.into(),
            sex,
            species,
            date_of_birth,
        }
    }
}

impl Entity<ID> for Pet {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
