use crate::dtos::PetDTO;
use petpals_domain::{Pet, PetSpecies, Sex, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetResponse {
    pub pet: PetDTO,
}

impl PetResponse {
    pub fn new(pet: Pet) -> Self {
        Self {
            pet: PetDTO::new(pet),
        }
    }
}

pub mod create_pet {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub sex: Sex,
        pub species: PetSpecies,
        pub date_of_birth: i64,
    }

    pub type APIResponse = PetResponse;
}

pub mod get_pets {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub pets: Vec<PetDTO>,
    }

    impl APIResponse {
        pub fn new(pets: Vec<Pet>) -> Self {
            Self {
                pets: pets.into_iter().map(PetDTO::new).collect(),
            }
        }
    }
}

pub mod get_pet {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub pet_id: ID,
    }

    pub type APIResponse = PetResponse;
}

pub mod update_pet {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub pet_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: Option<String>,
        pub sex: Option<Sex>,
        pub species: Option<PetSpecies>,
        pub date_of_birth: Option<i64>,
    }

    pub type APIResponse = PetResponse;
}

pub mod delete_pet {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub pet_id: ID,
    }

    pub type APIResponse = PetResponse;
}
