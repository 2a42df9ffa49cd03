use super::IPetRepo;
use crate::repos::shared::inmemory_repo::*;
use petpals_domain::{Pet, ID};

pub struct InMemoryPetRepo {
    pets: std::sync::Mutex<Vec<Pet>>,
}

impl InMemoryPetRepo {
    pub fn new() -> Self {
        Self {
            pets: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IPetRepo for InMemoryPetRepo {
    async fn insert(&self, pet: &Pet) -> anyhow::Result<()> {
        insert(pet, &self.pets);
        Ok(())
    }

    async fn save(&self, pet: &Pet) -> anyhow::Result<()> {
        save(pet, &self.pets);
        Ok(())
    }

    async fn find(&self, pet_id: &ID) -> Option<Pet> {
        find(pet_id, &self.pets)
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<Pet> {
        find_by(&self.pets, |pet| pet.user_id == *user_id)
    }

    async fn delete(&self, pet_id: &ID) -> Option<Pet> {
        delete(pet_id, &self.pets)
    }

    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<()> {
        delete_by(&self.pets, |pet| pet.user_id == *user_id);
        Ok(())
    }
}
