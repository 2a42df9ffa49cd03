mod inmemory;
mod postgres;

pub use inmemory::InMemoryPetRepo;
use petpals_domain::{Pet, ID};
pub use postgres::PostgresPetRepo;

#[async_trait::async_trait]
pub trait IPetRepo: Send + Sync {
    async fn insert(&self, pet: &Pet) -> anyhow::Result<()>;
    async fn save(&self, pet: &Pet) -> anyhow::Result<()>;
    async fn find(&self, pet_id: &ID) -> Option<Pet>;
    async fn find_by_user(&self, user_id: &ID) -> Vec<Pet>;
    async fn delete(&self, pet_id: &ID) -> Option<Pet>;
    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<()>;
}
