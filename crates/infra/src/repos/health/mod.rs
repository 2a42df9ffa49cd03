mod inmemory;
mod postgres;

pub use inmemory::InMemoryHealthRecordRepo;
use petpals_domain::{HealthRecord, ID};
pub use postgres::PostgresHealthRecordRepo;

#[async_trait::async_trait]
pub trait IHealthRecordRepo: Send + Sync {
    async fn insert(&self, record: &HealthRecord) -> anyhow::Result<()>;
    async fn save(&self, record: &HealthRecord) -> anyhow::Result<()>;
    async fn find(&self, record_id: &ID) -> Option<HealthRecord>;
    async fn find_by_pet(&self, pet_id: &ID) -> Vec<HealthRecord>;
    async fn delete(&self, record_id: &ID) -> Option<HealthRecord>;
    async fn delete_by_pet(&self, pet_id: &ID) -> anyhow::Result<()>;
}
