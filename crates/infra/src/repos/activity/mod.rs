mod inmemory;
mod postgres;

pub use inmemory::InMemoryActivityRepo;
use petpals_domain::{Activity, ID};
pub use postgres::PostgresActivityRepo;

/// Inclusive timestamp range in UTC millis
#[derive(Debug, Clone, Copy)]
pub struct TimeRange {
    pub start: i64,
    pub end: i64,
}

#[async_trait::async_trait]
pub trait IActivityRepo: Send + Sync {
    async fn insert(&self, activity: &Activity) -> anyhow::Result<()>;
    async fn save(&self, activity: &Activity) -> anyhow::Result<()>;
    async fn find(&self, activity_id: &ID) -> Option<Activity>;
    async fn find_by_pet(&self, pet_id: &ID) -> Vec<Activity>;
    async fn delete(&self, activity_id: &ID) -> Option<Activity>;
    async fn delete_by_pet(&self, pet_id: &ID) -> anyhow::Result<()>;
    /// Sum of `frequency` over all records for the given pet and
    /// activity name, optionally bounded to a time range
    async fn sum_frequency(&self, pet_id: &ID, activity: &str, range: Option<TimeRange>) -> i64;
}
