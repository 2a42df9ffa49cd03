mod inmemory;
mod postgres;

pub use inmemory::InMemoryEventRepo;
use petpals_domain::{Event, ID};
pub use postgres::PostgresEventRepo;

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    async fn insert(&self, event: &Event) -> anyhow::Result<()>;
    async fn save(&self, event: &Event) -> anyhow::Result<()>;
    async fn find(&self, event_id: &ID) -> Option<Event>;
    async fn find_by_user(&self, user_id: &ID) -> Vec<Event>;
    async fn find_by_pet(&self, pet_id: &ID) -> Vec<Event>;
    /// The notifier's startup snapshot. Unlike the lookups above this
    /// propagates storage errors, since an unreachable event source is
    /// fatal to notifier startup.
    async fn find_all(&self) -> anyhow::Result<Vec<Event>>;
    async fn delete(&self, event_id: &ID) -> Option<Event>;
    async fn delete_by_pet(&self, pet_id: &ID) -> anyhow::Result<()>;
    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<()>;
}
