mod activity;
mod event;
mod health;
mod pet;
mod shared;
mod user;

pub use activity::{IActivityRepo, TimeRange};
use activity::{InMemoryActivityRepo, PostgresActivityRepo};
pub use event::IEventRepo;
use event::{InMemoryEventRepo, PostgresEventRepo};
pub use health::IHealthRecordRepo;
use health::{InMemoryHealthRecordRepo, PostgresHealthRecordRepo};
pub use pet::IPetRepo;
use pet::{InMemoryPetRepo, PostgresPetRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
pub use user::IUserRepo;
use user::{InMemoryUserRepo, PostgresUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub users: Arc<dyn IUserRepo>,
    pub pets: Arc<dyn IPetRepo>,
    pub health_records: Arc<dyn IHealthRecordRepo>,
    pub activities: Arc<dyn IActivityRepo>,
    pub events: Arc<dyn IEventRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");
        Ok(Self {
            users: Arc::new(PostgresUserRepo::new(pool.clone())),
            pets: Arc::new(PostgresPetRepo::new(pool.clone())),
            health_records: Arc::new(PostgresHealthRecordRepo::new(pool.clone())),
            activities: Arc::new(PostgresActivityRepo::new(pool.clone())),
            events: Arc::new(PostgresEventRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepo::new()),
            pets: Arc::new(InMemoryPetRepo::new()),
            health_records: Arc::new(InMemoryHealthRecordRepo::new()),
            activities: Arc::new(InMemoryActivityRepo::new()),
            events: Arc::new(InMemoryEventRepo::new()),
        }
    }
}
