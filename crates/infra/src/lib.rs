mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
use repos::Repos;
pub use repos::{
    IActivityRepo, IEventRepo, IHealthRecordRepo, IPetRepo, IUserRepo, TimeRange,
};
pub use services::*;
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;
use tracing::info;

#[derive(Clone)]
pub struct PetpalsContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl PetpalsContext {
    fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }

    async fn create_postgres(connection_string: &str) -> Self {
        let repos = Repos::create_postgres(connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        Self {
            repos,
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment.
/// Falls back to inmemory repos when `DATABASE_URL` is not set, so
/// that the server and the test suite can run without a database.
pub async fn setup_context() -> PetpalsContext {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    match std::env::var(PSQL_CONNECTION_STRING) {
        Ok(connection_string) => {
            info!(
                "{} env var was provided. Going to use postgres.",
                PSQL_CONNECTION_STRING
            );
            PetpalsContext::create_postgres(&connection_string).await
        }
        Err(_) => {
            info!(
                "{} env var was not provided. Going to use inmemory infra.",
                PSQL_CONNECTION_STRING
            );
            PetpalsContext::create_inmemory()
        }
    }
}

pub async fn run_migration() -> Result<(), MigrateError> {
    let connection_string =
        std::env::var("DATABASE_URL").expect("DATABASE_URL env var to be present.");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&connection_string)
        .await
        .expect("TO CONNECT TO POSTGRES");

    sqlx::migrate!().run(&pool).await
}
