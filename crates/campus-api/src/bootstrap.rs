//! Startup wiring: choose the repository backend and optionally seed it.

use std::sync::Arc;

use campus_core::{seed_sample, CampusRepository, MemoryRepository, RepositoryError};
use thiserror::Error;

use crate::db::{self, PgRepository};
use crate::state::{AppConfig, AppState};

/// Failures that stop the service before it serves traffic.
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("database initialization failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("seeding sample data failed: {0}")]
    Seed(#[from] RepositoryError),

    #[error("failed to bind listener: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the application state for `config`.
///
/// Uses Postgres when a database URL is configured, the in-memory
/// repository otherwise. With `seed` set, the sample directory is
/// inserted before the state is returned.
pub async fn bootstrap(config: AppConfig, seed: bool) -> Result<AppState, BootstrapError> {
    let repo: Arc<dyn CampusRepository> = match db::init_pool(&config).await? {
        Some(pool) => Arc::new(PgRepository::new(pool)),
        None => Arc::new(MemoryRepository::new()),
    };

    if seed {
        seed_sample(repo.as_ref()).await?;
    }

    Ok(AppState::with_repository(config, repo))
}
