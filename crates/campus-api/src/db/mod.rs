//! # Database Persistence Layer
//!
//! Postgres persistence for campuses and students via SQLx.
//!
//! The database is **optional**. When a database URL is configured the API
//! stores everything in PostgreSQL through [`PgRepository`]; otherwise it
//! runs on the in-memory repository and state is lost on restart.

pub mod campuses;

pub use campuses::PgRepository;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::state::AppConfig;

/// Connect and run embedded migrations.
///
/// Returns `None` when no database URL is configured.
pub async fn init_pool(config: &AppConfig) -> Result<Option<PgPool>, sqlx::Error> {
    let Some(url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set; running in-memory only. State will not survive restarts.");
        return Ok(None);
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(1)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect(url)
        .await?;

    tracing::info!(max_connections = config.max_connections, "Connected to PostgreSQL");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations applied");

    Ok(Some(pool))
}
