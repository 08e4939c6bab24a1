//! # Application State
//!
//! Shared state passed to every handler through the `State` extractor:
//! the loaded [`AppConfig`] and the repository the handlers talk to.
//! Handlers see only the [`CampusRepository`] trait, so the same router
//! runs over Postgres in production and the in-memory store in tests.

use std::fmt::Display;
use std::num::NonZeroU32;
use std::str::FromStr;
use std::sync::Arc;

use campus_core::{CampusRepository, MemoryRepository};

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default Postgres pool size.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

const DEFAULT_POOL_SIZE: NonZeroU32 = match NonZeroU32::new(DEFAULT_MAX_CONNECTIONS) {
    Some(n) => n,
    None => panic!("DEFAULT_MAX_CONNECTIONS must be non-zero"),
};

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// Postgres URL. `None` runs on the in-memory repository.
    pub database_url: Option<String>,
    /// Postgres pool size. Never zero.
    pub max_connections: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl AppConfig {
    /// Load from `PORT`, `DATABASE_URL` and `DB_MAX_CONNECTIONS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable source. Unparseable values fall
    /// back to their defaults with a warning, as does a pool size of 0.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT),
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_POOL_SIZE).get(),
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            tracing::warn!("Invalid {key} value {raw:?}: {e}; using default {default}");
            default
        }),
        None => default,
    }
}

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub repo: Arc<dyn CampusRepository>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Default config over an empty in-memory repository.
    pub fn new() -> Self {
        Self::with_repository(AppConfig::default(), Arc::new(MemoryRepository::new()))
    }

    pub fn with_repository(config: AppConfig, repo: Arc<dyn CampusRepository>) -> Self {
        Self { config, repo }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])), AppConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "3000"),
            ("DATABASE_URL", "postgres://localhost/campus"),
            ("DB_MAX_CONNECTIONS", "4"),
        ]));
        assert_eq!(config.port, 3000);
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/campus"));
        assert_eq!(config.max_connections, 4);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "eighty"),
            ("DATABASE_URL", "  "),
            ("DB_MAX_CONNECTIONS", "-1"),
        ]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn zero_pool_size_falls_back() {
        let config = AppConfig::from_lookup(lookup(&[("DB_MAX_CONNECTIONS", "0")]));
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);

        let config = AppConfig::from_lookup(lookup(&[("DB_MAX_CONNECTIONS", " 1 ")]));
        assert_eq!(config.max_connections, 1);
    }
}
