//! `campus serve`: run the HTTP API.

use anyhow::{Context, Result};
use campus_api::{bootstrap, server, AppConfig};
use clap::Args;

/// Arguments for `campus serve`. Flags override the environment.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Listen port.
    #[arg(long)]
    pub port: Option<u16>,

    /// Postgres URL. Without one the API runs in memory.
    #[arg(long)]
    pub database_url: Option<String>,

    /// Insert the sample directory before serving.
    #[arg(long)]
    pub seed: bool,
}

impl ServeArgs {
    /// Overlay the flags onto `base`.
    pub fn apply(&self, base: AppConfig) -> AppConfig {
        AppConfig {
            port: self.port.unwrap_or(base.port),
            database_url: self.database_url.clone().or(base.database_url),
            ..base
        }
    }
}

pub fn run_serve(args: &ServeArgs) -> Result<u8> {
    let config = args.apply(AppConfig::from_env());
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(async {
        let state = bootstrap(config, args.seed).await?;
        server::serve(state).await
    })?;
    Ok(0)
}
