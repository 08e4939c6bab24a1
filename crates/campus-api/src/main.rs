//! campus-api server binary.
//!
//! Configuration comes from the environment (`PORT`, `DATABASE_URL`,
//! `DB_MAX_CONNECTIONS`). Set `SEED_SAMPLE=1` to load the sample directory.

use std::process::ExitCode;

use campus_api::{bootstrap, server, telemetry, AppConfig};

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init_tracing();

    let config = AppConfig::from_env();
    let seed = std::env::var("SEED_SAMPLE").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));

    let result = match bootstrap(config, seed).await {
        Ok(state) => server::serve(state).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("campus-api failed: {e}");
            ExitCode::FAILURE
        }
    }
}
