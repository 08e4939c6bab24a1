//! Tracing subscriber setup.
//!
//! `RUST_LOG` selects the filter (default `info`) unless the caller
//! passes one. `LOG_FORMAT=json` switches to one JSON object per line for
//! log shippers. Output goes to stderr so command output on stdout stays
//! clean.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Output format for the global subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// Anything other than `json` (case-insensitive) is pretty output.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.trim().eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Pretty,
        }
    }

    /// Read `LOG_FORMAT` from the environment.
    pub fn from_env() -> Self {
        Self::parse(std::env::var("LOG_FORMAT").ok().as_deref())
    }
}

/// Install the global subscriber with the `RUST_LOG` filter.
pub fn init_tracing() {
    init_tracing_with(None);
}

/// Install the global subscriber. `filter` overrides `RUST_LOG`.
/// Calling it twice is a no-op.
pub fn init_tracing_with(filter: Option<EnvFilter>) {
    let filter = filter.unwrap_or_else(|| {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    });

    let subscriber = build_subscriber(LogFormat::from_env(), filter, std::io::stderr);
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

fn build_subscriber<W>(
    format: LogFormat,
    filter: EnvFilter,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);
    match format {
        LogFormat::Json => Box::new(builder.json().finish()),
        LogFormat::Pretty => Box::new(builder.with_ansi(false).finish()),
    }
}
