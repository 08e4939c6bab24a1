//! # campus-api: Axum API Service
//!
//! HTTP surface of the campus directory, built on Axum/Tower/Tokio.
//!
//! ## Routes
//!
//! - `/api/campuses/*`: campus and roster operations (see [`routes::campuses`])
//! - `/openapi.json`: generated OpenAPI document
//! - `/health/*`: liveness and readiness probes
//! - `/metrics`: request counters as JSON
//!
//! ## Middleware Stack (Tower)
//!
//! TraceLayer → CORS → MetricsMiddleware → Handler
//!
//! ## Crate Policy
//!
//! - No business logic in route handlers; validation and grouping live
//!   in `campus-core`.
//! - All errors map to structured HTTP responses via [`AppError`].

pub mod bootstrap;
pub mod db;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

pub use bootstrap::{bootstrap, BootstrapError};
pub use error::AppError;
pub use state::{AppConfig, AppState};

use axum::extract::State;
use axum::http::{header, Method, StatusCode};
use axum::middleware::from_fn;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use middleware::metrics::{metrics_handler, metrics_middleware, ApiMetrics};

/// Assemble the full application router.
pub fn app(state: AppState) -> Router {
    let metrics = ApiMetrics::new();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(routes::campuses::router())
        .merge(openapi::router())
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .route("/metrics", get(metrics_handler))
        .layer(from_fn(metrics_middleware))
        .layer(axum::Extension(metrics))
        .layer(cors)
        .layer(middleware::tracing_layer::layer())
        .with_state(state)
}

/// Liveness probe: the process is up.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: the repository answers a query.
///
/// Returns 200 "ready" or 503 when the backend is unreachable.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    match state.repo.list_campuses().await {
        Ok(_) => (StatusCode::OK, "ready").into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "repository unavailable").into_response()
        }
    }
}
