//! # Request Metrics
//!
//! In-process request counters, split by response class. The counters
//! travel as a request extension and are reported at `GET /metrics`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use axum::{Extension, Json};
use serde::Serialize;

#[derive(Debug, Default)]
struct Counters {
    requests: AtomicU64,
    client_errors: AtomicU64,
    server_errors: AtomicU64,
}

/// Shared request counters. Cloning shares the counters.
#[derive(Debug, Clone, Default)]
pub struct ApiMetrics {
    counters: Arc<Counters>,
}

/// Point-in-time view of [`ApiMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub requests: u64,
    pub client_errors: u64,
    pub server_errors: u64,
}

impl ApiMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, status: axum::http::StatusCode) {
        self.counters.requests.fetch_add(1, Ordering::Relaxed);
        if status.is_client_error() {
            self.counters.client_errors.fetch_add(1, Ordering::Relaxed);
        } else if status.is_server_error() {
            self.counters.server_errors.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests: self.counters.requests.load(Ordering::Relaxed),
            client_errors: self.counters.client_errors.load(Ordering::Relaxed),
            server_errors: self.counters.server_errors.load(Ordering::Relaxed),
        }
    }
}

/// Middleware that counts every response by class.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let metrics = request.extensions().get::<ApiMetrics>().cloned();

    let response = next.run(request).await;

    if let Some(m) = metrics {
        m.record(response.status());
    }

    response
}

/// GET /metrics: current counters.
pub async fn metrics_handler(Extension(metrics): Extension<ApiMetrics>) -> Json<MetricsSnapshot> {
    Json(metrics.snapshot())
}
