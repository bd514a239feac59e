//! Request metrics interceptor.
//! Times every request and records it once the response exists.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::http::server::AppState;

/// Path of the scrape endpoint, excluded from latency observations.
pub const METRICS_PATH: &str = "/metrics";

/// Per-request state carried from dispatch to completion.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext {
    started: Instant,
}

impl RequestContext {
    /// Capture the start of a request.
    pub fn begin() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Seconds since `begin`, never negative.
    pub fn elapsed_seconds(&self) -> f64 {
        Instant::now()
            .saturating_duration_since(self.started)
            .as_secs_f64()
    }
}

/// Wraps route dispatch with request counting and latency tracking.
///
/// Runs for every request, including 404/405 fallbacks and the forced
/// error route. Scrapes of `/metrics` are counted but not timed.
pub async fn track_metrics(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let ctx = RequestContext::begin();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    state.metrics.record_request(&method, &path, status);

    let latency = ctx.elapsed_seconds();
    if path != METRICS_PATH {
        state.metrics.record_latency(&method, &path, latency);
    }

    tracing::debug!(
        method = %method,
        path = %path,
        status,
        latency_secs = latency,
        "Request completed"
    );

    response
}
