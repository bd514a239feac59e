//! Docker status service.
//!
//! A small HTTP service with greeting, health, forced-error and Prometheus
//! metrics routes. Every request is counted and timed.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ───────────────▶ ┌──────────┐    ┌──────────────┐    ┌──────────┐
//!                      │  axum    │───▶│   metrics    │───▶│ handlers │
//!                      │  server  │    │ interceptor  │    │          │
//!     Client Response  │          │◀───│ count/latency│◀───│          │
//!     ◀─────────────── └──────────┘    └──────┬───────┘    └──────────┘
//!                                             ▼
//!                                     ┌──────────────┐
//!                                     │   registry   │──▶ GET /metrics
//!                                     └──────────────┘
//!
//!     config (env, once) ─▶ server        SIGINT/SIGTERM ─▶ log, exit(0)
//! ```

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match docker_status_service::lifecycle::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("docker-status-service: {}", e);
            ExitCode::FAILURE
        }
    }
}
