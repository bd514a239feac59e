//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, tracing)
//!     → middleware/metrics.rs (start timer)
//!     → handlers.rs (/, /health, /error, /metrics, fallback)
//!     → middleware/metrics.rs (count + latency)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod server;

pub use handlers::HealthStatus;
pub use server::{AppState, HttpServer};
