//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request interceptor produces:
//!     → logging.rs (structured log events)
//!     → metrics.rs (request counter, latency histogram)
//!
//! Consumers:
//!     → stdout log collection
//!     → GET /metrics (Prometheus scrape)
//! ```

pub mod logging;
pub mod metrics;

pub use metrics::MetricsRegistry;
