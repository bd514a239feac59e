//! HTTP middleware.

pub mod metrics;

pub use metrics::{track_metrics, RequestContext, METRICS_PATH};
