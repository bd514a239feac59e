//! Metrics collection and exposition.
//!
//! # Metrics
//! - `http_requests_total` (counter): requests by method, path, status
//! - `http_request_duration_seconds` (histogram): latency by method, path
//!
//! # Design Decisions
//! - The registry owns its own recorder instead of installing a global one;
//!   it travels with the router state so each server instance is isolated
//! - Handles inside the recorder are atomic, so concurrent requests never
//!   lose increments
//! - Histogram buckets tuned for typical web latencies
//! - Both families print HELP/TYPE headers from startup, before any sample
//!
//! The path dimension is labelled `path`. Dashboards and alerts keyed on an
//! `endpoint` label must be renamed to `path`.

use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle, PrometheusRecorder};

pub use metrics_exporter_prometheus::BuildError;

/// Counter family name.
pub const REQUESTS_TOTAL: &str = "http_requests_total";

/// Histogram family name.
pub const REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";

/// Latency bucket upper bounds, in seconds.
pub const LATENCY_BUCKETS: [f64; 10] = [0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.0, 5.0];

/// Content type of the Prometheus text exposition format.
pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Families always present in rendered output: (name, type, help).
const FAMILIES: [(&str, &str, &str); 2] = [
    (REQUESTS_TOTAL, "counter", "Total HTTP requests"),
    (REQUEST_DURATION_SECONDS, "histogram", "HTTP request latency in seconds"),
];

/// Request count and latency metrics for one server instance.
pub struct MetricsRegistry {
    recorder: PrometheusRecorder,
    handle: PrometheusHandle,
}

impl MetricsRegistry {
    /// Create a registry with the latency histogram buckets configured.
    pub fn new() -> Result<Self, BuildError> {
        let recorder = PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Full(REQUEST_DURATION_SECONDS.to_string()),
                &LATENCY_BUCKETS,
            )?
            .build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            describe_counter!(REQUESTS_TOTAL, FAMILIES[0].2);
            describe_histogram!(
                REQUEST_DURATION_SECONDS,
                Unit::Seconds,
                FAMILIES[1].2
            );
        });

        Ok(Self { recorder, handle })
    }

    /// Count one completed request.
    pub fn record_request(&self, method: &str, path: &str, status: u16) {
        let labels = [
            ("method", method.to_string()),
            ("path", path.to_string()),
            ("status", status.to_string()),
        ];
        metrics::with_local_recorder(&self.recorder, || {
            counter!(REQUESTS_TOTAL, &labels).increment(1);
        });
    }

    /// Observe one request latency. Negative durations are clamped to zero.
    pub fn record_latency(&self, method: &str, path: &str, duration_secs: f64) {
        let labels = [("method", method.to_string()), ("path", path.to_string())];
        metrics::with_local_recorder(&self.recorder, || {
            histogram!(REQUEST_DURATION_SECONDS, &labels).record(duration_secs.max(0.0));
        });
    }

    /// Render all metrics in the Prometheus text exposition format.
    ///
    /// The exporter omits families with no samples yet; their headers are
    /// appended so a fresh registry still advertises both families.
    pub fn render(&self) -> String {
        let mut body = self.handle.render();
        for (name, kind, help) in FAMILIES {
            if !body.contains(&format!("# TYPE {} ", name)) {
                if !body.is_empty() && !body.ends_with('\n') {
                    body.push('\n');
                }
                body.push_str(&format!("# HELP {} {}\n# TYPE {} {}\n", name, help, name, kind));
            }
        }
        body
    }
}
