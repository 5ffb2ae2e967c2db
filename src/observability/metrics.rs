//! Metrics collection and exposition.
//!
//! # Metrics
//! - `lead_relay_submissions_total` (counter): submissions by outcome
//! - `lead_relay_webhook_duration_seconds` (histogram): outbound call latency
//!
//! Without an installed recorder every call here is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Count one finished submission.
pub fn record_submission(outcome: &'static str) {
    metrics::counter!("lead_relay_submissions_total", "outcome" => outcome).increment(1);
}

/// Record latency of one webhook call.
pub fn record_webhook_call(start: Instant, success: bool) {
    let result = if success { "success" } else { "failure" };
    metrics::histogram!("lead_relay_webhook_duration_seconds", "result" => result)
        .record(start.elapsed().as_secs_f64());
}
