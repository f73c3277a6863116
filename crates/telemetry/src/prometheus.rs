// Path: crates/telemetry/src/prometheus.rs
//! A concrete implementation of the metrics sinks using the Prometheus crate.

use crate::sinks::*;
use once_cell::sync::OnceCell;
use prometheus::{
    exponential_buckets, register_histogram_vec, register_int_counter_vec, Encoder,
    HistogramVec, IntCounterVec, TextEncoder,
};

// --- Metric Statics ---
// Initialized exactly once by `install`.

static RPC_REQUESTS_TOTAL: OnceCell<IntCounterVec> = OnceCell::new();
static RPC_REQUEST_DURATION_SECONDS: OnceCell<HistogramVec> = OnceCell::new();
static RPC_RETRIES_TOTAL: OnceCell<IntCounterVec> = OnceCell::new();
static AUDIT_RECORDS_TOTAL: OnceCell<IntCounterVec> = OnceCell::new();
static ERRORS_TOTAL: OnceCell<IntCounterVec> = OnceCell::new();

/// The Prometheus-backed sink. Records nothing until [`install`] has run.
#[derive(Debug, Clone, Copy)]
pub struct PrometheusSink;

/// Runs `$body` with the collector bound to `$m`, if it has been installed.
macro_rules! with_metric {
    ($metric:ident, $m:ident => $body:expr) => {
        if let Some($m) = $metric.get() {
            $body;
        }
    };
}

impl ChainMetricsSink for PrometheusSink {
    fn inc_rpc_requests(&self, method: &str, outcome: &'static str) {
        with_metric!(RPC_REQUESTS_TOTAL, m => m.with_label_values(&[method, outcome]).inc());
    }
    fn observe_rpc_latency(&self, method: &str, duration_secs: f64) {
        with_metric!(RPC_REQUEST_DURATION_SECONDS, m => m
            .with_label_values(&[method])
            .observe(duration_secs));
    }
    fn inc_rpc_retries(&self, method: &str) {
        with_metric!(RPC_RETRIES_TOTAL, m => m.with_label_values(&[method]).inc());
    }
}

impl AuditMetricsSink for PrometheusSink {
    fn inc_audit_outcome(&self, status: &'static str) {
        with_metric!(AUDIT_RECORDS_TOTAL, m => m.with_label_values(&[status]).inc());
    }
}

impl ErrorMetricsSink for PrometheusSink {
    fn inc_error(&self, kind: &'static str, code: &'static str) {
        with_metric!(ERRORS_TOTAL, m => m.with_label_values(&[kind, code]).inc());
    }
}

fn already_installed<T>(_: T) -> prometheus::Error {
    prometheus::Error::AlreadyReg
}

/// Registers all collectors with the default registry and makes the Prometheus
/// sink the global sink. Fails if called twice.
pub fn install() -> Result<&'static dyn MetricsSink, prometheus::Error> {
    RPC_REQUESTS_TOTAL
        .set(register_int_counter_vec!(
            "agentid_rpc_requests_total",
            "Total JSON-RPC requests sent to the chain node, by method and outcome.",
            &["method", "outcome"]
        )?)
        .map_err(already_installed)?;
    RPC_REQUEST_DURATION_SECONDS
        .set(register_histogram_vec!(
            "agentid_rpc_request_duration_seconds",
            "Latency of JSON-RPC requests.",
            &["method"],
            exponential_buckets(0.005, 2.0, 14)?
        )?)
        .map_err(already_installed)?;
    RPC_RETRIES_TOTAL
        .set(register_int_counter_vec!(
            "agentid_rpc_retries_total",
            "Total retries after rate-limit responses.",
            &["method"]
        )?)
        .map_err(already_installed)?;
    AUDIT_RECORDS_TOTAL
        .set(register_int_counter_vec!(
            "agentid_audit_records_total",
            "Total audited attestation records, by status.",
            &["status"]
        )?)
        .map_err(already_installed)?;
    ERRORS_TOTAL
        .set(register_int_counter_vec!(
            "agentid_errors_total",
            "Total number of errors, categorized by kind and code.",
            &["kind", "code"]
        )?)
        .map_err(already_installed)?;

    static PROMETHEUS_SINK: PrometheusSink = PrometheusSink;
    SINK.set(&PROMETHEUS_SINK).map_err(already_installed)?;
    Ok(&PROMETHEUS_SINK)
}

/// Renders every registered metric in the Prometheus text exposition format.
pub fn gather_text() -> Result<String, prometheus::Error> {
    let mut buf = Vec::new();
    TextEncoder::new().encode(&prometheus::gather(), &mut buf)?;
    String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_registers_and_exposes_metrics() {
        let sink = install().unwrap();
        sink.inc_rpc_requests("eth_call", "ok");
        sink.observe_rpc_latency("eth_call", 0.02);
        sink.inc_audit_outcome("MISMATCH");
        crate::chain_metrics().inc_rpc_retries("eth_call");

        let text = gather_text().unwrap();
        assert!(text.contains("agentid_rpc_requests_total{method=\"eth_call\",outcome=\"ok\"} 1"));
        assert!(text.contains("agentid_audit_records_total{status=\"MISMATCH\"} 1"));
        assert!(text.contains("agentid_rpc_retries_total{method=\"eth_call\"} 1"));

        assert!(install().is_err());
    }
}
