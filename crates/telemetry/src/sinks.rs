// Path: crates/telemetry/src/sinks.rs
//! Defines abstract traits for metrics reporting, decoupling core logic from the backend.

use once_cell::sync::OnceCell;

// --- Static Sink Access ---

/// A no-op sink for use in tests or when telemetry is disabled.
#[derive(Debug, Clone, Copy)]
pub struct NopSink;

/// A lazily-initialized static reference to the global `MetricsSink` implementation.
pub static SINK: OnceCell<&'static dyn MetricsSink> = OnceCell::new();
static NOP_SINK: NopSink = NopSink;

/// Returns the configured chain client metrics sink, or a no-op sink.
pub fn chain_metrics() -> &'static dyn ChainMetricsSink {
    SINK.get().copied().unwrap_or(&NOP_SINK)
}

/// Returns the configured audit metrics sink, or a no-op sink.
pub fn audit_metrics() -> &'static dyn AuditMetricsSink {
    SINK.get().copied().unwrap_or(&NOP_SINK)
}

/// Returns the configured error metrics sink, or a no-op sink.
pub fn error_metrics() -> &'static dyn ErrorMetricsSink {
    SINK.get().copied().unwrap_or(&NOP_SINK)
}

// --- Trait Definitions ---

/// A sink for metrics about JSON-RPC traffic to the chain node.
pub trait ChainMetricsSink: Send + Sync + std::fmt::Debug {
    /// Counts one finished request, labeled by method and outcome (`ok` or an error code).
    fn inc_rpc_requests(&self, method: &str, outcome: &'static str);
    /// Observes the latency of one request.
    fn observe_rpc_latency(&self, method: &str, duration_secs: f64);
    /// Counts one retry after a rate-limit response.
    fn inc_rpc_retries(&self, method: &str);
}
impl ChainMetricsSink for NopSink {
    fn inc_rpc_requests(&self, _method: &str, _outcome: &'static str) {}
    fn observe_rpc_latency(&self, _method: &str, _duration_secs: f64) {}
    fn inc_rpc_retries(&self, _method: &str) {}
}

/// A sink for audit results.
pub trait AuditMetricsSink: Send + Sync + std::fmt::Debug {
    /// Counts one audited record, labeled by its status.
    fn inc_audit_outcome(&self, status: &'static str);
}
impl AuditMetricsSink for NopSink {
    fn inc_audit_outcome(&self, _status: &'static str) {}
}

/// A sink for recording structured error metrics.
pub trait ErrorMetricsSink: Send + Sync + std::fmt::Debug {
    /// Increments a counter for a specific error, categorized by its kind and stable code.
    fn inc_error(&self, kind: &'static str, code: &'static str);
}
impl ErrorMetricsSink for NopSink {
    fn inc_error(&self, _kind: &'static str, _code: &'static str) {}
}

/// A unified sink that implements all domain-specific traits, providing a single
/// point of implementation for metrics backends like Prometheus.
pub trait MetricsSink: ChainMetricsSink + AuditMetricsSink + ErrorMetricsSink {}

// Blanket implementation to allow any type that implements all sub-traits
// to be used as a `MetricsSink`.
impl<T> MetricsSink for T where T: ChainMetricsSink + AuditMetricsSink + ErrorMetricsSink {}
