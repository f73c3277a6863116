// Path: crates/telemetry/src/time.rs
use crate::sinks::ChainMetricsSink;
use std::time::{Duration, Instant};

/// Observes the latency of one RPC call when dropped.
pub struct Timer<'a> {
    sink: &'a dyn ChainMetricsSink,
    method: &'a str,
    start: Instant,
}

impl<'a> Timer<'a> {
    /// Starts timing a call to `method`.
    pub fn new(sink: &'a dyn ChainMetricsSink, method: &'a str) -> Self {
        Self {
            sink,
            method,
            start: Instant::now(),
        }
    }

    /// Time since the timer started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer<'_> {
    fn drop(&mut self) {
        self.sink
            .observe_rpc_latency(self.method, self.start.elapsed().as_secs_f64());
    }
}
