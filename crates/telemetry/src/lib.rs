// Path: crates/telemetry/src/lib.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # Agent Identity Telemetry
//!
//! Structured logging initialization and abstract metrics sinks, so that the
//! chain client and the audit pipeline can be instrumented without knowing
//! whether a Prometheus registry is installed.

/// The initialization routine for global structured logging.
pub mod init;
/// The concrete implementation of metrics sinks using the `prometheus` crate.
pub mod prometheus;
/// Abstract traits (`*MetricsSink`) that define the contract for metrics reporting.
pub mod sinks;
/// A simple RAII timer for measuring the duration of an RPC call.
pub mod time;

// Re-export the public helper functions for easy access to the global sinks.
pub use sinks::{audit_metrics, chain_metrics, error_metrics};
