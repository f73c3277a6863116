// Path: crates/client/src/lib.rs
//! # Agent Identity Client Crate Lints
//!
//! This crate enforces a strict set of lints to ensure high-quality,
//! panic-free, and well-documented code. Panics are disallowed in non-test
//! code to promote robust error handling.
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

//! # Agent Identity Chain Client
//!
//! A minimal JSON-RPC 2.0 client that reads attestation records, receipts and
//! chain metadata. It performs exactly one HTTP request per call and never
//! retries; backoff policy belongs to the caller.

pub mod chain;
pub mod reader;
pub mod rpc;

// Re-export for convenience
pub use chain::ChainClient;
pub use reader::ChainReader;
