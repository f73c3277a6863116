// Path: crates/test_utils/src/lib.rs
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

//! # Agent Identity Test Utilities
//!
//! Golden vectors, deterministic payload generation, assertion macros and an
//! in-process JSON-RPC node that serves registry records.

pub mod assertions;
pub mod fixtures;
pub mod mock_rpc;
pub mod randomness;

// Re-exported so the assertion macros resolve without a direct dependency.
pub use agentid_types;
