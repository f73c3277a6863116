// Path: crates/cli/src/lib.rs
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

//! # Agent Identity CLI Library
//!
//! The pieces of the `agentid` binary that are worth testing on their own:
//! layered configuration loading and manifest hashing. Everything else lives
//! in the library crates the binary drives.

pub mod config;
pub mod hashing;

pub use config::{load_chain_config, DEFAULT_LOG_FILTER};
