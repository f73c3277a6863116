// Path: crates/services/src/lib.rs
#![forbid(unsafe_code)]
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

//! Workflows built on the codec, the hasher and the chain client.
//!
//! Every workflow reads the chain through [`agentid_client::ChainReader`], so
//! the same code runs against a live node, a mock node or a fake.

pub mod audit;
pub mod proof;
pub mod report;
pub mod retry;
pub mod source;
pub mod status;
pub mod submit;
pub mod verify;

pub use retry::{RetryPolicy, Retrying};
