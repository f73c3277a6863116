// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![warn(missing_docs)]
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

//! # Agent Identity Types
//!
//! This crate is the foundational library for the agent identity toolkit, containing
//! the data model, error types, chain configuration and the fixed-layout ABI codec.
//!
//! ## Architectural Role
//!
//! As the base crate, `agentid-types` has minimal dependencies and is itself a
//! dependency for every other crate in the workspace. It performs no I/O and holds
//! the single definition of shared values like `Bytes32`, `AgentManifest`,
//! `AttestationPayload` and `OnChainAttestation`.

/// A top-level, crate-wide `Result` type alias with a default error type.
pub type Result<T, E = crate::error::DecodeError> = std::result::Result<T, E>;

/// Agent, attestation and hash value types.
pub mod app;
/// The fixed 9-field ABI codec and the registry record decoder.
pub mod codec;
/// Chain configuration and the well-known deployment constants.
pub mod config;
/// A unified set of all error types used across the workspace.
pub mod error;
/// A prelude containing useful extension traits like `OptionExt`.
pub mod prelude;
