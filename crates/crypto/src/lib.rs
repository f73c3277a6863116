// Path: crates/crypto/src/lib.rs
//! # Agent Identity Crypto Crate Lints
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
        clippy::indexing_slicing
    )
)]
//! # Agent Identity Cryptography
//!
//! The content-addressing layer: RFC 8785 canonical JSON, SHA-256, and the two
//! agent hashes built from them. Every function here is pure.

pub mod algorithms;
pub mod canonical;
pub mod dna;
