// Path: crates/crypto/src/algorithms/mod.rs
//! Hash primitives.

pub mod hash;
