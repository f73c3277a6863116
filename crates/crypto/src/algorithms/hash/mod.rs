// Path: crates/crypto/src/algorithms/hash/mod.rs
//! SHA-256 over byte-like values.

use agentid_types::app::Bytes32;
use sha2::{Digest, Sha256};

/// SHA-256 of any byte-like value.
pub fn sha256<T: AsRef<[u8]>>(data: T) -> [u8; 32] {
    Sha256::digest(data.as_ref()).into()
}

/// SHA-256 of any byte-like value, as a `Bytes32`.
pub fn sha256_bytes32<T: AsRef<[u8]>>(data: T) -> Bytes32 {
    Bytes32(sha256(data))
}

#[cfg(test)]
mod tests;
