// Path: crates/types/src/codec/mod.rs

//! The Ethereum ABI codec for the agent identity tuple and the registry record.
//!
//! This is not a general ABI implementation. It knows exactly two shapes: the
//! nine-field `AttestationPayload` tuple that is stored as attestation data, and
//! the tuple returned by the registry's `getAttestation`. Both are read through
//! the same bounds-checked [`word::WordReader`].

/// The nine-field attestation payload tuple.
pub mod payload;
/// The `getAttestation` return tuple and its calldata.
pub mod registry;
/// 32-byte word primitives shared by both layouts.
pub mod word;

pub use payload::{decode, encode, encode_draft, FIELD_COUNT, HEAD_SIZE};
pub use registry::{
    decode_record, encode_record, get_attestation_calldata, GET_ATTESTATION_SELECTOR,
};
pub use word::{Offset, WordReader, WORD};

#[cfg(test)]
mod tests;
