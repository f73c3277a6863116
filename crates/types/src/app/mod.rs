// Path: crates/types/src/app/mod.rs
//! Core application-level data structures: agents, manifests and attestations.

/// On-chain attestation records, receipts and the encodable payload.
pub mod attestation;
/// Fixed-width hex identifiers such as `Bytes32` and `Address`.
pub mod identity;
/// Agent definitions, manifests and their derived fingerprints.
pub mod manifest;

pub use attestation::{
    AttestationDraft, AttestationPayload, OnChainAttestation, StoredAttestation, TxReceipt,
};
pub use identity::{is_valid_bytes32, Address, Bytes32};
pub use manifest::{AgentDefinition, AgentFingerprint, AgentManifest};
