// Path: crates/crypto/src/dna/mod.rs
//! Agent DNA: the prompt and manifest hashes that identify an agent.
//!
//! Both hashes are SHA-256 over RFC 8785 canonical JSON. The prompt hash covers
//! the object `{"systemPrompt": <prompt>}` rather than the raw prompt text, so
//! it can never collide with the manifest hash of the same prompt.

use crate::algorithms::hash::sha256_bytes32;
use crate::canonical::{canonicalize, canonicalize_serializable, CanonicalValue};
use agentid_types::app::manifest::{DEFAULT_RESPONSE_FORMAT, DEFAULT_RESPONSE_LENGTH};
use agentid_types::app::{AgentDefinition, AgentFingerprint, AgentManifest, Bytes32};
use agentid_types::error::CanonicalError;

/// The canonical bytes hashed into an agent's prompt hash.
pub fn canonical_prompt(system_prompt: &str) -> Result<Vec<u8>, CanonicalError> {
    canonicalize(&CanonicalValue::object([(
        "systemPrompt",
        CanonicalValue::from(system_prompt),
    )]))
}

/// The canonical bytes hashed into an agent's manifest hash.
pub fn canonical_manifest(manifest: &AgentManifest) -> Result<Vec<u8>, CanonicalError> {
    canonicalize_serializable(manifest)
}

/// Hashes a system prompt.
pub fn hash_prompt(system_prompt: &str) -> Result<Bytes32, CanonicalError> {
    Ok(sha256_bytes32(canonical_prompt(system_prompt)?))
}

/// Hashes a full manifest, absent fields included as `null`.
pub fn hash_manifest(manifest: &AgentManifest) -> Result<Bytes32, CanonicalError> {
    Ok(sha256_bytes32(canonical_manifest(manifest)?))
}

/// Computes both hashes of a manifest.
pub fn agent_fingerprint(manifest: &AgentManifest) -> Result<AgentFingerprint, CanonicalError> {
    Ok(AgentFingerprint {
        prompt_hash: hash_prompt(&manifest.system_prompt)?,
        manifest_hash: hash_manifest(manifest)?,
    })
}

fn set(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

/// Assembles the manifest for an agent.
///
/// Empty optional fields become `None` and unset response hints take their
/// defaults, so two definitions that differ only in empty-versus-missing
/// fields produce the same manifest hash.
pub fn build_manifest(
    agent_id: &str,
    system_prompt: &str,
    definition: &AgentDefinition,
    created_at: &str,
) -> AgentManifest {
    AgentManifest {
        agent_id: agent_id.to_string(),
        name: definition.name.clone(),
        system_prompt: system_prompt.to_string(),
        preset_id: set(&definition.preset_id),
        tier: definition.tier.clone(),
        model: set(&definition.model),
        response_length: set(&definition.response_length)
            .unwrap_or_else(|| DEFAULT_RESPONSE_LENGTH.to_string()),
        response_format: set(&definition.response_format)
            .unwrap_or_else(|| DEFAULT_RESPONSE_FORMAT.to_string()),
        created_at: created_at.to_string(),
        parent_id: set(&definition.parent_id),
        owner_id: set(&definition.owner_id),
    }
}
