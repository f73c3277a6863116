// Path: crates/cli/src/hashing.rs

use agentid_crypto::dna::{agent_fingerprint, canonical_manifest};
use agentid_types::app::{AgentFingerprint, AgentManifest};
use anyhow::{Context, Result};

/// A manifest and its two identity hashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedManifest {
    pub manifest: AgentManifest,
    pub fingerprint: AgentFingerprint,
    /// The exact bytes the manifest hash is taken over.
    pub canonical: String,
}

/// Parses a manifest document and computes its hashes.
pub fn hash_manifest_json(text: &str) -> Result<HashedManifest> {
    let manifest: AgentManifest =
        serde_json::from_str(text).context("not an agent manifest")?;
    let fingerprint = agent_fingerprint(&manifest)?;
    let canonical = String::from_utf8(canonical_manifest(&manifest)?)
        .context("canonical manifest is not UTF-8")?;
    Ok(HashedManifest {
        manifest,
        fingerprint,
        canonical,
    })
}
