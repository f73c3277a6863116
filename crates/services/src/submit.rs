// Path: crates/services/src/submit.rs
//! Builds submission-ready attestation data from flags and manifest files.
//!
//! Nothing here signs or broadcasts. The output is the ABI-encoded payload to
//! pass to the registry's `attest` call.

use crate::report::{display_or_none, format_unix_utc, TextReport};
use agentid_crypto::dna::agent_fingerprint;
use agentid_types::app::{AgentManifest, AttestationDraft, AttestationPayload};
use agentid_types::codec;
use agentid_types::error::EncodeError;
use anyhow::{anyhow, Context};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// A creation time as found in manifest files: unix seconds or ISO-8601 text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Unix(u64),
    Iso8601(String),
}

impl Timestamp {
    /// The timestamp in unix seconds.
    pub fn unix_seconds(&self) -> anyhow::Result<u64> {
        match self {
            Self::Unix(secs) => Ok(*secs),
            Self::Iso8601(text) => {
                let at = OffsetDateTime::parse(text, &Rfc3339)
                    .with_context(|| format!("createdAt {text:?} is not an RFC 3339 timestamp"))?;
                u64::try_from(at.unix_timestamp())
                    .map_err(|_| anyhow!("createdAt {text:?} is before the unix epoch"))
            }
        }
    }
}

/// The fields a JSON manifest file may contribute to a submission.
///
/// Unknown keys (such as `systemPrompt`) are ignored and `null` reads as unset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftFile {
    pub agent_id: Option<String>,
    pub name: Option<String>,
    pub preset_id: Option<String>,
    pub tier: Option<String>,
    pub prompt_hash: Option<String>,
    pub manifest_hash: Option<String>,
    pub parent_id: Option<String>,
    pub owner_id: Option<String>,
    pub created_at: Option<Timestamp>,
}

impl DraftFile {
    pub fn into_draft(self) -> anyhow::Result<AttestationDraft> {
        let created_at = match &self.created_at {
            Some(ts) => ts.unix_seconds()?,
            None => 0,
        };
        Ok(AttestationDraft {
            agent_id: self.agent_id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            preset_id: self.preset_id.unwrap_or_default(),
            tier: self.tier.unwrap_or_default(),
            prompt_hash: self.prompt_hash.unwrap_or_default(),
            manifest_hash: self.manifest_hash.unwrap_or_default(),
            parent_id: self.parent_id.unwrap_or_default(),
            owner_id: self.owner_id.unwrap_or_default(),
            created_at,
        })
    }
}

/// Parses a JSON manifest or draft document.
///
/// When the document carries neither hash but is a complete agent manifest,
/// both hashes are computed from it.
pub fn parse_draft(text: &str) -> anyhow::Result<AttestationDraft> {
    let value: Value = serde_json::from_str(text).context("invalid JSON")?;
    let file: DraftFile =
        serde_json::from_value(value.clone()).context("unexpected manifest shape")?;
    let mut draft = file.into_draft()?;

    if draft.prompt_hash.is_empty() && draft.manifest_hash.is_empty() {
        if let Ok(manifest) = serde_json::from_value::<AgentManifest>(value) {
            let fingerprint = agent_fingerprint(&manifest)?;
            tracing::debug!(
                target: "submit",
                agent_id = %manifest.agent_id,
                prompt_hash = %fingerprint.prompt_hash,
                manifest_hash = %fingerprint.manifest_hash,
                "hashes computed from manifest"
            );
            draft.prompt_hash = fingerprint.prompt_hash.to_hex();
            draft.manifest_hash = fingerprint.manifest_hash.to_hex();
        }
    }
    Ok(draft)
}

/// Reads and parses a manifest file. See [`parse_draft`].
pub fn load_draft_file(path: &Path) -> anyhow::Result<AttestationDraft> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_draft(&text).with_context(|| format!("parsing {}", path.display()))
}

/// A validated payload and its ABI encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionBundle {
    pub payload: AttestationPayload,
    pub encoded: Vec<u8>,
}

impl SubmissionBundle {
    /// The encoding as `0x`-prefixed hex.
    pub fn calldata_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.encoded))
    }

    pub fn render(&self) -> String {
        let p = &self.payload;
        let mut report = TextReport::new();
        report
            .section("Attestation Payload")
            .field("agentId", &p.agent_id)
            .field("name", &p.name)
            .field("presetId", display_or_none(&p.preset_id))
            .field("tier", &p.tier)
            .field("promptHash", p.prompt_hash)
            .field("manifestHash", p.manifest_hash)
            .field("parentId", display_or_none(&p.parent_id))
            .field("ownerId", display_or_none(&p.owner_id))
            .field(
                "createdAt",
                format!("{} ({})", p.created_at, format_unix_utc(p.created_at)),
            )
            .field("encoded size", format!("{} bytes", self.encoded.len()))
            .blank()
            .section("ABI-Encoded Data")
            .line(&format!("  {}", self.calldata_hex()))
            .blank()
            .line("  Pass this data to the registry's attest() call; no transaction is signed here.");
        report.finish()
    }
}

/// Merges flag values over file values, validates, and encodes.
pub fn prepare_submission(
    flags: AttestationDraft,
    file: Option<AttestationDraft>,
) -> Result<SubmissionBundle, EncodeError> {
    let draft = match file {
        Some(file) => flags.merge_missing(file),
        None => flags,
    };
    let payload = draft.into_payload()?;
    let encoded = codec::encode(&payload);
    tracing::info!(
        target: "submit",
        agent_id = %payload.agent_id,
        bytes = encoded.len(),
        "attestation payload encoded"
    );
    Ok(SubmissionBundle { payload, encoded })
}
