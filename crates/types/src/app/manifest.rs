// Path: crates/types/src/app/manifest.rs

//! The agent manifest and the definition it is built from.
//!
//! A manifest is the exact object whose canonical JSON form is hashed into an
//! agent's manifest hash. Optional fields are `Option<String>` so that an absent
//! value serializes as JSON `null`, which is part of the hashed form.

use super::Bytes32;
use serde::{Deserialize, Serialize};

/// Response length used when a definition leaves it unset.
pub const DEFAULT_RESPONSE_LENGTH: &str = "standard";
/// Response format used when a definition leaves it unset.
pub const DEFAULT_RESPONSE_FORMAT: &str = "plain";

fn default_response_length() -> String {
    DEFAULT_RESPONSE_LENGTH.to_string()
}

fn default_response_format() -> String {
    DEFAULT_RESPONSE_FORMAT.to_string()
}

/// The complete description of an agent whose canonical form is hashed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentManifest {
    /// Stable identifier of the agent.
    pub agent_id: String,
    /// Human readable display name.
    pub name: String,
    /// The agent's full system prompt.
    pub system_prompt: String,
    /// The preset the agent was created from, if any.
    #[serde(default)]
    pub preset_id: Option<String>,
    /// Service tier label.
    pub tier: String,
    /// Model identifier, if pinned.
    #[serde(default)]
    pub model: Option<String>,
    /// Response length hint.
    #[serde(default = "default_response_length")]
    pub response_length: String,
    /// Response format hint.
    #[serde(default = "default_response_format")]
    pub response_format: String,
    /// ISO-8601 creation time, kept as text exactly as it is hashed.
    pub created_at: String,
    /// The agent this one was derived from, if any.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// The owning account, if any.
    #[serde(default)]
    pub owner_id: Option<String>,
}

/// The user-facing configuration from which a manifest is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentDefinition {
    /// Human readable display name.
    pub name: String,
    /// Service tier label.
    pub tier: String,
    /// Model identifier; empty means unpinned.
    pub model: Option<String>,
    /// Response length hint; defaults to `standard`.
    pub response_length: Option<String>,
    /// Response format hint; defaults to `plain`.
    pub response_format: Option<String>,
    /// Preset the agent was created from.
    pub preset_id: Option<String>,
    /// The agent this one was derived from.
    pub parent_id: Option<String>,
    /// The owning account.
    pub owner_id: Option<String>,
}

/// The pair of hashes that identify an agent's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentFingerprint {
    /// Hash of the canonical `{"systemPrompt": ...}` object.
    pub prompt_hash: Bytes32,
    /// Hash of the canonical manifest.
    pub manifest_hash: Bytes32,
}
