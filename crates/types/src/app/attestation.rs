// Path: crates/types/src/app/attestation.rs

//! Attestation payloads, their on-chain records and locally stored references.

use super::{Address, AgentFingerprint, AgentManifest, Bytes32};
use crate::error::EncodeError;
use serde::{Deserialize, Serialize};

/// The nine-field record that is ABI-encoded into an attestation's data.
///
/// Field order matches the schema
/// `(string,string,string,string,bytes32,bytes32,string,string,uint64)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttestationPayload {
    /// Stable identifier of the agent.
    pub agent_id: String,
    /// Human readable display name.
    pub name: String,
    /// Preset id, empty when absent.
    pub preset_id: String,
    /// Service tier label.
    pub tier: String,
    /// Hash of the canonical system prompt object.
    pub prompt_hash: Bytes32,
    /// Hash of the canonical manifest.
    pub manifest_hash: Bytes32,
    /// Parent agent id, empty when absent.
    pub parent_id: String,
    /// Owner id, empty when absent.
    pub owner_id: String,
    /// Creation time in unix seconds.
    pub created_at: u64,
}

impl AttestationPayload {
    /// Builds the payload for a manifest whose hashes have already been computed.
    pub fn from_manifest(
        manifest: &AgentManifest,
        fingerprint: &AgentFingerprint,
        created_at: u64,
    ) -> Self {
        Self {
            agent_id: manifest.agent_id.clone(),
            name: manifest.name.clone(),
            preset_id: manifest.preset_id.clone().unwrap_or_default(),
            tier: manifest.tier.clone(),
            prompt_hash: fingerprint.prompt_hash,
            manifest_hash: fingerprint.manifest_hash,
            parent_id: manifest.parent_id.clone().unwrap_or_default(),
            owner_id: manifest.owner_id.clone().unwrap_or_default(),
            created_at,
        }
    }
}

/// Loosely typed submission input, as collected from flags or a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttestationDraft {
    /// Stable identifier of the agent.
    pub agent_id: String,
    /// Human readable display name.
    pub name: String,
    /// Preset id.
    pub preset_id: String,
    /// Service tier label.
    pub tier: String,
    /// Prompt hash as hex text.
    pub prompt_hash: String,
    /// Manifest hash as hex text.
    pub manifest_hash: String,
    /// Parent agent id.
    pub parent_id: String,
    /// Owner id.
    pub owner_id: String,
    /// Creation time in unix seconds; zero means unset.
    pub created_at: u64,
}

fn fill(slot: &mut String, fallback: String) {
    if slot.is_empty() {
        *slot = fallback;
    }
}

impl AttestationDraft {
    /// Fills every empty field of `self` from `fallback`. Values already set win.
    pub fn merge_missing(mut self, fallback: AttestationDraft) -> Self {
        fill(&mut self.agent_id, fallback.agent_id);
        fill(&mut self.name, fallback.name);
        fill(&mut self.preset_id, fallback.preset_id);
        fill(&mut self.tier, fallback.tier);
        fill(&mut self.prompt_hash, fallback.prompt_hash);
        fill(&mut self.manifest_hash, fallback.manifest_hash);
        fill(&mut self.parent_id, fallback.parent_id);
        fill(&mut self.owner_id, fallback.owner_id);
        if self.created_at == 0 {
            self.created_at = fallback.created_at;
        }
        self
    }

    /// Validates required fields and hash formats, producing a typed payload.
    pub fn into_payload(self) -> Result<AttestationPayload, EncodeError> {
        for (field, value) in [
            ("agentId", &self.agent_id),
            ("name", &self.name),
            ("promptHash", &self.prompt_hash),
            ("manifestHash", &self.manifest_hash),
        ] {
            if value.is_empty() {
                return Err(EncodeError::MissingField(field));
            }
        }
        let prompt_hash =
            Bytes32::from_hex(&self.prompt_hash).map_err(|source| EncodeError::MalformedHash {
                field: "promptHash",
                source,
            })?;
        let manifest_hash = Bytes32::from_hex(&self.manifest_hash).map_err(|source| {
            EncodeError::MalformedHash {
                field: "manifestHash",
                source,
            }
        })?;
        Ok(AttestationPayload {
            agent_id: self.agent_id,
            name: self.name,
            preset_id: self.preset_id,
            tier: self.tier,
            prompt_hash,
            manifest_hash,
            parent_id: self.parent_id,
            owner_id: self.owner_id,
            created_at: self.created_at,
        })
    }
}

/// An attestation record as returned by the registry's `getAttestation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnChainAttestation {
    /// The attestation uid.
    pub uid: Bytes32,
    /// The schema the attestation was made under.
    pub schema: Bytes32,
    /// Attestation time in unix seconds.
    pub time: u64,
    /// Expiration time in unix seconds; zero means permanent.
    pub expiration_time: u64,
    /// Revocation time in unix seconds; zero means not revoked.
    pub revocation_time: u64,
    /// Uid of a referenced attestation, zero when none.
    pub ref_uid: Bytes32,
    /// The attestation's recipient.
    pub recipient: Address,
    /// The account that made the attestation.
    pub attester: Address,
    /// Whether the attester may revoke it.
    pub revocable: bool,
    /// The ABI-encoded payload.
    #[serde(with = "hex_bytes")]
    pub data: Vec<u8>,
}

impl OnChainAttestation {
    /// Returns true if the attestation has been revoked.
    pub fn is_revoked(&self) -> bool {
        self.revocation_time != 0
    }
}

/// The fields of a transaction receipt this toolkit reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxReceipt {
    /// Execution status; 1 is success.
    pub status: u64,
    /// The block the transaction was included in.
    pub block_number: u64,
    /// Gas consumed by the transaction.
    pub gas_used: u64,
}

impl TxReceipt {
    /// Returns true if the transaction executed successfully.
    pub fn succeeded(&self) -> bool {
        self.status == 1
    }
}

/// A locally stored reference to an attestation, as kept by the application datastore.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredAttestation {
    /// The agent's id.
    #[serde(alias = "id", alias = "agent_id")]
    pub agent_id: String,
    /// Display name.
    pub name: String,
    /// The attestation uid as stored; may be empty or malformed.
    #[serde(alias = "attestation_uid")]
    pub attestation_uid: String,
    /// The prompt hash as stored.
    #[serde(alias = "prompt_hash")]
    pub prompt_hash: String,
    /// The manifest hash as stored.
    #[serde(alias = "manifest_hash")]
    pub manifest_hash: String,
    /// The hash of the transaction that created the attestation, if recorded.
    #[serde(alias = "attestation_tx_hash")]
    pub attestation_tx_hash: Option<String>,
}

mod hex_bytes {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", hex::encode(bytes)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(s.trim_start_matches("0x")).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "0x82d87bd74898f678397803acffe9f572ce39b28273d8e41dc8aa9d00eb7a4767";

    fn draft() -> AttestationDraft {
        AttestationDraft {
            agent_id: "agent-1".into(),
            name: "Test Agent".into(),
            prompt_hash: HASH.into(),
            manifest_hash: HASH.into(),
            ..Default::default()
        }
    }

    #[test]
    fn required_fields_are_enforced_in_order() {
        let mut d = draft();
        d.name.clear();
        assert_eq!(d.into_payload(), Err(EncodeError::MissingField("name")));

        let mut d = draft();
        d.agent_id.clear();
        d.manifest_hash.clear();
        assert_eq!(d.into_payload(), Err(EncodeError::MissingField("agentId")));
    }

    #[test]
    fn malformed_hash_names_the_field() {
        let mut d = draft();
        d.manifest_hash = "0xabc".into();
        match d.into_payload() {
            Err(EncodeError::MalformedHash { field, .. }) => assert_eq!(field, "manifestHash"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn flags_win_over_file_values() {
        let flags = AttestationDraft {
            name: "From Flags".into(),
            ..Default::default()
        };
        let file = AttestationDraft {
            created_at: 1_738_972_800,
            ..draft()
        };
        let merged = flags.merge_missing(file);
        assert_eq!(merged.name, "From Flags");
        assert_eq!(merged.agent_id, "agent-1");
        assert_eq!(merged.created_at, 1_738_972_800);
        assert!(merged.into_payload().is_ok());
    }

    #[test]
    fn stored_attestation_accepts_column_names() {
        let row: StoredAttestation = serde_json::from_str(
            r#"{"id":"agent-9","attestation_uid":"0x01","prompt_hash":"p","manifest_hash":"m"}"#,
        )
        .unwrap();
        assert_eq!(row.agent_id, "agent-9");
        assert_eq!(row.attestation_uid, "0x01");
        assert_eq!(row.name, "");
    }

    #[test]
    fn payload_from_manifest_blanks_absent_ids() {
        let manifest = AgentManifest {
            agent_id: "agent-1".into(),
            name: "Test Agent".into(),
            system_prompt: "Be helpful.".into(),
            preset_id: None,
            tier: "free".into(),
            model: None,
            response_length: "standard".into(),
            response_format: "plain".into(),
            created_at: "2026-02-08T00:00:00.000Z".into(),
            parent_id: Some("agent-0".into()),
            owner_id: None,
        };
        let hash = Bytes32::from_hex(HASH).unwrap();
        let fp = AgentFingerprint {
            prompt_hash: hash,
            manifest_hash: hash,
        };
        let payload = AttestationPayload::from_manifest(&manifest, &fp, 42);
        assert_eq!(payload.preset_id, "");
        assert_eq!(payload.parent_id, "agent-0");
        assert_eq!(payload.created_at, 42);
    }
}
