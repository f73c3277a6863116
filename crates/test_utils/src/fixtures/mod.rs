//! Golden vectors and sample records shared across the workspace's tests.
//!
//! The hashes below were produced by independent RFC 8785 + SHA-256
//! implementations. A failing comparison against them means on-chain
//! attestations would no longer verify.

use agentid_types::app::{
    Address, AgentManifest, AttestationPayload, Bytes32, OnChainAttestation, StoredAttestation,
};
use agentid_types::codec;
use agentid_types::config::AGENT_IDENTITY_SCHEMA_UID;

/// `(system prompt, prompt hash)` pairs.
pub const PROMPT_VECTORS: &[(&str, &str)] = &[
    (
        "Be helpful.",
        "0x82d87bd74898f678397803acffe9f572ce39b28273d8e41dc8aa9d00eb7a4767",
    ),
    (
        "Deterministic output.",
        "0xf2d7077205ae5669ec1d82dcaacd45b2480d272bbb3443049899b31fdba6fd80",
    ),
    (
        "Focus on evidence.",
        "0x1f01f4a50bb7e636fcdd5229bdef46bce9d56b8440979f5bedf3fd586f719d1b",
    ),
];

/// Creation time shared by the sample agents, as hashed.
pub const CREATED_AT_ISO: &str = "2026-02-08T00:00:00.000Z";
/// [`CREATED_AT_ISO`] in unix seconds.
pub const CREATED_AT_UNIX: u64 = 1_770_508_800;

/// The agent-1 manifest as authored, keys in declaration order.
pub const AGENT_ONE_JSON: &str = r#"{"agentId":"agent-1","name":"Test Agent","systemPrompt":"Be helpful.","presetId":null,"tier":"free","model":null,"responseLength":"standard","responseFormat":"plain","createdAt":"2026-02-08T00:00:00.000Z","parentId":null,"ownerId":null}"#;
/// The canonical form of [`AGENT_ONE_JSON`].
pub const AGENT_ONE_CANONICAL: &str = r#"{"agentId":"agent-1","createdAt":"2026-02-08T00:00:00.000Z","model":null,"name":"Test Agent","ownerId":null,"parentId":null,"presetId":null,"responseFormat":"plain","responseLength":"standard","systemPrompt":"Be helpful.","tier":"free"}"#;
/// Manifest hash of agent-1.
pub const AGENT_ONE_MANIFEST_HASH: &str =
    "0x3a646626e32aa6ac52d431ad52131f915dd7087f06d7da5909e79d5e55443849";
/// Prompt hash of agent-3, the hash of "Deterministic output.".
pub const AGENT_THREE_PROMPT_HASH: &str =
    "0xf2d7077205ae5669ec1d82dcaacd45b2480d272bbb3443049899b31fdba6fd80";
/// Manifest hash of agent-3.
pub const AGENT_THREE_MANIFEST_HASH: &str =
    "0xaefa987e8e894a687d9ee3f836442241ed11f37cb2547ec16145d7aefc102e6d";

/// A uid attested on Base mainnet.
pub const KNOWN_ATTESTATION_UID: &str =
    "0x13da22148f63504eac18935143f20349a619b7ebeaf416f0fa5362db923f0724";
/// The account that made [`KNOWN_ATTESTATION_UID`].
pub const KNOWN_ATTESTER: &str = "0xf951daD46F0A7d7402556DCaa70Ee4F8bC979824";

fn manifest(
    agent_id: &str,
    name: &str,
    prompt: &str,
    tier: &str,
    length: &str,
    format: &str,
) -> AgentManifest {
    AgentManifest {
        agent_id: agent_id.into(),
        name: name.into(),
        system_prompt: prompt.into(),
        preset_id: None,
        tier: tier.into(),
        model: None,
        response_length: length.into(),
        response_format: format.into(),
        created_at: CREATED_AT_ISO.into(),
        parent_id: None,
        owner_id: None,
    }
}

/// agent-1: free tier with default response hints.
pub fn agent_one_manifest() -> AgentManifest {
    manifest("agent-1", "Test Agent", "Be helpful.", "free", "standard", "plain")
}

/// agent-3 "Hashy": custom tier, short JSON responses.
pub fn agent_three_manifest() -> AgentManifest {
    manifest(
        "agent-3",
        "Hashy",
        "Deterministic output.",
        "custom",
        "short",
        "json",
    )
}

fn golden(hex: &str) -> Bytes32 {
    Bytes32::from_hex(hex).unwrap_or_default()
}

/// The payload attested for agent-3, built from its golden hashes.
pub fn agent_three_payload() -> AttestationPayload {
    AttestationPayload {
        agent_id: "agent-3".into(),
        name: "Hashy".into(),
        preset_id: String::new(),
        tier: "custom".into(),
        prompt_hash: golden(AGENT_THREE_PROMPT_HASH),
        manifest_hash: golden(AGENT_THREE_MANIFEST_HASH),
        parent_id: String::new(),
        owner_id: String::new(),
        created_at: CREATED_AT_UNIX,
    }
}

/// The known mainnet uid as a `Bytes32`.
pub fn known_uid() -> Bytes32 {
    golden(KNOWN_ATTESTATION_UID)
}

/// A registry record holding `data`, attested under the agent identity schema.
pub fn attested_record(uid: Bytes32, data: Vec<u8>) -> OnChainAttestation {
    OnChainAttestation {
        uid,
        schema: AGENT_IDENTITY_SCHEMA_UID,
        time: CREATED_AT_UNIX + 42,
        expiration_time: 0,
        revocation_time: 0,
        ref_uid: Bytes32::ZERO,
        recipient: Address::default(),
        attester: Address::from_hex(KNOWN_ATTESTER).unwrap_or_default(),
        revocable: true,
        data,
    }
}

/// A registry record whose data is the encoded `payload`.
pub fn record_for(uid: Bytes32, payload: &AttestationPayload) -> OnChainAttestation {
    attested_record(uid, codec::encode(payload))
}

/// A datastore row that references `uid` and agrees with `payload`.
pub fn stored_for(uid: &Bytes32, payload: &AttestationPayload) -> StoredAttestation {
    StoredAttestation {
        agent_id: payload.agent_id.clone(),
        name: payload.name.clone(),
        attestation_uid: uid.to_hex(),
        prompt_hash: payload.prompt_hash.to_hex(),
        manifest_hash: payload.manifest_hash.to_hex(),
        attestation_tx_hash: None,
    }
}
