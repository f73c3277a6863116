// Path: crates/services/src/verify.rs
//! Looks up one attestation and decodes its identity payload.

use crate::report::{display_or_none, format_expiration, format_revocation, format_unix_utc, TextReport};
use agentid_client::ChainReader;
use agentid_types::app::{AttestationPayload, Bytes32, OnChainAttestation};
use agentid_types::codec;
use agentid_types::error::{ChainError, DecodeError, VerificationError};

/// What an attestation's data field holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    /// The record carries no data.
    Empty,
    Decoded(AttestationPayload),
    /// The data is not a valid identity encoding.
    Undecodable { error: DecodeError, raw: Vec<u8> },
}

/// Decodes attestation data into an [`Identity`].
pub fn decode_identity(data: &[u8]) -> Identity {
    if data.is_empty() {
        return Identity::Empty;
    }
    match codec::decode(data) {
        Ok(payload) => Identity::Decoded(payload),
        Err(error) => Identity::Undecodable {
            error,
            raw: data.to_vec(),
        },
    }
}

/// The result of looking up one uid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    NotFound {
        uid: Bytes32,
    },
    Found {
        record: OnChainAttestation,
        identity: Identity,
    },
}

impl VerifyOutcome {
    /// Classifies a lookup result.
    pub fn from_lookup(uid: Bytes32, record: Option<OnChainAttestation>) -> Self {
        match record {
            None => Self::NotFound { uid },
            Some(record) => {
                let identity = decode_identity(&record.data);
                Self::Found { record, identity }
            }
        }
    }

    /// The decoded payload, provided the record exists under `expected_schema`
    /// and its data decodes.
    pub fn check(&self, expected_schema: &Bytes32) -> Result<&AttestationPayload, VerificationError> {
        match self {
            Self::NotFound { uid } => Err(VerificationError::NotFound { uid: *uid }),
            Self::Found { record, .. } if record.schema != *expected_schema => {
                Err(VerificationError::SchemaMismatch {
                    expected: *expected_schema,
                    actual: record.schema,
                })
            }
            Self::Found { identity, .. } => match identity {
                Identity::Empty => Err(VerificationError::EmptyData),
                Identity::Undecodable { error, .. } => {
                    Err(VerificationError::Undecodable(error.clone()))
                }
                Identity::Decoded(payload) => Ok(payload),
            },
        }
    }

    /// One report line comparing the record's schema with `expected_schema`.
    /// Empty when nothing was found.
    pub fn render_schema_check(&self, expected_schema: &Bytes32) -> String {
        let status = match self.check(expected_schema) {
            Err(VerificationError::NotFound { .. }) => return String::new(),
            Err(err @ VerificationError::SchemaMismatch { .. }) => format!("FAILED ({err})"),
            _ => "ok (matches configured schema)".to_string(),
        };
        let mut report = TextReport::new();
        report.field("schema check", status);
        report.finish()
    }

    pub fn render(&self) -> String {
        let mut report = TextReport::new();
        let (record, identity) = match self {
            Self::NotFound { uid } => {
                report
                    .line("  Attestation not found")
                    .blank()
                    .field("uid", uid);
                return report.finish();
            }
            Self::Found { record, identity } => (record, identity),
        };

        report
            .line("  Attestation found on-chain")
            .blank()
            .field("uid", record.uid)
            .field("schema", record.schema)
            .field("attester", record.attester)
            .field("recipient", record.recipient)
            .field("time", format!("{} ({})", record.time, format_unix_utc(record.time)))
            .field("expiration", format_expiration(record.expiration_time))
            .field("revocation", format_revocation(record.revocation_time))
            .field("revocable", record.revocable)
            .blank();

        match identity {
            Identity::Empty => {
                report.line("  No attestation data");
            }
            Identity::Undecodable { error, raw } => {
                report
                    .line(&format!("  warning: could not decode attestation data: {error}"))
                    .blank()
                    .field("raw data", format!("0x{}", hex::encode(raw)));
            }
            Identity::Decoded(p) => {
                report
                    .section("Decoded Agent Identity")
                    .field("agentId", &p.agent_id)
                    .field("name", &p.name)
                    .field("presetId", display_or_none(&p.preset_id))
                    .field("tier", &p.tier)
                    .field("promptHash", p.prompt_hash)
                    .field("manifestHash", p.manifest_hash)
                    .field("parentId", display_or_none(&p.parent_id))
                    .field("ownerId", display_or_none(&p.owner_id))
                    .field("createdAt", p.created_at);
            }
        }
        report.finish()
    }
}

/// Looks up `uid` and decodes whatever it holds.
pub async fn verify<R>(reader: &R, uid: &Bytes32) -> Result<VerifyOutcome, ChainError>
where
    R: ChainReader + ?Sized,
{
    let record = reader.get_attestation(uid).await?;
    let outcome = VerifyOutcome::from_lookup(*uid, record);
    tracing::info!(
        target: "verify",
        uid = %uid,
        found = matches!(outcome, VerifyOutcome::Found { .. }),
        "attestation lookup finished"
    );
    Ok(outcome)
}
