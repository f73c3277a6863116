// Path: crates/services/src/proof.rs
//! A self-contained, plain-text verification proof for one attestation.
//!
//! The report is a pure function of the configuration, the uid, the query
//! time and the lookup result, so identical inputs give identical text.

use crate::report::{
    display_or_none, format_expiration, format_revocation, format_rfc3339_utc, format_unix_utc,
    TextReport,
};
use crate::verify::{decode_identity, Identity};
use agentid_client::ChainReader;
use agentid_types::app::{Bytes32, OnChainAttestation};
use agentid_types::codec::FIELD_COUNT;
use agentid_types::config::{ChainConfig, AGENT_IDENTITY_SCHEMA};
use agentid_types::error::ChainError;
use time::OffsetDateTime;

const TITLE: &str = "  Agent Identity: On-Chain Attestation Verification Proof";

/// How a proof run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProofOutcome {
    /// Found, decoded and attested under the expected schema.
    Verified,
    /// Not found, empty, undecodable, wrong schema, or the lookup failed.
    Failed,
    /// The uid argument was not a bytes32 value.
    Usage,
}

impl ProofOutcome {
    /// Process exit status for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Verified => 0,
            Self::Failed => 1,
            Self::Usage => 2,
        }
    }
}

/// The rendered proof and its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofReport {
    pub text: String,
    pub outcome: ProofOutcome,
    /// Why the proof failed, if it did.
    pub failure: Option<String>,
}

/// The report for a uid that is not a bytes32 value.
pub fn usage_report(uid: &str) -> ProofReport {
    let mut report = TextReport::new();
    report
        .line(&format!("error: invalid attestation UID: {uid}"))
        .line("  Expected: 0x-prefixed, 32-byte hex string (66 characters total)");
    ProofReport {
        text: report.finish(),
        outcome: ProofOutcome::Usage,
        failure: Some(format!("invalid attestation UID: {uid}")),
    }
}

fn fail(mut report: TextReport, reason: String) -> ProofReport {
    report.banner();
    ProofReport {
        text: report.finish(),
        outcome: ProofOutcome::Failed,
        failure: Some(reason),
    }
}

/// Renders the proof for a completed lookup of `uid`.
pub fn build_report(
    config: &ChainConfig,
    uid: &Bytes32,
    queried_at: OffsetDateTime,
    lookup: Result<Option<OnChainAttestation>, ChainError>,
) -> ProofReport {
    let mut report = TextReport::new();
    report
        .banner()
        .line(TITLE)
        .banner()
        .blank()
        .section("Chain Parameters")
        .field(
            "Network",
            format!("{} (Chain ID {})", config.network_name, config.chain_id),
        )
        .field("RPC Endpoint", &config.rpc_url)
        .field("Registry", config.registry_address)
        .field("Schema Registry", config.schema_registry_address)
        .field("Schema UID", config.schema_uid)
        .blank()
        .section("Query")
        .field("Attestation UID", uid)
        .field("Method", "eth_call → getAttestation(bytes32)")
        .field("Timestamp", format_rfc3339_utc(queried_at))
        .blank();

    let record = match lookup {
        Err(err) => {
            report
                .section("Result")
                .field("Status", "FAILED")
                .field("Error", &err)
                .blank();
            return fail(report, err.to_string());
        }
        Ok(None) => {
            report
                .section("Result")
                .field("Status", "NOT FOUND")
                .field(
                    "Detail",
                    format!("No attestation exists with this UID on {}", config.network_name),
                )
                .field("Queried UID", uid)
                .blank();
            return fail(report, format!("attestation {uid} not found"));
        }
        Ok(Some(record)) => record,
    };

    report
        .section("On-Chain Attestation Record")
        .field("UID", record.uid)
        .field("Schema", record.schema)
        .field("Attester", record.attester)
        .field("Recipient", record.recipient)
        .field(
            "Time",
            format!("{} ({})", record.time, format_unix_utc(record.time)),
        )
        .field("Expiration", format_expiration(record.expiration_time))
        .field("Revocation", format_revocation(record.revocation_time))
        .field("Revocable", record.revocable)
        .field("Data Size", format!("{} bytes", record.data.len()))
        .blank();

    let schema_match = record.schema == config.schema_uid;
    report
        .section("Schema Verification")
        .field("Expected", config.schema_uid)
        .field("On-Chain", record.schema)
        .field("Match", if schema_match { "YES" } else { "NO, schema mismatch" })
        .blank();

    let payload = match decode_identity(&record.data) {
        Identity::Empty => {
            report
                .section("Decoded Agent Identity")
                .field("Status", "NO DATA, attestation contains no payload")
                .blank();
            return fail(report, "attestation has no payload data".into());
        }
        Identity::Undecodable { error, raw } => {
            report
                .section("Decoded Agent Identity")
                .field("Status", "DECODE FAILED")
                .field("Error", &error)
                .field("Raw Data", format!("0x{}", hex::encode(raw)))
                .blank();
            return fail(report, error.to_string());
        }
        Identity::Decoded(payload) => payload,
    };

    report
        .section("Decoded Agent Identity")
        .field("Agent ID", &payload.agent_id)
        .field("Name", &payload.name)
        .field("Preset ID", display_or_none(&payload.preset_id))
        .field("Tier", &payload.tier)
        .field("Prompt Hash", payload.prompt_hash)
        .field("Manifest Hash", payload.manifest_hash)
        .field("Parent ID", display_or_none(&payload.parent_id))
        .field("Owner ID", display_or_none(&payload.owner_id))
        .field(
            "Created At",
            format!("{} ({})", payload.created_at, format_unix_utc(payload.created_at)),
        )
        .blank()
        .section("Verification Summary")
        .field("Attestation", format!("FOUND on {}", config.network_name))
        .field(
            "ABI Decode",
            format!("SUCCESS (all {FIELD_COUNT} schema fields decoded)"),
        )
        .field(
            "Schema",
            if schema_match {
                "MATCHES expected agent identity schema"
            } else {
                "MISMATCH, unexpected schema UID"
            },
        )
        .field(
            "Agent Identity",
            format!("{} ({})", payload.name, payload.agent_id),
        )
        .blank()
        .section("Independent Verification")
        .field("Explorer", config.attestation_url(uid))
        .field("Schema", config.schema_url())
        .field("Block Explorer", config.registry_url())
        .blank()
        .section("ABI Schema")
        .line(&format!("  {AGENT_IDENTITY_SCHEMA}"))
        .blank();

    if !schema_match {
        return fail(
            report,
            format!(
                "schema mismatch: expected {}, found {}",
                config.schema_uid, record.schema
            ),
        );
    }
    report.banner();
    ProofReport {
        text: report.finish(),
        outcome: ProofOutcome::Verified,
        failure: None,
    }
}

/// Validates `uid`, looks it up and renders the proof.
pub async fn prove<R>(reader: &R, uid: &str, queried_at: OffsetDateTime) -> ProofReport
where
    R: ChainReader + ?Sized,
{
    let uid = match Bytes32::from_hex(uid) {
        Ok(uid) => uid,
        Err(_) => return usage_report(uid),
    };
    let lookup = reader.get_attestation(&uid).await;
    let report = build_report(reader.config(), &uid, queried_at, lookup);
    tracing::info!(
        target: "proof",
        uid = %uid,
        outcome = ?report.outcome,
        "proof rendered"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentid_test_utils::fixtures::{
        agent_three_payload, attested_record, known_uid, record_for, CREATED_AT_UNIX,
        KNOWN_ATTESTATION_UID,
    };

    fn at() -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(CREATED_AT_UNIX as i64 + 3600).unwrap()
    }

    fn build(lookup: Result<Option<OnChainAttestation>, ChainError>) -> ProofReport {
        build_report(&ChainConfig::default(), &known_uid(), at(), lookup)
    }

    #[test]
    fn verified_proof() {
        let record = record_for(known_uid(), &agent_three_payload());
        let report = build(Ok(Some(record.clone())));
        assert_eq!(report.outcome, ProofOutcome::Verified);
        assert_eq!(report.outcome.exit_code(), 0);
        assert!(report.failure.is_none());

        let text = &report.text;
        assert!(text.contains("  Network:          Base L2 Mainnet (Chain ID 8453)\n"));
        assert!(text.contains(&format!("  Attestation UID:  {KNOWN_ATTESTATION_UID}\n")));
        assert!(text.contains("  Timestamp:        2026-02-08T01:00:00Z\n"));
        assert!(text.contains("  Match:            YES\n"));
        assert!(text.contains("  Agent ID:         agent-3\n"));
        assert!(text.contains("  Preset ID:        (none)\n"));
        assert!(text.contains("  Created At:       1770508800 (2026-02-08 00:00:00 UTC)\n"));
        assert!(text.contains("  Expiration:       none (permanent)\n"));
        assert!(text.contains("SUCCESS (all 9 schema fields decoded)"));
        assert!(text.contains(&format!(
            "https://base.easscan.org/attestation/view/{KNOWN_ATTESTATION_UID}"
        )));
        assert!(text.contains("https://basescan.org/address/0x4200000000000000000000000000000000000021"));
        assert!(text.contains(AGENT_IDENTITY_SCHEMA));
        assert!(text.ends_with(&format!("{}\n", "=".repeat(61))));

        // Deterministic for identical inputs.
        assert_eq!(build(Ok(Some(record))).text, report.text);
    }

    #[test]
    fn failures_exit_one() {
        let report = build(Err(ChainError::Transport("connection refused".into())));
        assert_eq!(report.outcome, ProofOutcome::Failed);
        assert!(report.text.contains("  Status:           FAILED\n"));
        assert!(report.text.contains("connection refused"));
        assert!(!report.text.contains("On-Chain Attestation Record"));

        let report = build(Ok(None));
        assert_eq!(report.outcome.exit_code(), 1);
        assert!(report.text.contains("NOT FOUND"));

        let report = build(Ok(Some(attested_record(known_uid(), Vec::new()))));
        assert_eq!(report.outcome, ProofOutcome::Failed);
        assert!(report.text.contains("NO DATA"));
        assert!(report.text.contains("Schema Verification"));

        let report = build(Ok(Some(attested_record(known_uid(), vec![0xab; 8]))));
        assert_eq!(report.outcome, ProofOutcome::Failed);
        assert!(report.text.contains("DECODE FAILED"));
        assert!(report.text.contains("0xabababababababab"));
    }

    #[test]
    fn schema_mismatch_still_reports_identity() {
        let mut record = record_for(known_uid(), &agent_three_payload());
        record.schema = Bytes32([0x11; 32]);
        let report = build(Ok(Some(record)));
        assert_eq!(report.outcome, ProofOutcome::Failed);
        assert!(report.text.contains("  Match:            NO, schema mismatch\n"));
        assert!(report.text.contains("Agent Identity:   Hashy (agent-3)"));
        assert!(report.failure.unwrap().starts_with("schema mismatch"));
    }

    #[test]
    fn invalid_uid_is_usage() {
        let report = usage_report("0x1234");
        assert_eq!(report.outcome.exit_code(), 2);
        assert!(report.text.starts_with("error: invalid attestation UID: 0x1234\n"));
    }
}
