// Path: crates/services/src/audit.rs
//! Checks stored attestation references against the chain.
//!
//! Each record is looked up independently; one failure never stops the run.
//! Lookups go through an order-preserving bounded stream, and the tally is
//! folded once every entry is in.

use crate::report::truncate;
use crate::source::RecordSource;
use agentid_client::ChainReader;
use agentid_telemetry::{audit_metrics, error_metrics};
use agentid_types::app::{AttestationPayload, Bytes32, OnChainAttestation, StoredAttestation};
use agentid_types::codec;
use agentid_types::config::ChainConfig;
use agentid_types::error::{ErrorCode, VerificationError};
use anyhow::Context;
use futures::stream::{self, StreamExt};
use std::fmt::Write;

const TABLE_WIDTH: usize = 72;

/// The verdict for one stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditStatus {
    /// The stored uid is not a bytes32 value.
    Invalid,
    /// The chain lookup failed.
    Failed,
    NotFound,
    /// The attestation has no data.
    Missing,
    Undecodable,
    PromptMismatch,
    ManifestMismatch,
    Ok,
}

impl AuditStatus {
    /// The label shown in the report table.
    pub fn label(self) -> &'static str {
        match self {
            Self::Invalid => "INVALID",
            Self::Failed => "FAIL",
            Self::NotFound => "NOT FOUND",
            Self::Missing => "MISSING",
            Self::Undecodable => "DECODE",
            Self::PromptMismatch | Self::ManifestMismatch => "MISMATCH",
            Self::Ok => "OK",
        }
    }

    /// The label used for metrics.
    pub fn metric_label(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Failed => "failed",
            Self::NotFound => "not_found",
            Self::Missing => "missing",
            Self::Undecodable => "undecodable",
            Self::PromptMismatch => "prompt_mismatch",
            Self::ManifestMismatch => "manifest_mismatch",
            Self::Ok => "ok",
        }
    }

    pub fn passed(self) -> bool {
        self == Self::Ok
    }
}

impl From<&VerificationError> for AuditStatus {
    fn from(err: &VerificationError) -> Self {
        match err {
            VerificationError::NotFound { .. } => Self::NotFound,
            VerificationError::EmptyData => Self::Missing,
            VerificationError::Undecodable(_) => Self::Undecodable,
            // Audit does not check schemas; a mismatch can only come from elsewhere.
            VerificationError::SchemaMismatch { .. } => Self::Failed,
            VerificationError::PromptHashMismatch { .. } => Self::PromptMismatch,
            VerificationError::ManifestHashMismatch { .. } => Self::ManifestMismatch,
        }
    }
}

/// One audited record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub record: StoredAttestation,
    pub status: AuditStatus,
    /// Empty for passing records.
    pub detail: String,
    /// Stable code of the underlying error, if any.
    pub code: Option<&'static str>,
}

impl AuditEntry {
    fn ok(record: StoredAttestation) -> Self {
        Self {
            record,
            status: AuditStatus::Ok,
            detail: String::new(),
            code: None,
        }
    }

    fn failed(
        record: StoredAttestation,
        status: AuditStatus,
        err: &(impl ErrorCode + std::fmt::Display),
    ) -> Self {
        Self {
            record,
            status,
            detail: err.to_string(),
            code: Some(err.code()),
        }
    }
}

fn hash_matches(stored: &str, on_chain: &Bytes32) -> bool {
    stored.eq_ignore_ascii_case(&on_chain.to_hex())
}

/// Checks a looked-up attestation against the stored record's hashes.
pub fn check_record(
    record: &StoredAttestation,
    uid: Bytes32,
    attestation: Option<OnChainAttestation>,
) -> Result<AttestationPayload, VerificationError> {
    let attestation = attestation.ok_or(VerificationError::NotFound { uid })?;
    if attestation.data.is_empty() {
        return Err(VerificationError::EmptyData);
    }
    let payload = codec::decode(&attestation.data)?;
    if !hash_matches(&record.prompt_hash, &payload.prompt_hash) {
        return Err(VerificationError::PromptHashMismatch {
            stored: record.prompt_hash.clone(),
            on_chain: payload.prompt_hash,
        });
    }
    if !hash_matches(&record.manifest_hash, &payload.manifest_hash) {
        return Err(VerificationError::ManifestHashMismatch {
            stored: record.manifest_hash.clone(),
            on_chain: payload.manifest_hash,
        });
    }
    Ok(payload)
}

/// Audits a single record.
pub async fn audit_record<R>(reader: &R, record: StoredAttestation) -> AuditEntry
where
    R: ChainReader + ?Sized,
{
    let uid = match Bytes32::from_hex(&record.attestation_uid) {
        Ok(uid) => uid,
        Err(err) => return AuditEntry::failed(record, AuditStatus::Invalid, &err),
    };
    let attestation = match reader.get_attestation(&uid).await {
        Ok(attestation) => attestation,
        Err(err) => return AuditEntry::failed(record, AuditStatus::Failed, &err),
    };
    match check_record(&record, uid, attestation) {
        Ok(_) => AuditEntry::ok(record),
        Err(err) => {
            let status = AuditStatus::from(&err);
            AuditEntry::failed(record, status, &err)
        }
    }
}

/// The outcome of an audit run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    /// One entry per input record, in input order.
    pub entries: Vec<AuditEntry>,
    pub passed: usize,
    pub failed: usize,
}

impl AuditReport {
    /// Tallies `entries`.
    pub fn from_entries(entries: Vec<AuditEntry>) -> Self {
        let passed = entries.iter().filter(|e| e.status.passed()).count();
        let failed = entries.len() - passed;
        Self {
            entries,
            passed,
            failed,
        }
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn render(&self, config: &ChainConfig) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\n  Attestation Audit\n");
        let _ = writeln!(out, "  {:<22} {}", "rpc:", config.rpc_url);
        let _ = writeln!(out, "  {:<22} {}", "registry:", config.registry_address);
        if self.entries.is_empty() {
            let _ = writeln!(out, "\n  No attested agents found.");
            return out;
        }
        let _ = writeln!(out, "  {:<22} {}\n", "attested agents:", self.total());
        let _ = writeln!(out, "  {:<16} {:<24} {:<12} Detail", "Agent", "Name", "Status");
        let _ = writeln!(out, "  {}", "─".repeat(TABLE_WIDTH));
        for entry in &self.entries {
            let row = format!(
                "  {:<16} {:<24} {:<12} {}",
                truncate(&entry.record.agent_id, 14),
                truncate(&entry.record.name, 22),
                entry.status.label(),
                entry.detail
            );
            let _ = writeln!(out, "{}", row.trim_end());
        }
        let _ = writeln!(out, "\n  {}\n", "─".repeat(TABLE_WIDTH));
        let _ = writeln!(
            out,
            "  Summary: {} passed, {} failed, {} total",
            self.passed,
            self.failed,
            self.total()
        );
        out
    }
}

fn record_metrics(entry: &AuditEntry) {
    audit_metrics().inc_audit_outcome(entry.status.metric_label());
    if let Some(code) = entry.code {
        error_metrics().inc_error("audit", code);
        tracing::warn!(
            target: "audit",
            agent_id = %entry.record.agent_id,
            uid = %entry.record.attestation_uid,
            status = entry.status.label(),
            code,
            detail = %entry.detail,
            "record failed audit"
        );
    } else {
        tracing::debug!(target: "audit", agent_id = %entry.record.agent_id, "record ok");
    }
}

/// Audits `records` with at most `concurrency` lookups in flight.
pub async fn run_audit<R>(
    reader: &R,
    records: Vec<StoredAttestation>,
    concurrency: usize,
) -> AuditReport
where
    R: ChainReader + ?Sized,
{
    let entries: Vec<AuditEntry> = stream::iter(records)
        .map(|record| audit_record(reader, record))
        .buffered(concurrency.max(1))
        .collect()
        .await;
    entries.iter().for_each(record_metrics);
    let report = AuditReport::from_entries(entries);
    tracing::info!(
        target: "audit",
        passed = report.passed,
        failed = report.failed,
        total = report.total(),
        "audit finished"
    );
    report
}

/// Loads records from `source` and audits them. Only a source failure is an error.
pub async fn audit_source<R>(
    reader: &R,
    source: &dyn RecordSource,
    concurrency: usize,
) -> anyhow::Result<AuditReport>
where
    R: ChainReader + ?Sized,
{
    let records = source
        .load()
        .await
        .with_context(|| format!("loading records from {}", source.describe()))?;
    Ok(run_audit(reader, records, concurrency).await)
}
