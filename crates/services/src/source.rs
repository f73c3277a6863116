// Path: crates/services/src/source.rs
//! Where audit records come from.

use agentid_types::app::StoredAttestation;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// A provider of locally stored attestation references.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Loads every record that references an attestation.
    async fn load(&self) -> Result<Vec<StoredAttestation>>;

    /// A short description for logs and report headers.
    fn describe(&self) -> String;
}

/// Records exported to a file, as a JSON array or as JSON lines.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<StoredAttestation>> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("reading {}", self.path.display()))?;
        let records =
            parse_records(&text).with_context(|| format!("parsing {}", self.path.display()))?;
        tracing::debug!(
            target: "audit",
            path = %self.path.display(),
            records = records.len(),
            "loaded attestation records"
        );
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parses a JSON array or JSON-lines document, dropping records without a uid.
pub fn parse_records(text: &str) -> Result<Vec<StoredAttestation>> {
    let trimmed = text.trim_start();
    let records: Vec<StoredAttestation> = if trimmed.starts_with('[') {
        serde_json::from_str(trimmed).context("invalid JSON array")?
    } else {
        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                serde_json::from_str(line).with_context(|| format!("line {}", i + 1))
            })
            .collect::<Result<_>>()?
    };
    Ok(records
        .into_iter()
        .filter(|r| !r.attestation_uid.trim().is_empty())
        .collect())
}
