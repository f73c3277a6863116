// Path: crates/services/src/status.rs
//! Connectivity and configuration check for the chain endpoint.

use agentid_client::ChainReader;
use agentid_types::app::{Address, Bytes32};
use std::fmt::Write;
use std::time::{Duration, Instant};

/// A snapshot of what the node reports against what the configuration expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub rpc_url: String,
    pub registry_address: Address,
    pub schema_registry_address: Address,
    pub expected_chain_id: u64,
    pub schema_uid: Bytes32,
    /// The reported chain id and the round-trip time, or the failure text.
    pub chain_id: Result<(u64, Duration), String>,
    /// Not queried when the chain id lookup failed.
    pub block_number: Option<Result<u64, String>>,
}

impl StatusReport {
    /// True when the node answered at all.
    pub fn reachable(&self) -> bool {
        self.chain_id.is_ok()
    }

    /// True when the node reports the expected chain.
    pub fn chain_matches(&self) -> bool {
        matches!(self.chain_id, Ok((id, _)) if id == self.expected_chain_id)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut row = |label: &str, value: String| {
            let _ = writeln!(out, "  {label:<22} {value}");
        };
        row("rpc:", self.rpc_url.clone());
        row("registry:", self.registry_address.to_string());
        row("schema registry:", self.schema_registry_address.to_string());
        row("expected chain:", self.expected_chain_id.to_string());
        row("schema uid:", self.schema_uid.to_string());
        match &self.chain_id {
            Err(err) => row("chain id:", format!("unreachable ({err})")),
            Ok((id, latency)) if *id == self.expected_chain_id => {
                row("chain id:", format!("OK ({id}, {}ms)", latency.as_millis()))
            }
            Ok((id, _)) => row(
                "chain id:",
                format!("MISMATCH (got {id}, want {})", self.expected_chain_id),
            ),
        }
        match &self.block_number {
            None => {}
            Some(Ok(n)) => row("latest block:", format!("OK (#{n})")),
            Some(Err(err)) => row("latest block:", format!("failed ({err})")),
        }
        format!("\n  Chain Status\n\n{out}")
    }
}

/// Queries chain id and block height.
pub async fn check_status<R>(reader: &R) -> StatusReport
where
    R: ChainReader + ?Sized,
{
    let config = reader.config();
    let start = Instant::now();
    let chain_id = reader
        .chain_id()
        .await
        .map(|id| (id, start.elapsed()))
        .map_err(|e| e.to_string());

    let block_number = match &chain_id {
        Ok(_) => Some(reader.block_number().await.map_err(|e| e.to_string())),
        Err(err) => {
            tracing::warn!(target: "status", error = %err, "chain endpoint unreachable");
            None
        }
    };

    StatusReport {
        rpc_url: config.rpc_url.clone(),
        registry_address: config.registry_address,
        schema_registry_address: config.schema_registry_address,
        expected_chain_id: config.chain_id,
        schema_uid: config.schema_uid,
        chain_id,
        block_number,
    }
}
