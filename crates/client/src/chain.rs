// Path: crates/client/src/chain.rs
//! A JSON-RPC 2.0 client for the registry chain.

use crate::rpc::{
    ascii_snippet, classify_rpc_error, classify_status, decode_data, is_zero_data, parse_quantity,
    RpcRequest, RpcResponse,
};
use agentid_telemetry::chain_metrics;
use agentid_telemetry::time::Timer;
use agentid_types::app::{Bytes32, OnChainAttestation, TxReceipt};
use agentid_types::codec::{decode_record, get_attestation_calldata};
use agentid_types::config::ChainConfig;
use agentid_types::error::{ChainError, ErrorCode};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

/// Reads registry state over HTTP JSON-RPC.
///
/// Each call is a single POST with the configured timeout. Errors are
/// classified so callers can tell throttling apart from other failures.
#[derive(Debug)]
pub struct ChainClient {
    config: ChainConfig,
    http: reqwest::Client,
    next_id: AtomicU64,
}

impl ChainClient {
    /// Builds a client for `config.rpc_url`.
    pub fn new(config: ChainConfig) -> Result<Self, ChainError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ChainError::Transport(e.to_string()))?;
        Ok(Self {
            config,
            http,
            next_id: AtomicU64::new(1),
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Sends one JSON-RPC request and returns its `result` member.
    pub async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, ChainError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let sink = chain_metrics();
        let timer = Timer::new(sink, method);
        let result = self.send(method, &params, id).await;

        let outcome = match &result {
            Ok(_) => "ok",
            Err(e) => e.code(),
        };
        sink.inc_rpc_requests(method, outcome);
        match &result {
            Ok(_) => tracing::debug!(
                target: "chain-client",
                method,
                id,
                elapsed_ms = timer.elapsed().as_millis() as u64,
                "rpc call ok"
            ),
            Err(e) => tracing::debug!(
                target: "chain-client",
                method,
                id,
                code = e.code(),
                error = %e,
                "rpc call failed"
            ),
        }
        result
    }

    async fn send(&self, method: &str, params: &[Value], id: u64) -> Result<Value, ChainError> {
        let request = RpcRequest::new(method, params, id);
        let response = self
            .http
            .post(&self.config.rpc_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;
        if let Some(err) = classify_status(status, &body) {
            return Err(err);
        }

        let parsed: RpcResponse = serde_json::from_slice(&body).map_err(|e| {
            ChainError::InvalidResponse(format!("{e}; body: {}", ascii_snippet(&body)))
        })?;
        if let Some(error) = parsed.error {
            return Err(classify_rpc_error(error));
        }
        Ok(parsed.result.unwrap_or(Value::Null))
    }

    fn transport_error(&self, err: reqwest::Error) -> ChainError {
        if err.is_timeout() {
            ChainError::Timeout(self.config.request_timeout())
        } else {
            ChainError::Transport(err.to_string())
        }
    }

    /// The current block height.
    pub async fn block_number(&self) -> Result<u64, ChainError> {
        let result = self.call("eth_blockNumber", Vec::new()).await?;
        parse_quantity(&result, "eth_blockNumber")
    }

    /// The chain id the node reports.
    pub async fn chain_id(&self) -> Result<u64, ChainError> {
        let result = self.call("eth_chainId", Vec::new()).await?;
        parse_quantity(&result, "eth_chainId")
    }

    /// Looks up an attestation record by uid.
    ///
    /// Returns `Ok(None)` when the registry answers with an empty record. A
    /// non-empty answer that cannot be decoded is an error, not a miss.
    pub async fn get_attestation(
        &self,
        uid: &Bytes32,
    ) -> Result<Option<OnChainAttestation>, ChainError> {
        let calldata = get_attestation_calldata(uid);
        let params = vec![
            json!({
                "to": self.config.registry_address.to_hex(),
                "data": format!("0x{}", hex::encode(calldata)),
            }),
            json!("latest"),
        ];
        let result = self.call("eth_call", params).await?;
        if is_zero_data(&result) {
            return Ok(None);
        }
        let bytes = decode_data(&result)?;
        Ok(decode_record(&bytes)?)
    }

    /// Like [`get_attestation`](Self::get_attestation), parsing `uid` first.
    /// A malformed uid fails before any request is sent.
    pub async fn get_attestation_hex(
        &self,
        uid: &str,
    ) -> Result<Option<OnChainAttestation>, ChainError> {
        let uid = Bytes32::from_hex(uid)?;
        self.get_attestation(&uid).await
    }

    /// Fetches a transaction receipt. Pending or unknown transactions yield `None`.
    pub async fn get_transaction_receipt(
        &self,
        tx_hash: &Bytes32,
    ) -> Result<Option<TxReceipt>, ChainError> {
        let result = self
            .call("eth_getTransactionReceipt", vec![json!(tx_hash.to_hex())])
            .await?;
        if result.is_null() {
            return Ok(None);
        }
        let field = |name: &str| result.get(name).cloned().unwrap_or(Value::Null);
        Ok(Some(TxReceipt {
            status: parse_quantity(&field("status"), "status")?,
            block_number: parse_quantity(&field("blockNumber"), "blockNumber")?,
            gas_used: parse_quantity(&field("gasUsed"), "gasUsed")?,
        }))
    }
}
