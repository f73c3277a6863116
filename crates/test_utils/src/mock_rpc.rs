// Path: crates/test_utils/src/mock_rpc.rs
//! An in-process JSON-RPC node for exercising the chain client.
//!
//! The node binds an ephemeral localhost port and answers every POST with the
//! reply chosen by a caller-supplied handler. [`RegistryState`] is a ready-made
//! handler that serves registry records the way the mainnet contract does.

use agentid_types::app::{Bytes32, OnChainAttestation, TxReceipt};
use agentid_types::codec::{self, GET_ATTESTATION_SELECTOR};
use agentid_types::config::BASE_CHAIN_ID;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// What the node sends back for one request.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// A JSON-RPC success with this `result`.
    Result(Value),
    /// A JSON-RPC error object.
    Error {
        /// The JSON-RPC error code.
        code: i64,
        /// The error message.
        message: String,
    },
    /// A bare HTTP response with this status and body.
    Status(u16, String),
    /// A 200 response whose body is not JSON-RPC at all.
    Raw(String),
    /// No response before the client gives up.
    Hang,
}

/// A request the node received.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// The JSON-RPC method.
    pub method: String,
    /// The positional params.
    pub params: Vec<Value>,
    /// The request id.
    pub id: Value,
}

type Handler = dyn Fn(&str, &[Value]) -> MockReply + Send + Sync;

struct NodeState {
    handler: Box<Handler>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl NodeState {
    fn record(&self, call: RecordedCall) {
        let mut calls = match self.calls.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        calls.push(call);
    }
}

/// A running mock node. Dropping it stops the server.
pub struct MockRpcNode {
    url: String,
    state: Arc<NodeState>,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

async fn handle(State(state): State<Arc<NodeState>>, Json(request): Json<Value>) -> Response {
    let method = request
        .get("method")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let params = request
        .get("params")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    let id = request.get("id").cloned().unwrap_or(Value::Null);

    let reply = (state.handler)(&method, &params);
    state.record(RecordedCall {
        method,
        params,
        id: id.clone(),
    });

    match reply {
        MockReply::Result(result) => {
            Json(json!({"jsonrpc": "2.0", "id": id, "result": result})).into_response()
        }
        MockReply::Error { code, message } => Json(json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": {"code": code, "message": message}
        }))
        .into_response(),
        MockReply::Status(status, body) => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        )
            .into_response(),
        MockReply::Raw(body) => (StatusCode::OK, body).into_response(),
        MockReply::Hang => {
            tokio::time::sleep(std::time::Duration::from_secs(3600)).await;
            StatusCode::GATEWAY_TIMEOUT.into_response()
        }
    }
}

impl MockRpcNode {
    /// Starts a node on an ephemeral localhost port.
    pub async fn start<F>(handler: F) -> anyhow::Result<Self>
    where
        F: Fn(&str, &[Value]) -> MockReply + Send + Sync + 'static,
    {
        let state = Arc::new(NodeState {
            handler: Box::new(handler),
            calls: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .route("/", post(handle))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let (tx, rx) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = rx.await;
                })
                .await;
        });

        Ok(Self {
            url: format!("http://{addr}"),
            state,
            shutdown: Some(tx),
            task: Some(task),
        })
    }

    /// Starts a node that serves `registry`.
    pub async fn registry(registry: RegistryState) -> anyhow::Result<Self> {
        Self::start(move |method, params| registry.reply(method, params)).await
    }

    /// The node's base URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Every request received so far, in arrival order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        match self.state.calls.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// How many requests used `method`.
    pub fn call_count(&self, method: &str) -> usize {
        self.calls().iter().filter(|c| c.method == method).count()
    }
}

impl Drop for MockRpcNode {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// A registry and chain head served by [`MockRpcNode::registry`].
#[derive(Debug, Clone)]
pub struct RegistryState {
    /// Reported by `eth_chainId`.
    pub chain_id: u64,
    /// Reported by `eth_blockNumber`.
    pub block_number: u64,
    /// Records served by `eth_call`; unknown uids get the zeroed record.
    pub attestations: HashMap<Bytes32, OnChainAttestation>,
    /// Receipts served by `eth_getTransactionReceipt`; unknown hashes get `null`.
    pub receipts: HashMap<Bytes32, TxReceipt>,
}

impl Default for RegistryState {
    fn default() -> Self {
        Self {
            chain_id: BASE_CHAIN_ID,
            block_number: 0x1a2b3c,
            attestations: HashMap::new(),
            receipts: HashMap::new(),
        }
    }
}

fn quantity(value: u64) -> Value {
    Value::String(format!("0x{value:x}"))
}

impl RegistryState {
    /// Adds a record, keyed by its uid.
    pub fn with_attestation(mut self, record: OnChainAttestation) -> Self {
        self.attestations.insert(record.uid, record);
        self
    }

    /// Adds a receipt.
    pub fn with_receipt(mut self, tx_hash: Bytes32, receipt: TxReceipt) -> Self {
        self.receipts.insert(tx_hash, receipt);
        self
    }

    /// Answers one JSON-RPC request.
    pub fn reply(&self, method: &str, params: &[Value]) -> MockReply {
        match method {
            "eth_chainId" => MockReply::Result(quantity(self.chain_id)),
            "eth_blockNumber" => MockReply::Result(quantity(self.block_number)),
            "eth_call" => self.eth_call(params),
            "eth_getTransactionReceipt" => {
                let receipt = params
                    .first()
                    .and_then(Value::as_str)
                    .and_then(|h| Bytes32::from_hex(h).ok())
                    .and_then(|h| self.receipts.get(&h));
                match receipt {
                    Some(r) => MockReply::Result(json!({
                        "status": quantity(r.status),
                        "blockNumber": quantity(r.block_number),
                        "gasUsed": quantity(r.gas_used),
                        "logs": [],
                    })),
                    None => MockReply::Result(Value::Null),
                }
            }
            other => MockReply::Error {
                code: -32601,
                message: format!("the method {other} does not exist/is not available"),
            },
        }
    }

    fn eth_call(&self, params: &[Value]) -> MockReply {
        let data = params
            .first()
            .and_then(|call| call.get("data"))
            .and_then(Value::as_str)
            .and_then(|d| hex::decode(d.trim_start_matches("0x")).ok());
        let Some(data) = data else {
            return MockReply::Error {
                code: -32602,
                message: "invalid argument 0: missing call data".into(),
            };
        };
        let (selector, uid) = data.split_at(data.len().min(4));
        if selector != GET_ATTESTATION_SELECTOR || uid.len() != 32 {
            return MockReply::Error {
                code: -32000,
                message: "execution reverted".into(),
            };
        }
        let mut key = [0u8; 32];
        key.copy_from_slice(uid);
        let record = self
            .attestations
            .get(&Bytes32(key))
            .cloned()
            .unwrap_or_default();
        MockReply::Result(Value::String(format!(
            "0x{}",
            hex::encode(codec::encode_record(&record))
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{agent_three_payload, known_uid, record_for};

    async fn post(url: &str, body: Value) -> Value {
        reqwest::Client::new()
            .post(url)
            .json(&body)
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn serves_registry_records() {
        let registry = RegistryState::default()
            .with_attestation(record_for(known_uid(), &agent_three_payload()));
        let node = MockRpcNode::registry(registry).await.unwrap();

        let reply = post(
            node.url(),
            json!({"jsonrpc": "2.0", "id": 7, "method": "eth_chainId", "params": []}),
        )
        .await;
        assert_eq!(reply["result"], "0x2105");
        assert_eq!(reply["id"], 7);

        let mut calldata = GET_ATTESTATION_SELECTOR.to_vec();
        calldata.extend_from_slice(known_uid().as_bytes());
        let reply = post(
            node.url(),
            json!({"jsonrpc": "2.0", "id": 8, "method": "eth_call",
                   "params": [{"to": "0x4200000000000000000000000000000000000021",
                               "data": format!("0x{}", hex::encode(calldata))}, "latest"]}),
        )
        .await;
        let result = reply["result"].as_str().unwrap();
        let bytes = hex::decode(&result[2..]).unwrap();
        let record = codec::decode_record(&bytes).unwrap().unwrap();
        assert_eq!(record.uid, known_uid());

        assert_eq!(node.call_count("eth_call"), 1);
        assert_eq!(node.calls().len(), 2);
    }

    #[tokio::test]
    async fn unknown_methods_are_rpc_errors() {
        let node = MockRpcNode::registry(RegistryState::default()).await.unwrap();
        let reply = post(
            node.url(),
            json!({"jsonrpc": "2.0", "id": 1, "method": "eth_sendTransaction", "params": []}),
        )
        .await;
        assert_eq!(reply["error"]["code"], -32601);
    }
}
