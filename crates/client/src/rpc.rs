// Path: crates/client/src/rpc.rs
//! JSON-RPC 2.0 envelopes and the mapping from node failures to `ChainError`.

use agentid_types::error::ChainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC code some providers use for throttling (`limit exceeded`).
pub const RATE_LIMIT_CODE: i64 = -32005;

/// An outgoing request.
#[derive(Debug, Serialize)]
pub struct RpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: &'a [Value],
    id: u64,
}

impl<'a> RpcRequest<'a> {
    /// Builds a request with the given id.
    pub fn new(method: &'a str, params: &'a [Value], id: u64) -> Self {
        Self {
            jsonrpc: "2.0",
            method,
            params,
            id,
        }
    }
}

/// An incoming response. A missing `result` is read as `null`.
#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

/// The `error` member of a response.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// A printable, bounded excerpt of a response body.
pub fn ascii_snippet(bytes: &[u8]) -> String {
    let s = String::from_utf8_lossy(bytes);
    let s: String = s.trim().chars().take(160).collect();
    s.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

fn mentions_rate_limit(message: &str) -> bool {
    let m = message.to_ascii_lowercase();
    m.contains("rate limit")
        || m.contains("rate-limit")
        || m.contains("too many requests")
        || m.contains("request limit")
        || m.contains("limit exceeded")
}

fn mentions_unauthorized(message: &str) -> bool {
    let m = message.to_ascii_lowercase();
    m.contains("unauthorized") || m.contains("forbidden") || m.contains("api key")
}

/// Maps a non-success HTTP status to an error. Returns `None` for 2xx.
pub fn classify_status(status: u16, body: &[u8]) -> Option<ChainError> {
    if (200..300).contains(&status) {
        return None;
    }
    let body = ascii_snippet(body);
    Some(match status {
        429 => ChainError::RateLimited(format!("HTTP 429: {body}")),
        401 | 403 => ChainError::Unauthorized(format!("HTTP {status}: {body}")),
        _ => ChainError::Http { status, body },
    })
}

/// Maps a JSON-RPC error object to an error, singling out throttling and auth failures.
pub fn classify_rpc_error(error: RpcErrorObject) -> ChainError {
    if error.code == RATE_LIMIT_CODE || error.code == 429 || mentions_rate_limit(&error.message) {
        ChainError::RateLimited(error.message)
    } else if error.code == 401 || error.code == 403 || mentions_unauthorized(&error.message) {
        ChainError::Unauthorized(error.message)
    } else {
        ChainError::Rpc {
            code: error.code,
            message: error.message,
        }
    }
}

/// Parses a hex quantity such as `"0x2105"`. `"0x"` reads as zero.
pub fn parse_quantity(value: &Value, field: &str) -> Result<u64, ChainError> {
    let text = value.as_str().ok_or_else(|| {
        ChainError::InvalidResponse(format!("{field}: expected hex string, got {value}"))
    })?;
    let digits = text.strip_prefix("0x").ok_or_else(|| {
        ChainError::InvalidResponse(format!("{field}: missing 0x prefix in {text:?}"))
    })?;
    if digits.is_empty() {
        return Ok(0);
    }
    u64::from_str_radix(digits, 16)
        .map_err(|e| ChainError::InvalidResponse(format!("{field}: {text:?}: {e}")))
}

/// Whether an `eth_call` result is empty or only zero digits, in any length.
pub fn is_zero_data(value: &Value) -> bool {
    value.as_str().is_some_and(|text| {
        text.strip_prefix("0x")
            .unwrap_or(text)
            .bytes()
            .all(|b| b == b'0')
    })
}

/// Decodes `0x`-prefixed hex data as returned by `eth_call`.
pub fn decode_data(value: &Value) -> Result<Vec<u8>, ChainError> {
    let text = value.as_str().ok_or_else(|| {
        ChainError::InvalidResponse(format!("eth_call: expected hex string, got {value}"))
    })?;
    let digits = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(digits).map_err(|e| {
        ChainError::InvalidResponse(format!("eth_call: malformed hex result: {e}"))
    })
}
