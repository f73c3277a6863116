// Path: crates/types/src/error/mod.rs
//! Core error types for the agent identity toolkit.

use crate::app::Bytes32;
use std::time::Duration;
use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// A string could not be parsed as a `0x`-prefixed 32-byte hex value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed bytes32 value {value:?}: expected 0x followed by 64 hex characters")]
pub struct MalformedHash {
    /// The rejected input.
    pub value: String,
}

impl ErrorCode for MalformedHash {
    fn code(&self) -> &'static str {
        "MALFORMED_HASH"
    }
}

/// Errors raised while turning loosely typed input into an encodable payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A field required for submission was empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    /// A hash field did not hold a valid bytes32 value.
    #[error("invalid {field}: {source}")]
    MalformedHash {
        /// The name of the offending field.
        field: &'static str,
        /// The underlying parse failure.
        #[source]
        source: MalformedHash,
    },
}

impl ErrorCode for EncodeError {
    fn code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "ENCODE_MISSING_FIELD",
            Self::MalformedHash { .. } => "ENCODE_MALFORMED_HASH",
        }
    }
}

/// Errors raised while decoding ABI-encoded bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The buffer is shorter than the fixed head it must contain.
    #[error("data too short: {len} bytes, need at least {need}")]
    TooShort {
        /// The length of the buffer.
        len: usize,
        /// The minimum length required.
        need: usize,
    },
    /// An offset or length points beyond the end of the buffer.
    #[error("{field}: {needed} bytes at offset {offset} exceed buffer of {len} bytes")]
    Truncated {
        /// The field being decoded.
        field: &'static str,
        /// The absolute position of the read.
        offset: usize,
        /// The number of bytes the read required.
        needed: usize,
        /// The length of the buffer.
        len: usize,
    },
    /// A word carries a value wider than the type it is decoded into.
    #[error("{field}: word value does not fit in {bits} bits")]
    Overflow {
        /// The field being decoded.
        field: &'static str,
        /// The width of the target type.
        bits: u32,
    },
    /// A string field does not contain valid UTF-8.
    #[error("{field}: string is not valid UTF-8")]
    InvalidUtf8 {
        /// The field being decoded.
        field: &'static str,
    },
}

impl ErrorCode for DecodeError {
    fn code(&self) -> &'static str {
        match self {
            Self::TooShort { .. } => "DECODE_TOO_SHORT",
            Self::Truncated { .. } => "DECODE_TRUNCATED",
            Self::Overflow { .. } => "DECODE_OVERFLOW",
            Self::InvalidUtf8 { .. } => "DECODE_INVALID_UTF8",
        }
    }
}

/// Errors raised by the JSON canonicalizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanonicalError {
    /// NaN and the infinities have no JSON representation.
    #[error("cannot canonicalize non-finite number")]
    NonFiniteNumber,
    /// The input text was not a single valid JSON value.
    #[error("invalid JSON input: {0}")]
    Parse(String),
    /// A value could not be converted into the JSON data model.
    #[error("value is not representable as JSON: {0}")]
    Serialize(String),
}

impl ErrorCode for CanonicalError {
    fn code(&self) -> &'static str {
        match self {
            Self::NonFiniteNumber => "CANONICAL_NON_FINITE",
            Self::Parse(_) => "CANONICAL_PARSE",
            Self::Serialize(_) => "CANONICAL_SERIALIZE",
        }
    }
}

/// Errors raised while talking to the chain node.
#[derive(Debug, Error)]
pub enum ChainError {
    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(String),
    /// The request exceeded the configured timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    /// The node answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// The HTTP status code.
        status: u16,
        /// A printable snippet of the response body.
        body: String,
    },
    /// The node returned a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Rpc {
        /// The JSON-RPC error code.
        code: i64,
        /// The error message reported by the node.
        message: String,
    },
    /// The node rejected the request's credentials.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// The node is throttling requests.
    #[error("rate limited: {0}")]
    RateLimited(String),
    /// The response body could not be interpreted.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    /// The `eth_call` result could not be decoded as a registry record.
    #[error("registry record: {0}")]
    Decode(#[from] DecodeError),
    /// An identifier supplied by the caller was not a valid bytes32 value.
    #[error(transparent)]
    MalformedHash(#[from] MalformedHash),
}

impl ChainError {
    /// Returns true when the error signals throttling and the call may be retried.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }
}

impl ErrorCode for ChainError {
    fn code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "CHAIN_TRANSPORT",
            Self::Timeout(_) => "CHAIN_TIMEOUT",
            Self::Http { .. } => "CHAIN_HTTP",
            Self::Rpc { .. } => "CHAIN_RPC",
            Self::Unauthorized(_) => "CHAIN_UNAUTHORIZED",
            Self::RateLimited(_) => "CHAIN_RATE_LIMITED",
            Self::InvalidResponse(_) => "CHAIN_INVALID_RESPONSE",
            Self::Decode(_) => "CHAIN_DECODE",
            Self::MalformedHash(_) => "CHAIN_MALFORMED_HASH",
        }
    }
}

/// Reasons an attestation fails verification against the chain or a stored record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// The registry holds no attestation under the requested uid.
    #[error("attestation {uid} not found")]
    NotFound {
        /// The uid that was queried.
        uid: Bytes32,
    },
    /// The attestation exists but carries no payload.
    #[error("attestation has no payload data")]
    EmptyData,
    /// The payload is not a valid agent identity encoding.
    #[error("attestation payload could not be decoded: {0}")]
    Undecodable(#[from] DecodeError),
    /// The attestation was made under a different schema.
    #[error("schema mismatch: expected {expected}, found {actual}")]
    SchemaMismatch {
        /// The schema uid the deployment expects.
        expected: Bytes32,
        /// The schema uid recorded on-chain.
        actual: Bytes32,
    },
    /// The stored prompt hash differs from the on-chain one.
    #[error("prompt hash mismatch: stored {stored}, on-chain {on_chain}")]
    PromptHashMismatch {
        /// The hash held by the local record.
        stored: String,
        /// The hash recorded on-chain.
        on_chain: Bytes32,
    },
    /// The stored manifest hash differs from the on-chain one.
    #[error("manifest hash mismatch: stored {stored}, on-chain {on_chain}")]
    ManifestHashMismatch {
        /// The hash held by the local record.
        stored: String,
        /// The hash recorded on-chain.
        on_chain: Bytes32,
    },
}

impl ErrorCode for VerificationError {
    fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "VERIFY_NOT_FOUND",
            Self::EmptyData => "VERIFY_EMPTY_DATA",
            Self::Undecodable(_) => "VERIFY_UNDECODABLE",
            Self::SchemaMismatch { .. } => "VERIFY_SCHEMA_MISMATCH",
            Self::PromptHashMismatch { .. } => "VERIFY_PROMPT_MISMATCH",
            Self::ManifestHashMismatch { .. } => "VERIFY_MANIFEST_MISMATCH",
        }
    }
}

/// Errors raised while validating chain configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A configuration value is present but unusable.
    #[error("invalid {field}: {reason}")]
    Invalid {
        /// The configuration key.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// A value could not be parsed from its textual form.
    #[error("could not parse {field}: {reason}")]
    Parse {
        /// The configuration key.
        field: &'static str,
        /// The parser's message.
        reason: String,
    },
}

impl ErrorCode for ConfigError {
    fn code(&self) -> &'static str {
        match self {
            Self::Invalid { .. } => "CONFIG_INVALID",
            Self::Parse { .. } => "CONFIG_PARSE",
        }
    }
}
