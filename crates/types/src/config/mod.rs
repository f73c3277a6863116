// Path: crates/types/src/config/mod.rs

//! Chain configuration for the attestation registry deployment.
//!
//! Every field has a serde default matching the Base mainnet deployment, so an
//! empty TOML document is a complete configuration.

use crate::app::{Address, Bytes32};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Well-known constants of the Base mainnet deployment.
pub mod deployment;
pub use deployment::*;

/// Environment variable overriding [`ChainConfig::rpc_url`].
pub const ENV_RPC_URL: &str = "AGENTID_RPC_URL";
/// Environment variable overriding [`ChainConfig::schema_uid`].
pub const ENV_SCHEMA_UID: &str = "AGENTID_SCHEMA_UID";

/// Backoff parameters for rate-limited chain lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetryConfig {
    /// How many times a rate-limited call is retried before giving up.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// The delay before the first retry; later retries grow linearly.
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
    /// The upper bound on any single delay.
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

fn default_max_retries() -> u32 {
    3
}
fn default_base_delay_ms() -> u64 {
    3_000
}
fn default_max_delay_ms() -> u64 {
    15_000
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

/// Everything needed to reach and interpret the attestation registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainConfig {
    /// The JSON-RPC endpoint.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    /// The chain id the endpoint is expected to report.
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,
    /// Human readable network name used in reports.
    #[serde(default = "default_network_name")]
    pub network_name: String,
    /// The attestation registry contract.
    #[serde(default = "default_registry_address")]
    pub registry_address: Address,
    /// The schema registry contract.
    #[serde(default = "default_schema_registry_address")]
    pub schema_registry_address: Address,
    /// The schema uid agent identities are attested under.
    #[serde(default = "default_schema_uid")]
    pub schema_uid: Bytes32,
    /// Base URL of the attestation explorer.
    #[serde(default = "default_explorer_url")]
    pub explorer_url: String,
    /// Base URL of the block explorer.
    #[serde(default = "default_block_explorer_url")]
    pub block_explorer_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// How many audit lookups may be in flight at once.
    #[serde(default = "default_audit_concurrency")]
    pub audit_concurrency: usize,
    /// Backoff for rate-limited lookups.
    #[serde(default)]
    pub retry: RetryConfig,
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_string()
}
fn default_chain_id() -> u64 {
    BASE_CHAIN_ID
}
fn default_network_name() -> String {
    BASE_NETWORK_NAME.to_string()
}
fn default_registry_address() -> Address {
    REGISTRY_ADDRESS
}
fn default_schema_registry_address() -> Address {
    SCHEMA_REGISTRY_ADDRESS
}
fn default_schema_uid() -> Bytes32 {
    AGENT_IDENTITY_SCHEMA_UID
}
fn default_explorer_url() -> String {
    DEFAULT_EXPLORER_URL.to_string()
}
fn default_block_explorer_url() -> String {
    DEFAULT_BLOCK_EXPLORER_URL.to_string()
}
fn default_request_timeout_secs() -> u64 {
    30
}
fn default_audit_concurrency() -> usize {
    1
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            chain_id: default_chain_id(),
            network_name: default_network_name(),
            registry_address: default_registry_address(),
            schema_registry_address: default_schema_registry_address(),
            schema_uid: default_schema_uid(),
            explorer_url: default_explorer_url(),
            block_explorer_url: default_block_explorer_url(),
            request_timeout_secs: default_request_timeout_secs(),
            audit_concurrency: default_audit_concurrency(),
            retry: RetryConfig::default(),
        }
    }
}

impl ChainConfig {
    /// The per-request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Applies `AGENTID_*` overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_RPC_URL).filter(|v| !v.is_empty()) {
            self.rpc_url = url;
        }
        if let Some(uid) = lookup(ENV_SCHEMA_UID).filter(|v| !v.is_empty()) {
            self.schema_uid = Bytes32::from_hex(&uid).map_err(|e| ConfigError::Parse {
                field: "schema_uid",
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.rpc_url.starts_with("http://") || self.rpc_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                field: "rpc_url",
                reason: format!("{:?} is not an http(s) URL", self.rpc_url),
            });
        }
        if self.chain_id == 0 {
            return Err(ConfigError::Invalid {
                field: "chain_id",
                reason: "must be non-zero".into(),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "request_timeout_secs",
                reason: "must be at least 1".into(),
            });
        }
        if self.audit_concurrency == 0 {
            return Err(ConfigError::Invalid {
                field: "audit_concurrency",
                reason: "must be at least 1".into(),
            });
        }
        if self.retry.max_delay_ms < self.retry.base_delay_ms {
            return Err(ConfigError::Invalid {
                field: "retry.max_delay_ms",
                reason: "must not be below retry.base_delay_ms".into(),
            });
        }
        Ok(())
    }

    /// Explorer page for one attestation.
    pub fn attestation_url(&self, uid: &Bytes32) -> String {
        format!(
            "{}/attestation/view/{}",
            self.explorer_url.trim_end_matches('/'),
            uid
        )
    }

    /// Explorer page for the configured schema.
    pub fn schema_url(&self) -> String {
        format!(
            "{}/schema/view/{}",
            self.explorer_url.trim_end_matches('/'),
            self.schema_uid
        )
    }

    /// Block explorer page for the registry contract.
    pub fn registry_url(&self) -> String {
        format!(
            "{}/address/{}",
            self.block_explorer_url.trim_end_matches('/'),
            self.registry_address
        )
    }
}
