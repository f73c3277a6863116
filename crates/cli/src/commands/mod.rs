// Path: crates/cli/src/commands/mod.rs

use agentid_cli::load_chain_config;
use agentid_client::ChainClient;
use agentid_services::Retrying;
use agentid_types::config::ChainConfig;
use anyhow::Result;
use std::path::PathBuf;

pub mod audit;
pub mod hash;
pub mod proof;
pub mod status;
pub mod submit;
pub mod verify;

/// Options shared by every chain-reading command.
#[derive(Debug)]
pub struct Globals {
    pub config: Option<PathBuf>,
    pub rpc: Option<String>,
}

impl Globals {
    pub fn chain_config(&self) -> Result<ChainConfig> {
        load_chain_config(self.config.as_deref(), self.rpc.as_deref(), |key| {
            std::env::var(key).ok()
        })
    }

    /// A client for the configured endpoint that backs off on rate limits.
    pub fn reader(&self) -> Result<Retrying<ChainClient>> {
        let client = ChainClient::new(self.chain_config()?)?;
        Ok(Retrying::from_config(client))
    }
}
