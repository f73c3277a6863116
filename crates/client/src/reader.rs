// Path: crates/client/src/reader.rs
use crate::chain::ChainClient;
use agentid_types::app::{Bytes32, OnChainAttestation, TxReceipt};
use agentid_types::config::ChainConfig;
use agentid_types::error::ChainError;
use async_trait::async_trait;

/// Read access to the registry chain.
///
/// Verification, auditing and reporting are written against this trait so
/// they can run over any transport.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// The chain parameters reads are made against.
    fn config(&self) -> &ChainConfig;

    /// The chain id the node reports.
    async fn chain_id(&self) -> Result<u64, ChainError>;

    /// The current block height.
    async fn block_number(&self) -> Result<u64, ChainError>;

    /// Looks up an attestation; `None` when the registry holds nothing under `uid`.
    async fn get_attestation(
        &self,
        uid: &Bytes32,
    ) -> Result<Option<OnChainAttestation>, ChainError>;

    /// Fetches a transaction receipt; `None` while pending or unknown.
    async fn get_transaction_receipt(
        &self,
        tx_hash: &Bytes32,
    ) -> Result<Option<TxReceipt>, ChainError>;
}

#[async_trait]
impl ChainReader for ChainClient {
    fn config(&self) -> &ChainConfig {
        ChainClient::config(self)
    }

    async fn chain_id(&self) -> Result<u64, ChainError> {
        ChainClient::chain_id(self).await
    }

    async fn block_number(&self) -> Result<u64, ChainError> {
        ChainClient::block_number(self).await
    }

    async fn get_attestation(
        &self,
        uid: &Bytes32,
    ) -> Result<Option<OnChainAttestation>, ChainError> {
        ChainClient::get_attestation(self, uid).await
    }

    async fn get_transaction_receipt(
        &self,
        tx_hash: &Bytes32,
    ) -> Result<Option<TxReceipt>, ChainError> {
        ChainClient::get_transaction_receipt(self, tx_hash).await
    }
}
