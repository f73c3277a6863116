// Path: crates/services/src/retry.rs
//! Backoff for rate-limited chain reads.
//!
//! Only [`ChainError::RateLimited`] is retried. The delay grows linearly with
//! the attempt number and is capped at `max_delay`.

use agentid_client::ChainReader;
use agentid_telemetry::chain_metrics;
use agentid_types::app::{Bytes32, OnChainAttestation, TxReceipt};
use agentid_types::config::{ChainConfig, RetryConfig};
use agentid_types::error::ChainError;
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;

/// How many times, and how patiently, to retry a throttled call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    /// A policy that never retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }

    /// The pause before retry number `attempt + 1`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay
            .saturating_mul(attempt.saturating_add(1))
            .min(self.max_delay)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            base_delay: Duration::from_millis(config.base_delay_ms),
            max_delay: Duration::from_millis(config.max_delay_ms),
        }
    }
}

/// Runs `op`, retrying while it fails with a rate-limit error and retries remain.
pub async fn with_rate_limit_retry<T, F, Fut>(
    policy: &RetryPolicy,
    method: &str,
    mut op: F,
) -> Result<T, ChainError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ChainError>>,
{
    let mut attempt = 0u32;
    loop {
        match op().await {
            Err(err) if err.is_rate_limited() && attempt < policy.max_retries => {
                let delay = policy.delay_for(attempt);
                attempt += 1;
                tracing::warn!(
                    target: "retry",
                    method,
                    attempt,
                    max_retries = policy.max_retries,
                    delay_ms = delay.as_millis() as u64,
                    "rate limited, backing off"
                );
                chain_metrics().inc_rpc_retries(method);
                tokio::time::sleep(delay).await;
            }
            other => return other,
        }
    }
}

/// A [`ChainReader`] that applies a [`RetryPolicy`] to every read of `inner`.
#[derive(Debug)]
pub struct Retrying<R> {
    inner: R,
    policy: RetryPolicy,
}

impl<R: ChainReader> Retrying<R> {
    pub fn new(inner: R, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    /// Wraps `inner` with the policy from its own configuration.
    pub fn from_config(inner: R) -> Self {
        let policy = RetryPolicy::from(&inner.config().retry);
        Self::new(inner, policy)
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[async_trait]
impl<R: ChainReader> ChainReader for Retrying<R> {
    fn config(&self) -> &ChainConfig {
        self.inner.config()
    }

    async fn chain_id(&self) -> Result<u64, ChainError> {
        with_rate_limit_retry(&self.policy, "eth_chainId", || self.inner.chain_id()).await
    }

    async fn block_number(&self) -> Result<u64, ChainError> {
        with_rate_limit_retry(&self.policy, "eth_blockNumber", || {
            self.inner.block_number()
        })
        .await
    }

    async fn get_attestation(
        &self,
        uid: &Bytes32,
    ) -> Result<Option<OnChainAttestation>, ChainError> {
        with_rate_limit_retry(&self.policy, "eth_call", || self.inner.get_attestation(uid)).await
    }

    async fn get_transaction_receipt(
        &self,
        tx_hash: &Bytes32,
    ) -> Result<Option<TxReceipt>, ChainError> {
        with_rate_limit_retry(&self.policy, "eth_getTransactionReceipt", || {
            self.inner.get_transaction_receipt(tx_hash)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast(max_retries: u32) -> RetryPolicy {
        RetryPolicy {
            max_retries,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(2),
        }
    }

    #[test]
    fn delay_is_linear_and_capped() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for(0), Duration::from_secs(3));
        assert_eq!(policy.delay_for(1), Duration::from_secs(6));
        assert_eq!(policy.delay_for(3), Duration::from_secs(12));
        assert_eq!(policy.delay_for(4), Duration::from_secs(15));
        assert_eq!(policy.delay_for(u32::MAX), Duration::from_secs(15));
    }

    #[tokio::test]
    async fn retries_rate_limits_until_success() {
        let calls = AtomicU32::new(0);
        let result = with_rate_limit_retry(&fast(3), "eth_call", || async {
            if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                Err(ChainError::RateLimited("429".into()))
            } else {
                Ok(7u64)
            }
        })
        .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_retries() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = with_rate_limit_retry(&fast(3), "eth_call", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(ChainError::RateLimited("429".into()))
        })
        .await;
        assert!(result.unwrap_err().is_rate_limited());
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn other_errors_are_not_retried() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = with_rate_limit_retry(&fast(3), "eth_call", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(ChainError::Transport("connection refused".into()))
        })
        .await;
        assert!(matches!(result, Err(ChainError::Transport(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn none_policy_fails_fast() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = with_rate_limit_retry(&RetryPolicy::none(), "eth_call", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(ChainError::RateLimited("slow down".into()))
        })
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
