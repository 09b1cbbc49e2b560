//! Token Metadata Adapter Implementation
//!
//! Wraps the RPC client with rate limiting, retries and metrics. One adapter is
//! built per chain and shared by every record validation of that chain.

use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota};
use std::future::Future;
use std::num::NonZeroU32;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::{sleep, Duration};
use tracing::{debug, info, warn};
use web3::types::H160;

use crate::config::TokenMetadataConfig;
use crate::error::{MetadataField, Result};
use crate::rpc_client::RpcClient;
use crate::source::TokenMetadataSource;

/// Token Metadata Adapter
///
/// All on-chain reads of the validator go through this type.
pub struct TokenMetadataAdapter {
    /// Configuration
    config: TokenMetadataConfig,

    /// RPC client for contract reads
    rpc_client: Arc<RpcClient>,

    /// Rate limiter, absent when `rate_limit_per_sec` is 0
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,

    /// Metrics
    metrics: Arc<RwLock<Metrics>>,
}

#[derive(Debug, Default, Clone)]
pub struct Metrics {
    pub rpc_calls: u64,
    pub rpc_retries: u64,
    pub rpc_failures: u64,
}

impl TokenMetadataAdapter {
    /// Create new token metadata adapter
    pub fn new(config: TokenMetadataConfig) -> Result<Self> {
        let rpc_client = Arc::new(RpcClient::new(config.clone())?);

        let rate_limiter = match NonZeroU32::new(config.rate_limit_per_sec) {
            Some(rate) => Some(Arc::new(DefaultDirectRateLimiter::direct(Quota::per_second(rate)))),
            None => {
                warn!("Rate limiting disabled for chain {}", config.chain_id);
                None
            }
        };

        info!(
            "Token Metadata Adapter initialized for chain {} with {} RPC endpoints",
            config.chain_id,
            rpc_client.endpoint_count()
        );

        Ok(Self {
            config,
            rpc_client,
            rate_limiter,
            metrics: Arc::new(RwLock::new(Metrics::default())),
        })
    }

    /// Get current metrics
    pub async fn get_metrics(&self) -> Metrics {
        self.metrics.read().await.clone()
    }

    async fn read_string(&self, address: &str, field: MetadataField) -> Result<String> {
        let token = parse_h160(address)?;
        let rpc = &*self.rpc_client;
        self.with_retries(address, field, move || rpc.read_string(token, field))
            .await
    }

    /// Run `call` with rate limiting and exponential backoff
    async fn with_retries<T, F, Fut>(&self, address: &str, field: MetadataField, call: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let max_attempts = self.config.max_retries.max(1);
        let mut attempts = 0;

        loop {
            attempts += 1;

            if let Some(limiter) = &self.rate_limiter {
                limiter.until_ready().await;
            }
            self.metrics.write().await.rpc_calls += 1;

            match call().await {
                Ok(value) => {
                    debug!("Fetched {} for {} (attempt {})", field, address, attempts);
                    return Ok(value);
                }
                Err(e) => {
                    warn!(
                        "Fetching {} for {} failed (attempt {}/{}): {}",
                        field, address, attempts, max_attempts, e
                    );

                    if attempts >= max_attempts || !e.is_retryable() {
                        self.metrics.write().await.rpc_failures += 1;
                        return Err(e);
                    }

                    self.metrics.write().await.rpc_retries += 1;

                    sleep(backoff_delay(self.config.retry_backoff_ms, attempts)).await;
                }
            }
        }
    }
}

#[async_trait]
impl TokenMetadataSource for TokenMetadataAdapter {
    async fn token_symbol(&self, address: &str) -> Result<String> {
        self.read_string(address, MetadataField::Symbol).await
    }

    async fn token_name(&self, address: &str) -> Result<String> {
        self.read_string(address, MetadataField::Name).await
    }

    async fn token_decimals(&self, address: &str) -> Result<u8> {
        let token = parse_h160(address)?;
        let rpc = &*self.rpc_client;
        self.with_retries(address, MetadataField::Decimals, move || rpc.read_decimals(token))
            .await
    }
}

/// Doublings of the base delay stop here (base * 1024)
const MAX_BACKOFF_EXPONENT: u32 = 10;

/// Exponential backoff before retrying after failed attempt `attempt` (1-based)
pub(crate) fn backoff_delay(base_ms: u64, attempt: u32) -> Duration {
    let exponent = attempt.saturating_sub(1).min(MAX_BACKOFF_EXPONENT);
    Duration::from_millis(base_ms.saturating_mul(1_u64 << exponent))
}

fn parse_h160(address: &str) -> Result<H160> {
    let raw = types::parse_address(address)?;
    Ok(H160::from(raw))
}
