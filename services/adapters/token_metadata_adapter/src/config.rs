//! Configuration for Token Metadata Adapter

use registry_config::{Chain, RegistryConfig};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenMetadataConfig {
    /// Primary RPC endpoint
    pub primary_rpc: String,

    /// Fallback RPC endpoints, tried in order after the primary
    pub fallback_rpcs: Vec<String>,

    /// Chain ID (80094 for Berachain)
    pub chain_id: u64,

    /// Per-call RPC timeout in milliseconds
    pub rpc_timeout_ms: u64,

    /// Maximum attempts for a failed lookup
    pub max_retries: u32,

    /// Base delay of the exponential backoff between attempts
    pub retry_backoff_ms: u64,

    /// Rate limit (requests per second), 0 disables limiting
    pub rate_limit_per_sec: u32,
}

impl TokenMetadataConfig {
    /// Build the adapter config for `chain` from the registry configuration
    pub fn for_chain(config: &RegistryConfig, chain: Chain) -> Self {
        let endpoints = config.chain_endpoints(chain);

        Self {
            primary_rpc: endpoints.primary,
            fallback_rpcs: endpoints.fallback,
            chain_id: chain.chain_id(),
            rpc_timeout_ms: config.rpc.timeout_ms,
            max_retries: config.rpc.max_retries,
            rate_limit_per_sec: config.rpc.rate_limit_per_sec,
            ..Default::default()
        }
    }
}

impl Default for TokenMetadataConfig {
    fn default() -> Self {
        Self {
            primary_rpc: Chain::Mainnet.default_rpc_url().to_string(),
            fallback_rpcs: Vec::new(),
            chain_id: Chain::Mainnet.chain_id(),
            rpc_timeout_ms: 10000,
            max_retries: 3,
            retry_backoff_ms: 500,
            rate_limit_per_sec: 10,
        }
    }
}
