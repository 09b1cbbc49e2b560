//! RPC client for reading ERC20 metadata
//!
//! Handles all communication with chain nodes to fetch token symbol, name and
//! decimals. Each lookup tries the primary endpoint then every fallback.

use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};
use web3::contract::{Contract, Options};
use web3::transports::Http;
use web3::types::{H160, H256};
use web3::Web3;

use crate::config::TokenMetadataConfig;
use crate::error::{MetadataError, MetadataField, Result};

/// ERC20 metadata ABI: symbol(), name(), decimals()
const ERC20_METADATA_ABI: &str = r#"[
    {"constant":true,"inputs":[],"name":"symbol","outputs":[{"name":"","type":"string"}],"type":"function"},
    {"constant":true,"inputs":[],"name":"name","outputs":[{"name":"","type":"string"}],"type":"function"},
    {"constant":true,"inputs":[],"name":"decimals","outputs":[{"name":"","type":"uint8"}],"type":"function"}
]"#;

/// Legacy tokens (MKR-style) return bytes32 from symbol() and name()
const ERC20_BYTES32_METADATA_ABI: &str = r#"[
    {"constant":true,"inputs":[],"name":"symbol","outputs":[{"name":"","type":"bytes32"}],"type":"function"},
    {"constant":true,"inputs":[],"name":"name","outputs":[{"name":"","type":"bytes32"}],"type":"function"}
]"#;

pub struct RpcClient {
    config: TokenMetadataConfig,
    web3_clients: Vec<Web3<Http>>,
}

impl RpcClient {
    /// Create new RPC client with configured endpoints
    pub fn new(config: TokenMetadataConfig) -> Result<Self> {
        let mut web3_clients = Vec::new();

        // Add primary RPC
        let transport = Http::new(&config.primary_rpc)?;
        web3_clients.push(Web3::new(transport));

        // Add fallback RPCs
        for rpc_url in &config.fallback_rpcs {
            match Http::new(rpc_url) {
                Ok(transport) => web3_clients.push(Web3::new(transport)),
                Err(e) => warn!("Skipping invalid fallback RPC {}: {}", rpc_url, e),
            }
        }

        if web3_clients.is_empty() {
            return Err(MetadataError::NoEndpoints);
        }

        Ok(Self {
            config,
            web3_clients,
        })
    }

    /// Number of usable endpoints
    pub fn endpoint_count(&self) -> usize {
        self.web3_clients.len()
    }

    /// Read `symbol()` or `name()` from a token contract
    pub async fn read_string(&self, token: H160, field: MetadataField) -> Result<String> {
        for (idx, web3) in self.web3_clients.iter().enumerate() {
            match self.read_string_with_client(web3, token, field).await {
                Ok(value) => {
                    debug!("Read {} of {:?} via RPC endpoint {}", field, token, idx);
                    return Ok(value);
                }
                Err(e) => warn!("RPC endpoint {} failed reading {} of {:?}: {}", idx, field, token, e),
            }
        }

        Err(MetadataError::AllEndpointsFailed {
            field,
            address: format!("{:?}", token),
        })
    }

    /// Read `decimals()` from a token contract
    pub async fn read_decimals(&self, token: H160) -> Result<u8> {
        for (idx, web3) in self.web3_clients.iter().enumerate() {
            match self.read_decimals_with_client(web3, token).await {
                Ok(decimals) => {
                    debug!("Read decimals of {:?} via RPC endpoint {}", token, idx);
                    return Ok(decimals);
                }
                Err(e) => warn!("RPC endpoint {} failed reading decimals of {:?}: {}", idx, token, e),
            }
        }

        Err(MetadataError::AllEndpointsFailed {
            field: MetadataField::Decimals,
            address: format!("{:?}", token),
        })
    }

    async fn read_string_with_client(
        &self,
        web3: &Web3<Http>,
        token: H160,
        field: MetadataField,
    ) -> Result<String> {
        let contract = Contract::from_json(web3.eth(), token, ERC20_METADATA_ABI.as_bytes())?;
        let query = contract.query::<String, _, _, _>(field.method(), (), None, Options::default(), None);

        match self.timed(field, query).await {
            Err(MetadataError::Call {
                source: web3::contract::Error::InvalidOutputType(_) | web3::contract::Error::Abi(_),
                ..
            }) => {
                debug!("{} of {:?} is not a string, retrying as bytes32", field, token);
                let contract =
                    Contract::from_json(web3.eth(), token, ERC20_BYTES32_METADATA_ABI.as_bytes())?;
                let query =
                    contract.query::<H256, _, _, _>(field.method(), (), None, Options::default(), None);
                self.timed(field, query).await.map(decode_bytes32)
            }
            other => other,
        }
    }

    async fn read_decimals_with_client(&self, web3: &Web3<Http>, token: H160) -> Result<u8> {
        let contract = Contract::from_json(web3.eth(), token, ERC20_METADATA_ABI.as_bytes())?;
        let query = contract.query::<u8, _, _, _>(
            MetadataField::Decimals.method(),
            (),
            None,
            Options::default(),
            None,
        );

        self.timed(MetadataField::Decimals, query).await
    }

    /// Apply the configured per-call timeout
    async fn timed<T>(
        &self,
        field: MetadataField,
        call: impl Future<Output = web3::contract::Result<T>>,
    ) -> Result<T> {
        let timeout_ms = self.config.rpc_timeout_ms;

        match timeout(Duration::from_millis(timeout_ms), call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(source)) => Err(MetadataError::Call { field, source }),
            Err(_) => Err(MetadataError::Timeout { field, timeout_ms }),
        }
    }
}

/// Decode a NUL-padded bytes32 string
pub fn decode_bytes32(raw: H256) -> String {
    let bytes = raw.as_bytes();
    let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_bytes32_symbol() {
        let mut raw = [0u8; 32];
        raw[..3].copy_from_slice(b"MKR");
        assert_eq!(decode_bytes32(H256::from(raw)), "MKR");
    }

    #[test]
    fn test_decode_bytes32_full_width() {
        let raw = [b'A'; 32];
        assert_eq!(decode_bytes32(H256::from(raw)).len(), 32);
    }

    #[test]
    fn test_client_with_fallbacks() {
        let config = TokenMetadataConfig {
            primary_rpc: "https://rpc.example.org".to_string(),
            fallback_rpcs: vec!["https://fallback.example.org".to_string()],
            ..Default::default()
        };

        let client = RpcClient::new(config).unwrap();
        assert_eq!(client.endpoint_count(), 2);
    }
}
