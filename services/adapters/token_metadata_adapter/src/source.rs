//! Metadata source abstraction
//!
//! Validators depend on [`TokenMetadataSource`] rather than on the RPC adapter so
//! rules can be exercised without a node.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};

use crate::error::{MetadataError, MetadataField, Result};

/// Resolves a contract address to its declared ERC20 metadata
#[async_trait]
pub trait TokenMetadataSource: Send + Sync {
    async fn token_symbol(&self, address: &str) -> Result<String>;

    async fn token_name(&self, address: &str) -> Result<String>;

    async fn token_decimals(&self, address: &str) -> Result<u8>;
}

/// Metadata as reported by a contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnChainMetadata {
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
}

/// Fixed, in-memory metadata source
///
/// Addresses are matched case-insensitively. Unknown addresses revert, and
/// addresses registered with [`with_failure`](Self::with_failure) fail as if
/// the node were unreachable.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMetadataSource {
    tokens: HashMap<String, OnChainMetadata>,
    failing: HashSet<String>,
}

impl InMemoryMetadataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, address: &str, symbol: &str, name: &str, decimals: u8) -> Self {
        self.tokens.insert(
            address.to_ascii_lowercase(),
            OnChainMetadata {
                symbol: symbol.to_string(),
                name: name.to_string(),
                decimals,
            },
        );
        self
    }

    pub fn with_failure(mut self, address: &str) -> Self {
        self.failing.insert(address.to_ascii_lowercase());
        self
    }

    fn lookup(&self, address: &str, field: MetadataField) -> Result<&OnChainMetadata> {
        let key = address.to_ascii_lowercase();

        if self.failing.contains(&key) {
            return Err(MetadataError::AllEndpointsFailed {
                field,
                address: address.to_string(),
            });
        }

        self.tokens.get(&key).ok_or_else(|| MetadataError::Reverted {
            field,
            address: address.to_string(),
        })
    }
}

#[async_trait]
impl TokenMetadataSource for InMemoryMetadataSource {
    async fn token_symbol(&self, address: &str) -> Result<String> {
        self.lookup(address, MetadataField::Symbol)
            .map(|token| token.symbol.clone())
    }

    async fn token_name(&self, address: &str) -> Result<String> {
        self.lookup(address, MetadataField::Name)
            .map(|token| token.name.clone())
    }

    async fn token_decimals(&self, address: &str) -> Result<u8> {
        self.lookup(address, MetadataField::Decimals)
            .map(|token| token.decimals)
    }
}
