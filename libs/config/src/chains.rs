//! Supported chains
//!
//! Each chain has a data file `src/tokens/<id>.json`; the file stem must parse
//! as a [`Chain`] or the run aborts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("Unsupported chain: {0}")]
    Unsupported(String),
}

/// Chains the registry is curated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    /// Berachain mainnet
    Mainnet,
    /// Berachain Bepolia testnet
    Bepolia,
}

impl Chain {
    pub const ALL: [Chain; 2] = [Chain::Mainnet, Chain::Bepolia];

    /// Identifier used in file names and configuration keys
    pub fn id(&self) -> &'static str {
        match self {
            Chain::Mainnet => "mainnet",
            Chain::Bepolia => "bepolia",
        }
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Chain::Mainnet => 80094,
            Chain::Bepolia => 80069,
        }
    }

    /// Public RPC endpoint used when configuration provides none
    pub fn default_rpc_url(&self) -> &'static str {
        match self {
            Chain::Mainnet => "https://rpc.berachain.com",
            Chain::Bepolia => "https://bepolia.rpc.berachain.com",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Chain {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chain::ALL
            .into_iter()
            .find(|chain| chain.id() == s)
            .ok_or_else(|| ChainError::Unsupported(s.to_string()))
    }
}
