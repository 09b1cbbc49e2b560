//! # Registry Configuration
//!
//! Centralized configuration for the asset registry tooling.
//!
//! - **Chains**: the closed set of supported chains and their public RPC endpoints
//! - **Registry config**: data paths, RPC client settings and validation switches,
//!   layered from defaults, `config/registry.toml` and `REGISTRY_` env vars
//!
//! ```rust,no_run
//! use registry_config::{Chain, RegistryConfig};
//!
//! let config = RegistryConfig::load(None).unwrap();
//! let endpoints = config.chain_endpoints(Chain::Mainnet);
//! println!("mainnet via {}", endpoints.primary);
//! ```

pub mod chains;
pub mod registry_config;

pub use chains::{Chain, ChainError};
pub use registry_config::{
    ChainEndpoints, ChainSettings, PathsConfig, RegistryConfig, RpcSettings,
    ValidationSettings, DEFAULT_CONFIG_PATH,
};
