//! Registry Configuration Module
//!
//! Layered configuration for the registry tooling: built-in defaults, an
//! optional TOML file, then `REGISTRY_` environment overrides
//! (`REGISTRY_RPC__TIMEOUT_MS=20000`).

use anyhow::{Context, Result};
use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::chains::Chain;

/// Default config file, loaded when present
pub const DEFAULT_CONFIG_PATH: &str = "config/registry.toml";

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RegistryConfig {
    /// Registry data locations
    pub paths: PathsConfig,

    /// RPC client behaviour shared by every chain
    pub rpc: RpcSettings,

    /// Validation switches
    pub validation: ValidationSettings,

    /// Per-chain endpoint overrides, keyed by chain id (`mainnet`, ...)
    #[serde(default)]
    pub chains: HashMap<String, ChainSettings>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PathsConfig {
    /// Root of the source data (`tokens/`, `vaults/`, `validators/`)
    pub src_dir: PathBuf,
    pub tokens_dir: PathBuf,
    pub protocols_file: PathBuf,
    /// Output of the compile step
    pub dist_dir: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RpcSettings {
    pub timeout_ms: u64,
    pub max_retries: u32,
    pub rate_limit_per_sec: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ValidationSettings {
    /// Report tokens without an image
    pub require_token_images: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ChainSettings {
    pub rpc_primary: Option<String>,
    pub rpc_fallback: Option<Vec<String>>,
}

/// Resolved RPC endpoints for one chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainEndpoints {
    pub primary: String,
    pub fallback: Vec<String>,
}

impl RegistryConfig {
    /// Load configuration with defaults, optional file and environment overrides
    ///
    /// An explicit `path` must exist; the default path is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("paths.src_dir", "src")?
            .set_default("paths.tokens_dir", "src/tokens")?
            .set_default("paths.protocols_file", "src/protocols.json")?
            .set_default("paths.dist_dir", "dist")?
            .set_default("rpc.timeout_ms", 10_000_i64)?
            .set_default("rpc.max_retries", 3_i64)?
            .set_default("rpc.rate_limit_per_sec", 10_i64)?
            .set_default("validation.require_token_images", false)?;

        builder = match path {
            Some(path) => {
                info!("Loading registry config: {:?}", path);
                builder.add_source(File::from(path).required(true))
            }
            None => builder.add_source(File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix("REGISTRY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        let mut registry: RegistryConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        registry.expand_env_vars()?;

        debug!("Registry config: {:?}", registry);
        Ok(registry)
    }

    /// Expand `${VAR}` references in RPC URLs (API keys stay out of the file)
    pub fn expand_env_vars(&mut self) -> Result<()> {
        for (name, chain) in &mut self.chains {
            if let Some(primary) = &chain.rpc_primary {
                let expanded = shellexpand::env(primary)
                    .with_context(|| format!("Failed to expand RPC URL for {}", name))?;
                chain.rpc_primary = Some(expanded.to_string());
            }

            if let Some(fallback) = &chain.rpc_fallback {
                let expanded = fallback
                    .iter()
                    .map(|url| shellexpand::env(url).map(|url| url.to_string()))
                    .collect::<Result<Vec<_>, _>>()
                    .with_context(|| format!("Failed to expand fallback RPC URL for {}", name))?;
                chain.rpc_fallback = Some(expanded);
            }
        }

        Ok(())
    }

    /// RPC endpoints for `chain`, falling back to the public default
    pub fn chain_endpoints(&self, chain: Chain) -> ChainEndpoints {
        let settings = self.chains.get(chain.id());

        ChainEndpoints {
            primary: settings
                .and_then(|s| s.rpc_primary.clone())
                .unwrap_or_else(|| chain.default_rpc_url().to_string()),
            fallback: settings
                .and_then(|s| s.rpc_fallback.clone())
                .unwrap_or_default(),
        }
    }
}
