//! Chain driver
//!
//! Enumerates the per-chain token files and validates each chain
//! independently. Chains share only the read-only protocol directory.

use futures::future::join_all;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use registry_config::{Chain, RegistryConfig};
use token_metadata_adapter::TokenMetadataSource;
use types::Diagnostics;

use crate::error::{RegistryError, Result};
use crate::orchestrator::{validate_tokens, ValidationOptions};
use crate::protocols::ProtocolDirectory;
use crate::report::{output_status, ChainReport};
use crate::schema::validate_token_list;

/// Validates the token registry of every chain
pub struct TokenValidator {
    directory: Arc<ProtocolDirectory>,
    tokens_dir: PathBuf,
    options: ValidationOptions,
}

impl TokenValidator {
    pub fn new(directory: Arc<ProtocolDirectory>, tokens_dir: PathBuf, options: ValidationOptions) -> Self {
        Self {
            directory,
            tokens_dir,
            options,
        }
    }

    /// Load the protocol directory and paths from configuration
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        let directory = ProtocolDirectory::load(&config.paths.protocols_file)?;

        Ok(Self::new(
            Arc::new(directory),
            config.paths.tokens_dir.clone(),
            ValidationOptions {
                require_image: config.validation.require_token_images,
            },
        ))
    }

    pub fn chain_file(&self, chain: Chain) -> PathBuf {
        self.tokens_dir.join(format!("{}.json", chain.id()))
    }

    /// Chains with a data file, sorted
    ///
    /// Fails on the first file whose stem is not a supported chain.
    pub fn discover_chains(&self) -> Result<Vec<Chain>> {
        let entries = std::fs::read_dir(&self.tokens_dir).map_err(|source| RegistryError::Io {
            path: self.tokens_dir.clone(),
            source,
        })?;

        let mut chains = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|source| RegistryError::Io {
                    path: self.tokens_dir.clone(),
                    source,
                })?
                .path();

            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            let stem = path.file_stem().and_then(|stem| stem.to_str()).unwrap_or_default();
            chains.push(stem.parse::<Chain>()?);
        }

        chains.sort();
        Ok(chains)
    }

    /// Validate one chain's token file and report its status
    pub async fn validate_tokens_by_chain(
        &self,
        chain: Chain,
        source: &dyn TokenMetadataSource,
    ) -> ChainReport {
        let diagnostics = Diagnostics::new();
        let path = self.chain_file(chain);

        match read_document(&path).await {
            Ok(document) => {
                let tokens = validate_token_list(&document, &diagnostics);
                info!("Validating {} tokens on {}", tokens.len(), chain);

                validate_tokens(&tokens, &self.directory, source, self.options, &diagnostics).await;
            }
            Err(e) => {
                warn!("Skipping rule evaluation for {}: {}", chain, e);
                diagnostics.push(e.to_string());
            }
        }

        let report = ChainReport {
            chain,
            asset: "Token",
            diagnostics: diagnostics.into_vec(),
        };
        output_status(&report);
        report
    }

    /// Validate `chains` concurrently, each with its own metadata source
    ///
    /// Every source is built before any validation starts, so a configuration
    /// error aborts the run without partial output.
    pub async fn validate_all<F>(&self, chains: &[Chain], make_source: F) -> Result<Vec<ChainReport>>
    where
        F: Fn(Chain) -> Result<Arc<dyn TokenMetadataSource>>,
    {
        let sources = chains
            .iter()
            .map(|chain| make_source(*chain).map(|source| (*chain, source)))
            .collect::<Result<Vec<_>>>()?;

        let reports = join_all(
            sources
                .iter()
                .map(|(chain, source)| self.validate_tokens_by_chain(*chain, source.as_ref())),
        )
        .await;

        Ok(reports)
    }
}

async fn read_document(path: &Path) -> Result<Value> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&content).map_err(|source| RegistryError::Json {
        path: path.to_path_buf(),
        source,
    })
}
