//! Registry Validator CLI
//!
//! `validate` checks every chain's token registry and exits non-zero when any
//! chain has diagnostics. `compile` writes the TypeScript data modules.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

use registry_config::{Chain, RegistryConfig};
use registry_validator::compile::compile;
use registry_validator::{all_passed, RegistryError, TokenValidator};
use token_metadata_adapter::{TokenMetadataAdapter, TokenMetadataConfig, TokenMetadataSource};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "registry-validator")]
#[command(about = "Validate and compile the curated asset registry")]
struct Args {
    /// Configuration file path (defaults to config/registry.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate token records against on-chain metadata and naming rules
    Validate {
        /// Only validate these chains (repeatable); defaults to every data file
        #[arg(long = "chain")]
        chains: Vec<String>,

        /// Report tokens without an image
        #[arg(long)]
        require_images: bool,

        /// Print the reports as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Convert the registry JSON into TypeScript data modules
    Compile,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("registry_validator=info")),
        )
        .init();

    let args = Args::parse();
    let mut config = RegistryConfig::load(args.config.as_deref())?;

    match args.command {
        Command::Validate {
            chains,
            require_images,
            json,
        } => {
            config.validation.require_token_images |= require_images;
            run_validate(&config, &chains, json).await
        }
        Command::Compile => {
            let summary = compile(&config.paths.src_dir, &config.paths.dist_dir)?;
            info!("📦 Wrote {} modules to {:?}", summary.written.len(), config.paths.dist_dir);
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn run_validate(config: &RegistryConfig, requested: &[String], json: bool) -> Result<ExitCode> {
    let validator = TokenValidator::from_config(config)?;

    let chains = if requested.is_empty() {
        validator.discover_chains()?
    } else {
        requested
            .iter()
            .map(|chain| chain.parse::<Chain>().map_err(RegistryError::from))
            .collect::<Result<Vec<_>, _>>()?
    };

    info!("🔍 Validating tokens on {} chain(s)", chains.len());

    let reports = validator
        .validate_all(&chains, |chain| {
            let adapter = TokenMetadataAdapter::new(TokenMetadataConfig::for_chain(config, chain))?;
            Ok(Arc::new(adapter) as Arc<dyn TokenMetadataSource>)
        })
        .await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).context("Failed to serialize reports")?
        );
    }

    if all_passed(&reports) {
        info!("✅ All {} chain(s) passed", reports.len());
        Ok(ExitCode::SUCCESS)
    } else {
        let failed = reports.iter().filter(|report| !report.passed()).count();
        error!("❌ {} of {} chain(s) failed validation", failed, reports.len());
        Ok(ExitCode::FAILURE)
    }
}
