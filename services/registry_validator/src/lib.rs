//! # Registry Validator
//!
//! Validates the curated asset registry against on-chain metadata and against
//! its own naming conventions, and compiles the registry into TypeScript data
//! modules.
//!
//! ## Architecture
//!
//! ```text
//! TokenValidator (per chain, concurrent)
//!     → validate_token_list      structural checks
//!     → ChainValidation          per record, concurrent
//!         → rules                duplicate address, symbol, name, protocol, mint URL
//!         → metadata_checks      decimals, image
//!         → TokenMetadataSource  on-chain symbol / name / decimals
//!     → output_status            pass / fail per chain
//! ```
//!
//! Every data-quality problem becomes a diagnostic string; only configuration
//! problems (unknown chain file, unreadable protocols) abort a run.

pub mod compile;
pub mod driver;
pub mod error;
pub mod metadata_checks;
pub mod orchestrator;
pub mod protocols;
pub mod report;
pub mod rules;
pub mod schema;

pub use driver::TokenValidator;
pub use error::{RegistryError, Result};
pub use orchestrator::{validate_tokens, ChainValidation, ValidationOptions};
pub use protocols::ProtocolDirectory;
pub use report::{all_passed, output_status, ChainReport};
