//! Token Metadata Adapter
//!
//! Provides a clean interface for reading ERC20 metadata (symbol, name,
//! decimals) from deployed contracts. This adapter handles all RPC calls of the
//! registry validator, maintaining the boundary where only adapters talk to
//! external systems.
//!
//! Features:
//! - Async metadata reads via web3 HTTP transports
//! - Fallback endpoints, per-call timeouts, retries with exponential backoff
//! - Rate limiting per chain
//! - `bytes32` symbol/name decoding for legacy tokens
//! - [`TokenMetadataSource`] trait with an in-memory implementation for tests

pub mod adapter;
pub mod config;
pub mod error;
pub mod rpc_client;
pub mod source;

pub use adapter::{Metrics, TokenMetadataAdapter};
pub use config::TokenMetadataConfig;
pub use error::{MetadataError, MetadataField, Result};
pub use source::{InMemoryMetadataSource, OnChainMetadata, TokenMetadataSource};
