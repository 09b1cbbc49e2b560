//! Error types for on-chain metadata lookups

use thiserror::Error;

/// Result type alias for metadata lookups
pub type Result<T> = std::result::Result<T, MetadataError>;

/// ERC20 metadata fields read from a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataField {
    Symbol,
    Name,
    Decimals,
}

impl MetadataField {
    /// Contract method returning the field
    pub fn method(&self) -> &'static str {
        match self {
            MetadataField::Symbol => "symbol",
            MetadataField::Name => "name",
            MetadataField::Decimals => "decimals",
        }
    }
}

impl std::fmt::Display for MetadataField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.method())
    }
}

/// Main error type for metadata lookups
#[derive(Debug, Error)]
pub enum MetadataError {
    /// Address string could not be parsed
    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] types::AddressError),

    /// HTTP transport could not be created
    #[error("RPC transport error: {0}")]
    Transport(#[from] web3::Error),

    /// Embedded ABI failed to load
    #[error("Contract ABI error: {0}")]
    Abi(#[from] web3::ethabi::Error),

    /// Contract call failed or returned undecodable output
    #[error("Contract call {field} failed: {source}")]
    Call {
        field: MetadataField,
        #[source]
        source: web3::contract::Error,
    },

    /// Contract call exceeded the configured timeout
    #[error("Contract call {field} timed out after {timeout_ms}ms")]
    Timeout { field: MetadataField, timeout_ms: u64 },

    /// Contract does not implement the method (or the call reverted)
    #[error("Contract call {field} reverted for {address}")]
    Reverted { field: MetadataField, address: String },

    /// Every configured endpoint failed
    #[error("All RPC endpoints failed to return {field} for {address}")]
    AllEndpointsFailed { field: MetadataField, address: String },

    /// No usable RPC endpoint
    #[error("No valid RPC endpoints configured")]
    NoEndpoints,
}

impl MetadataError {
    /// Check if this error may succeed on another attempt
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            MetadataError::Call { .. }
                | MetadataError::Timeout { .. }
                | MetadataError::AllEndpointsFailed { .. }
        )
    }
}
