//! EVM address helpers
//!
//! Registry files carry addresses as checksummed or lowercase hex strings.
//! Comparisons are case-insensitive, mirroring how the chain itself treats them.

use thiserror::Error;

/// Errors produced while parsing a hex address string
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Address does not start with `0x`
    #[error("address {0} is missing the 0x prefix")]
    MissingPrefix(String),

    /// Address has the wrong number of hex digits
    #[error("address {address} has {len} hex digits, expected 40")]
    InvalidLength { address: String, len: usize },

    /// Address contains non-hex characters
    #[error("address {0} is not valid hex")]
    InvalidHex(String),
}

/// Parse a `0x`-prefixed hex address into its 20 raw bytes
pub fn parse_address(address: &str) -> Result<[u8; 20], AddressError> {
    let digits = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| AddressError::MissingPrefix(address.to_string()))?;

    if digits.len() != 40 {
        return Err(AddressError::InvalidLength {
            address: address.to_string(),
            len: digits.len(),
        });
    }

    let bytes = hex::decode(digits).map_err(|_| AddressError::InvalidHex(address.to_string()))?;
    let mut raw = [0u8; 20];
    raw.copy_from_slice(&bytes);
    Ok(raw)
}

/// True when `address` is a well-formed `0x` + 40 hex digit string
pub fn is_valid_address(address: &str) -> bool {
    parse_address(address).is_ok()
}

/// Case-insensitive address equality
pub fn addresses_equal(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Lowercased form used as the key for duplicate detection
pub fn normalize_address(address: &str) -> String {
    address.to_ascii_lowercase()
}
