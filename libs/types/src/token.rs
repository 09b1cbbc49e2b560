//! Token records as stored in the curated registry
//!
//! One `src/tokens/<chain>.json` file holds a `tokens` array of these records.
//! Records are loaded once per validation run and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// One asset entry in a chain's registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    /// Contract address, unique per chain (case-insensitive)
    pub address: String,

    /// Chain id the record was curated for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,

    /// Declared ERC20 decimals; a missing value is a structural error, not a parse failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Logo URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Deposit / mint page for derivative assets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mint_url: Option<String>,

    pub name: String,

    /// Id of the issuing protocol in `protocols.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    pub symbol: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Addresses of the records backing a composite asset, in display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underlying_tokens: Option<Vec<String>>,
}

/// Shape of a record, decided by the presence of `underlyingTokens`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// Plain token, named after its on-chain metadata
    Simple,
    /// Wrapped / receipt / LP token backed by other records
    Composite(&'a [String]),
}

impl TokenRecord {
    /// Classify the record for name derivation
    pub fn kind(&self) -> TokenKind<'_> {
        match &self.underlying_tokens {
            Some(underlying) => TokenKind::Composite(underlying),
            None => TokenKind::Simple,
        }
    }

    /// Mint URL, treating an empty string as absent
    pub fn mint_url(&self) -> Option<&str> {
        self.mint_url.as_deref().filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_composite_record() {
        let json = r#"{
            "address": "0x1111111111111111111111111111111111111111",
            "decimals": 18,
            "name": "kdkWBERA-HONEY",
            "symbol": "KODIAK-1",
            "protocol": "kodiak",
            "mintUrl": "https://app.kodiak.finance/",
            "underlyingTokens": [
                "0x2222222222222222222222222222222222222222",
                "0x3333333333333333333333333333333333333333"
            ]
        }"#;

        let record: TokenRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.protocol.as_deref(), Some("kodiak"));
        assert_eq!(record.mint_url(), Some("https://app.kodiak.finance/"));
        match record.kind() {
            TokenKind::Composite(underlying) => assert_eq!(underlying.len(), 2),
            TokenKind::Simple => panic!("expected composite record"),
        }
    }

    #[test]
    fn test_simple_record_and_empty_mint_url() {
        let json = r#"{
            "address": "0x6969696969696969696969696969696969696969",
            "decimals": 18,
            "name": "Wrapped Bera",
            "symbol": "WBERA",
            "mintUrl": ""
        }"#;

        let record: TokenRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind(), TokenKind::Simple);
        assert_eq!(record.decimals, Some(18));
        assert_eq!(record.mint_url(), None);
        assert!(record.image.is_none());
    }
}
