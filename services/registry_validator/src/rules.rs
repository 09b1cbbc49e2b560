//! Record consistency rules
//!
//! One function per concern. Every rule appends to the chain's
//! [`Diagnostics`] and never fails.

use std::collections::HashSet;

use types::{addresses_equal, normalize_address, Diagnostics, TokenKind, TokenRecord};

use crate::protocols::ProtocolDirectory;

/// Symbol used in a derived name when an underlying token is not in the registry
pub const MISSING_SYMBOL_PLACEHOLDER: &str = "FIX_MISSING_SYMBOL";

/// Report `token` if its address was already seen on this chain
///
/// The lowercased address is inserted afterwards in every case, so the first
/// occurrence registers and every later one reports.
pub fn check_duplicate_address(
    token: &TokenRecord,
    addresses: &mut HashSet<String>,
    diagnostics: &Diagnostics,
) {
    let lowercased = normalize_address(&token.address);

    if addresses.contains(&lowercased) {
        diagnostics.push(format!(
            "Duplicate token address found: {}. Token addresses must be unique.",
            token.address
        ));
    }
    addresses.insert(lowercased);
}

/// Declared symbol must equal the on-chain symbol exactly
pub fn validate_symbol(token: &TokenRecord, on_chain_symbol: &str, diagnostics: &Diagnostics) {
    if token.symbol != on_chain_symbol {
        diagnostics.push(format!(
            "{}’s symbol does not match the on-chain symbol {}",
            token.symbol, on_chain_symbol
        ));
    }
}

/// Check the declared name against on-chain metadata and, for composite
/// assets, the `<prefix><SYMBOL-SYMBOL>` naming convention
pub fn validate_name(
    token: &TokenRecord,
    on_chain_name: &str,
    on_chain_symbol: &str,
    tokens: &[TokenRecord],
    directory: &ProtocolDirectory,
    diagnostics: &Diagnostics,
) {
    // Aliasing the on-chain name or symbol is always accepted (e.g. bWBERA)
    let matches_on_chain = token.name == on_chain_name || token.name == on_chain_symbol;

    match token.kind() {
        TokenKind::Composite(underlying) => {
            let derived_name = derive_name(token, underlying, tokens, diagnostics);

            if token.name == derived_name || matches_on_chain {
                return;
            }

            // Composites without a protocol have no naming convention to enforce
            let Some(protocol_id) = token.protocol.as_deref() else {
                return;
            };

            let prefix = directory
                .find(protocol_id)
                .map(|protocol| protocol.prefix.as_str())
                .unwrap_or_default();
            let expected_name = format!("{}{}", prefix, derived_name);

            if token.name != expected_name {
                diagnostics.push(format!(
                    "{} does not match {} or {}",
                    token.name, expected_name, derived_name
                ));
            }
        }
        TokenKind::Simple => {
            if !matches_on_chain {
                diagnostics.push(format!("{} does not match {}", token.name, on_chain_name));
            }
        }
    }
}

/// Join the underlying symbols with `-`, reporting unresolved addresses
fn derive_name(
    token: &TokenRecord,
    underlying: &[String],
    tokens: &[TokenRecord],
    diagnostics: &Diagnostics,
) -> String {
    underlying
        .iter()
        .map(|address| {
            match tokens
                .iter()
                .find(|candidate| addresses_equal(&candidate.address, address))
            {
                Some(found) if !found.symbol.is_empty() => found.symbol.as_str(),
                Some(_) => MISSING_SYMBOL_PLACEHOLDER,
                None => {
                    diagnostics.push(format!(
                        "{} does not have an underlying token for {}",
                        token.name, address
                    ));
                    MISSING_SYMBOL_PLACEHOLDER
                }
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// A declared protocol must exist in the directory
pub fn validate_protocol(token: &TokenRecord, directory: &ProtocolDirectory, diagnostics: &Diagnostics) {
    let Some(protocol_id) = token.protocol.as_deref() else {
        return;
    };

    if directory.find(protocol_id).is_none() {
        diagnostics.push(format!(
            "{} does not have a protocol (token validation)",
            token.symbol
        ));
    }
}

const BEX_POOLS_URL: &str = "https://hub.berachain.com/pools/";
const DOLOMITE_BALANCES_URL: &str = "https://app.dolomite.io/balances";

/// Mint URL conventions of the protocols that have one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MintUrlConvention {
    /// Any URL under the prefix
    StartsWith(&'static str),
    /// Any URL starting with the protocol page; reported as the page itself
    Page(&'static str),
    /// Exactly this URL
    Exact(String),
}

impl MintUrlConvention {
    /// Convention for `token`, if its protocol defines one
    pub fn for_token(token: &TokenRecord) -> Option<Self> {
        match token.protocol.as_deref()? {
            "bex" => Some(MintUrlConvention::StartsWith(BEX_POOLS_URL)),
            "dolomite" => Some(MintUrlConvention::Page(DOLOMITE_BALANCES_URL)),
            "kodiak" => Some(MintUrlConvention::Exact(format!(
                "https://app.kodiak.finance/#/liquidity/pools/{}?chain=berachain_mainnet",
                token.address
            ))),
            _ => None,
        }
    }

    pub fn accepts(&self, mint_url: &str) -> bool {
        match self {
            MintUrlConvention::StartsWith(prefix) | MintUrlConvention::Page(prefix) => {
                mint_url.starts_with(prefix)
            }
            MintUrlConvention::Exact(expected) => mint_url == expected,
        }
    }

    fn expectation(&self) -> String {
        match self {
            MintUrlConvention::StartsWith(prefix) => format!("start with {}", prefix),
            MintUrlConvention::Page(url) => format!("be {}", url),
            MintUrlConvention::Exact(url) => format!("be {}", url),
        }
    }
}

/// Non-empty mint URLs must follow their protocol's convention
pub fn validate_mint_url(token: &TokenRecord, diagnostics: &Diagnostics) {
    let Some(mint_url) = token.mint_url() else {
        return;
    };
    let Some(convention) = MintUrlConvention::for_token(token) else {
        return;
    };

    if !convention.accepts(mint_url) {
        diagnostics.push(format!(
            "{} mintUrl is incorrect. It should {}",
            token.symbol,
            convention.expectation()
        ));
    }
}
