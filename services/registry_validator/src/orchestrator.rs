//! Token validation orchestrator
//!
//! Runs every check for every record of one chain. Record validations are
//! launched together and polled on the caller's task; a record's three
//! on-chain lookups run concurrently with each other.

use futures::future::join_all;
use parking_lot::Mutex;
use std::collections::HashSet;
use tracing::debug;

use token_metadata_adapter::{MetadataError, MetadataField, TokenMetadataSource};
use types::{Diagnostics, TokenRecord};

use crate::metadata_checks::{validate_decimals, validate_token_image};
use crate::protocols::ProtocolDirectory;
use crate::rules::{
    check_duplicate_address, validate_mint_url, validate_name, validate_protocol, validate_symbol,
};

/// Switches applied to every record
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationOptions {
    /// Report records without an image
    pub require_image: bool,
}

/// Shared state of one chain's validation run
pub struct ChainValidation<'a> {
    tokens: &'a [TokenRecord],
    directory: &'a ProtocolDirectory,
    source: &'a dyn TokenMetadataSource,
    options: ValidationOptions,
    diagnostics: &'a Diagnostics,
    /// Lowercased addresses seen so far, fresh per run
    addresses: Mutex<HashSet<String>>,
}

impl<'a> ChainValidation<'a> {
    pub fn new(
        tokens: &'a [TokenRecord],
        directory: &'a ProtocolDirectory,
        source: &'a dyn TokenMetadataSource,
        options: ValidationOptions,
        diagnostics: &'a Diagnostics,
    ) -> Self {
        Self {
            tokens,
            directory,
            source,
            options,
            diagnostics,
            addresses: Mutex::new(HashSet::with_capacity(tokens.len())),
        }
    }

    /// Validate every record concurrently
    pub async fn run(&self) {
        join_all(self.tokens.iter().map(|token| self.validate_token_details(token))).await;
    }

    /// Run all checks for one record
    pub async fn validate_token_details(&self, token: &TokenRecord) {
        debug!("Validating {} ({})", token.symbol, token.address);

        // Check-and-insert completes before the first await of this record
        check_duplicate_address(token, &mut self.addresses.lock(), self.diagnostics);

        let (decimals, symbol, name) = tokio::join!(
            self.source.token_decimals(&token.address),
            self.source.token_symbol(&token.address),
            self.source.token_name(&token.address),
        );

        match decimals {
            Ok(on_chain_decimals) => validate_decimals(token, on_chain_decimals, self.diagnostics),
            Err(e) => self.report_lookup_failure(token, MetadataField::Decimals, &e),
        }
        validate_token_image(token, self.options.require_image, self.diagnostics);
        validate_mint_url(token, self.diagnostics);
        validate_protocol(token, self.directory, self.diagnostics);

        let on_chain_symbol = self.resolved(token, MetadataField::Symbol, symbol);
        let on_chain_name = self.resolved(token, MetadataField::Name, name);

        validate_symbol(token, &on_chain_symbol, self.diagnostics);
        validate_name(
            token,
            &on_chain_name,
            &on_chain_symbol,
            self.tokens,
            self.directory,
            self.diagnostics,
        );
    }

    /// Unwrap a lookup, reporting failures and substituting an empty value
    fn resolved(
        &self,
        token: &TokenRecord,
        field: MetadataField,
        lookup: Result<String, MetadataError>,
    ) -> String {
        lookup.unwrap_or_else(|e| {
            self.report_lookup_failure(token, field, &e);
            String::new()
        })
    }

    fn report_lookup_failure(&self, token: &TokenRecord, field: MetadataField, error: &MetadataError) {
        self.diagnostics.push(format!(
            "Failed to fetch {} for {} ({}): {}",
            field, token.symbol, token.address, error
        ));
    }
}

/// Validate one chain's full record set with a fresh duplicate-address set
pub async fn validate_tokens(
    tokens: &[TokenRecord],
    directory: &ProtocolDirectory,
    source: &dyn TokenMetadataSource,
    options: ValidationOptions,
    diagnostics: &Diagnostics,
) {
    ChainValidation::new(tokens, directory, source, options, diagnostics)
        .run()
        .await;
}
