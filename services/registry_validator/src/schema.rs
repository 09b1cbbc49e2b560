//! Structural validation of a chain's token list
//!
//! Works on the raw JSON so one malformed entry does not hide the rest. Every
//! entry with a string address reaches the consistency rules, read leniently
//! when it does not deserialize, so its address still counts for duplicates
//! and underlying-token lookups.

use serde_json::Value;

use types::{is_valid_address, Diagnostics, TokenRecord};

/// Largest decimals value accepted for an ERC20 token
pub const MAX_DECIMALS: u8 = 36;

/// Check the document shape and every entry, returning the parsed records
pub fn validate_token_list(document: &Value, diagnostics: &Diagnostics) -> Vec<TokenRecord> {
    let Some(entries) = document.get("tokens").and_then(Value::as_array) else {
        diagnostics.push("token list must contain a \"tokens\" array");
        return Vec::new();
    };

    let mut tokens = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        match serde_json::from_value::<TokenRecord>(entry.clone()) {
            Ok(token) => {
                validate_entry(index, &token, diagnostics);
                tokens.push(token);
            }
            Err(e) => {
                diagnostics.push(format!("tokens[{}] is malformed: {}", index, e));
                tokens.extend(lenient_record(entry));
            }
        }
    }

    tokens
}

/// Best-effort record from an entry that failed to deserialize
///
/// Wrongly typed fields read as absent. Entries without a string address
/// are dropped.
fn lenient_record(entry: &Value) -> Option<TokenRecord> {
    let text = |key: &str| entry.get(key).and_then(Value::as_str).map(str::to_string);
    let texts = |key: &str| {
        entry.get(key).and_then(Value::as_array).map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
    };

    Some(TokenRecord {
        address: text("address")?,
        chain_id: entry.get("chainId").and_then(Value::as_u64),
        decimals: entry
            .get("decimals")
            .and_then(Value::as_u64)
            .and_then(|decimals| u8::try_from(decimals).ok()),
        description: text("description"),
        image: text("image"),
        mint_url: text("mintUrl"),
        name: text("name").unwrap_or_default(),
        protocol: text("protocol"),
        symbol: text("symbol").unwrap_or_default(),
        tags: texts("tags"),
        underlying_tokens: texts("underlyingTokens"),
    })
}

fn validate_entry(index: usize, token: &TokenRecord, diagnostics: &Diagnostics) {
    if !is_valid_address(&token.address) {
        diagnostics.push(format!(
            "tokens[{}] ({}) has an invalid address {}",
            index, token.symbol, token.address
        ));
    }

    if token.symbol.trim().is_empty() {
        diagnostics.push(format!("tokens[{}] ({}) has an empty symbol", index, token.address));
    }

    if token.name.trim().is_empty() {
        diagnostics.push(format!("tokens[{}] ({}) has an empty name", index, token.address));
    }

    match token.decimals {
        None => diagnostics.push(format!("tokens[{}] ({}) is missing decimals", index, token.symbol)),
        Some(decimals) if decimals > MAX_DECIMALS => diagnostics.push(format!(
            "tokens[{}] ({}) has decimals {} above the maximum of {}",
            index, token.symbol, decimals, MAX_DECIMALS
        )),
        Some(_) => {}
    }

    if let Some(underlying) = &token.underlying_tokens {
        if underlying.is_empty() {
            diagnostics.push(format!(
                "tokens[{}] ({}) has an empty underlyingTokens list",
                index, token.symbol
            ));
        }

        for address in underlying.iter().filter(|address| !is_valid_address(address)) {
            diagnostics.push(format!(
                "tokens[{}] ({}) has an invalid underlying token address {}",
                index, token.symbol, address
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_well_formed_list() {
        let diagnostics = Diagnostics::new();
        let document = json!({
            "tokens": [
                {
                    "address": "0x6969696969696969696969696969696969696969",
                    "decimals": 18,
                    "name": "Wrapped Bera",
                    "symbol": "WBERA"
                }
            ]
        });

        let tokens = validate_token_list(&document, &diagnostics);
        assert_eq!(tokens.len(), 1);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_missing_tokens_array() {
        let diagnostics = Diagnostics::new();

        let tokens = validate_token_list(&json!({ "vaults": [] }), &diagnostics);
        assert!(tokens.is_empty());
        assert_eq!(diagnostics.into_vec(), vec!["token list must contain a \"tokens\" array"]);
    }

    #[test]
    fn test_malformed_entry_is_kept_leniently() {
        let diagnostics = Diagnostics::new();
        let document = json!({
            "tokens": [
                {
                    "address": "0x6969696969696969696969696969696969696969",
                    "name": "No symbol",
                    "decimals": "18",
                    "underlyingTokens": ["0xFCBD14DC51f0A4d49d5E53C2E0950e0bC26d0Dce", 7]
                },
                { "address": "0xFCBD14DC51f0A4d49d5E53C2E0950e0bC26d0Dce", "decimals": 18, "name": "Honey", "symbol": "HONEY" },
                { "name": "No address", "symbol": "NOADDR", "decimals": 18 },
                "not an object"
            ]
        });

        let tokens = validate_token_list(&document, &diagnostics);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].address, "0x6969696969696969696969696969696969696969");
        assert_eq!(tokens[0].symbol, "");
        assert_eq!(tokens[0].decimals, None);
        assert_eq!(
            tokens[0].underlying_tokens,
            Some(vec!["0xFCBD14DC51f0A4d49d5E53C2E0950e0bC26d0Dce".to_string()])
        );
        assert_eq!(tokens[1].symbol, "HONEY");

        let entries = diagnostics.into_vec();
        assert_eq!(entries.len(), 3, "{:#?}", entries);
        assert!(entries[0].starts_with("tokens[0] is malformed:"), "{}", entries[0]);
        assert!(entries[1].starts_with("tokens[2] is malformed:"), "{}", entries[1]);
        assert!(entries[2].starts_with("tokens[3] is malformed:"), "{}", entries[2]);
    }

    #[test]
    fn test_missing_decimals_keeps_record() {
        let diagnostics = Diagnostics::new();
        let document = json!({
            "tokens": [
                { "address": "0xFCBD14DC51f0A4d49d5E53C2E0950e0bC26d0Dce", "name": "Honey", "symbol": "HONEY" }
            ]
        });

        let tokens = validate_token_list(&document, &diagnostics);
        assert_eq!(tokens.len(), 1);
        assert_eq!(diagnostics.into_vec(), vec!["tokens[0] (HONEY) is missing decimals"]);
    }

    #[test]
    fn test_field_checks_keep_record() {
        let diagnostics = Diagnostics::new();
        let document = json!({
            "tokens": [
                {
                    "address": "0x1234",
                    "decimals": 40,
                    "name": " ",
                    "symbol": "BAD",
                    "underlyingTokens": ["0x6969696969696969696969696969696969696969", "honey"]
                },
                {
                    "address": "0x1111111111111111111111111111111111111111",
                    "decimals": 18,
                    "name": "Empty LP",
                    "symbol": "LP",
                    "underlyingTokens": []
                }
            ]
        });

        let tokens = validate_token_list(&document, &diagnostics);
        assert_eq!(tokens.len(), 2);
        assert_eq!(
            diagnostics.into_vec(),
            vec![
                "tokens[0] (BAD) has an invalid address 0x1234",
                "tokens[0] (0x1234) has an empty name",
                "tokens[0] (BAD) has decimals 40 above the maximum of 36",
                "tokens[0] (BAD) has an invalid underlying token address honey",
                "tokens[1] (LP) has an empty underlyingTokens list",
            ]
        );
    }
}
