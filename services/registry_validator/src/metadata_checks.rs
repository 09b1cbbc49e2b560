//! Decimals and image checks

use url::Url;

use types::{Diagnostics, TokenRecord};

/// Image formats the registry front-ends can render
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "svg", "webp"];

/// Declared decimals must match the contract
///
/// Records without declared decimals are reported by the list check instead.
pub fn validate_decimals(token: &TokenRecord, on_chain_decimals: u8, diagnostics: &Diagnostics) {
    let Some(declared) = token.decimals else {
        return;
    };

    if declared != on_chain_decimals {
        diagnostics.push(format!(
            "{} decimals {} do not match on-chain decimals {}",
            token.symbol, declared, on_chain_decimals
        ));
    }
}

/// Images must be absolute https URLs in a supported format
///
/// A missing image is only reported when `required` is set.
pub fn validate_token_image(token: &TokenRecord, required: bool, diagnostics: &Diagnostics) {
    let Some(image) = token.image.as_deref() else {
        if required {
            diagnostics.push(format!("{} is missing an image", token.symbol));
        }
        return;
    };

    let url = match Url::parse(image) {
        Ok(url) if url.scheme() == "https" => url,
        _ => {
            diagnostics.push(format!("{} image must be an https URL: {}", token.symbol, image));
            return;
        }
    };

    let extension = url
        .path()
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    let supported = extension
        .as_deref()
        .map(|ext| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext))
        .unwrap_or(false);

    if !supported {
        diagnostics.push(format!("{} image has an unsupported format: {}", token.symbol, image));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(image: Option<&str>) -> TokenRecord {
        TokenRecord {
            address: "0x6969696969696969696969696969696969696969".to_string(),
            chain_id: None,
            decimals: Some(18),
            description: None,
            image: image.map(str::to_string),
            mint_url: None,
            name: "Wrapped Bera".to_string(),
            protocol: None,
            symbol: "WBERA".to_string(),
            tags: None,
            underlying_tokens: None,
        }
    }

    #[test]
    fn test_decimals_mismatch() {
        let diagnostics = Diagnostics::new();

        validate_decimals(&token(None), 18, &diagnostics);
        assert!(diagnostics.is_empty());

        let undeclared = TokenRecord {
            decimals: None,
            ..token(None)
        };
        validate_decimals(&undeclared, 6, &diagnostics);
        assert!(diagnostics.is_empty());

        validate_decimals(&token(None), 6, &diagnostics);
        assert_eq!(
            diagnostics.into_vec(),
            vec!["WBERA decimals 18 do not match on-chain decimals 6"]
        );
    }

    #[test]
    fn test_missing_image_only_reported_when_required() {
        let diagnostics = Diagnostics::new();

        validate_token_image(&token(None), false, &diagnostics);
        assert!(diagnostics.is_empty());

        validate_token_image(&token(None), true, &diagnostics);
        assert_eq!(diagnostics.into_vec(), vec!["WBERA is missing an image"]);
    }

    #[test]
    fn test_image_format() {
        let diagnostics = Diagnostics::new();

        validate_token_image(&token(Some("https://res.cloudinary.com/wbera.png")), true, &diagnostics);
        validate_token_image(&token(Some("https://assets.example.org/WBERA.SVG?v=2")), true, &diagnostics);
        assert!(diagnostics.is_empty());

        validate_token_image(&token(Some("http://assets.example.org/wbera.png")), true, &diagnostics);
        validate_token_image(&token(Some("wbera.png")), true, &diagnostics);
        validate_token_image(&token(Some("https://assets.example.org/wbera.gif")), true, &diagnostics);
        validate_token_image(&token(Some("https://assets.example.org/wbera")), true, &diagnostics);

        assert_eq!(
            diagnostics.into_vec(),
            vec![
                "WBERA image must be an https URL: http://assets.example.org/wbera.png",
                "WBERA image must be an https URL: wbera.png",
                "WBERA image has an unsupported format: https://assets.example.org/wbera.gif",
                "WBERA image has an unsupported format: https://assets.example.org/wbera",
            ]
        );
    }
}
