//! # Registry Types
//!
//! Shared data model for the asset registry tooling.
//!
//! - **Token records**: one entry per curated asset, either simple or composite
//!   (backed by underlying records of the same chain)
//! - **Protocols**: issuing protocols and their naming prefixes
//! - **Diagnostics**: the append-only, per-chain list of validation failures
//! - **Addresses**: case-insensitive hex address helpers
//!
//! ```rust
//! use types::{TokenKind, TokenRecord};
//!
//! let tokens: Vec<TokenRecord> = serde_json::from_str("[]").unwrap();
//! for token in &tokens {
//!     if let TokenKind::Composite(underlying) = token.kind() {
//!         println!("{} wraps {} tokens", token.symbol, underlying.len());
//!     }
//! }
//! ```

pub mod address;
pub mod diagnostics;
pub mod protocols;
pub mod token;

pub use address::{addresses_equal, is_valid_address, normalize_address, parse_address, AddressError};
pub use diagnostics::Diagnostics;
pub use protocols::{Protocol, ProtocolsList};
pub use token::{TokenKind, TokenRecord};
