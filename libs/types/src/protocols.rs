//! Issuing protocols referenced by token records

use serde::{Deserialize, Serialize};

/// A known issuing protocol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Protocol {
    /// Stable key referenced by `TokenRecord::protocol`
    pub id: String,

    /// Prepended to the joined underlying symbols to name composite assets
    #[serde(default)]
    pub prefix: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Contents of `protocols.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProtocolsList {
    pub protocols: Vec<Protocol>,
}
