//! Protocol directory
//!
//! Immutable id → protocol lookup, loaded once and shared by every chain.

use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

use types::{Protocol, ProtocolsList};

use crate::error::{RegistryError, Result};

#[derive(Debug, Clone, Default)]
pub struct ProtocolDirectory {
    protocols: HashMap<String, Protocol>,
}

impl ProtocolDirectory {
    /// Build from a parsed list; the first entry wins for a repeated id
    pub fn from_list(list: ProtocolsList) -> Self {
        let mut protocols = HashMap::with_capacity(list.protocols.len());

        for protocol in list.protocols {
            if protocols.contains_key(&protocol.id) {
                warn!("Ignoring repeated protocol id {}", protocol.id);
                continue;
            }
            protocols.insert(protocol.id.clone(), protocol);
        }

        Self { protocols }
    }

    /// Load `protocols.json`
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let list: ProtocolsList =
            serde_json::from_str(&content).map_err(|source| RegistryError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        let directory = Self::from_list(list);
        info!("Loaded {} protocols from {:?}", directory.len(), path);
        Ok(directory)
    }

    pub fn find(&self, id: &str) -> Option<&Protocol> {
        self.protocols.get(id)
    }

    pub fn len(&self) -> usize {
        self.protocols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.protocols.is_empty()
    }
}
