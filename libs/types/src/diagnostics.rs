//! Per-chain diagnostics collection
//!
//! Record validations for one chain run concurrently and all append here.
//! Appends never deduplicate; ordering across records is unspecified.

use parking_lot::Mutex;

/// Append-only list of human-readable validation failures
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Mutex<Vec<String>>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one diagnostic
    pub fn push(&self, message: impl Into<String>) {
        self.entries.lock().push(message.into());
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.entries.into_inner()
    }
}
