//! Name translation seam.
//!
//! Display-name translation (Japanese item/vendor names → English) is a
//! swappable external capability. The core depends only on this narrow
//! text → text interface; network-backed providers live outside the core
//! and may fail or be unavailable.

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// No translation is available for the given text.
    #[error("no translation available for '{0}'")]
    Unavailable(String),
    /// The provider itself failed (network, quota, etc.).
    #[error("translation provider failed: {0}")]
    Provider(String),
}

/// Text → text translation. Implementations must be deterministic per call
/// site but are allowed to fail; callers fall back to the raw name.
pub trait Translator {
    fn translate(&self, text: &str) -> Result<String, TranslateError>;
}

/// Table-backed translator over the configured name maps. The default
/// in-core provider; never touches the network.
#[derive(Debug, Clone, Default)]
pub struct TableTranslator {
    entries: HashMap<String, String>,
}

impl TableTranslator {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn with_entry(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.entries.insert(from.into(), to.into());
        self
    }
}

impl Translator for TableTranslator {
    fn translate(&self, text: &str) -> Result<String, TranslateError> {
        self.entries
            .get(text.trim())
            .cloned()
            .ok_or_else(|| TranslateError::Unavailable(text.to_string()))
    }
}
