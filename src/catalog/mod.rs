pub mod loader;

pub use loader::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error reading catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parsing failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog contains no schemes")]
    Empty,

    #[error("Duplicate topic key: {0}")]
    DuplicateKey(String),

    #[error("Scheme '{key}' is invalid: {reason}")]
    InvalidScheme { key: String, reason: String },
}

/// One government scheme entry: display content plus the trigger
/// substrings that route a query to it.
///
/// The entry order in the catalog file is the matching priority —
/// adding a scheme means adding a record here, nothing else changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeRecord {
    pub key: String,
    pub triggers: Vec<String>,
    pub title: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub eligibility: Vec<String>,
    pub application: String,
}

/// Content shown when no scheme matches a query. The scheme list itself
/// is derived from the catalog titles at format time, so it can never
/// drift out of sync with the records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralFallback {
    pub title: String,
    pub description: String,
    pub note: String,
}

/// The full scheme knowledge base. Loaded once at startup, read-only
/// afterwards; safe to share across any number of concurrent requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeCatalog {
    pub schemes: Vec<SchemeRecord>,
    pub general: GeneralFallback,
}

impl SchemeCatalog {
    /// Look up a scheme by its topic key.
    pub fn get(&self, key: &str) -> Option<&SchemeRecord> {
        self.schemes.iter().find(|s| s.key == key)
    }

    /// All scheme titles in declared order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.schemes.iter().map(|s| s.title.as_str())
    }
}
