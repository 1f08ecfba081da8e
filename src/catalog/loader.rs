//! Catalog loading and validation.
//!
//! The shipped scheme table lives in `data/schemes.json` and is embedded
//! into the binary. Operators can point `CIVIC_AI_CATALOG` at an external
//! file to add or amend schemes without recompiling.

use std::collections::HashSet;
use std::path::Path;

use super::{CatalogError, SchemeCatalog};
use crate::config;

/// Default catalog shipped with the crate.
const EMBEDDED_CATALOG: &str = include_str!("../../data/schemes.json");

/// Load the scheme catalog: the `CIVIC_AI_CATALOG` file when set,
/// the embedded default otherwise.
pub fn load() -> Result<SchemeCatalog, CatalogError> {
    match config::catalog_path() {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading scheme catalog from file");
            load_from_path(&path)
        }
        None => load_default(),
    }
}

/// Load the embedded default catalog.
pub fn load_default() -> Result<SchemeCatalog, CatalogError> {
    parse(EMBEDDED_CATALOG)
}

/// Load a catalog from an external JSON file.
pub fn load_from_path(path: &Path) -> Result<SchemeCatalog, CatalogError> {
    let raw = std::fs::read_to_string(path)?;
    parse(&raw)
}

fn parse(raw: &str) -> Result<SchemeCatalog, CatalogError> {
    let mut catalog: SchemeCatalog = serde_json::from_str(raw)?;
    validate(&catalog)?;

    // Triggers are matched against lowercased query text; normalize once
    // at load so matching stays a plain substring check.
    for scheme in &mut catalog.schemes {
        for trigger in &mut scheme.triggers {
            *trigger = trigger.to_lowercase();
        }
    }

    tracing::debug!(schemes = catalog.schemes.len(), "Scheme catalog loaded");
    Ok(catalog)
}

fn validate(catalog: &SchemeCatalog) -> Result<(), CatalogError> {
    if catalog.schemes.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::new();
    for scheme in &catalog.schemes {
        if scheme.key.trim().is_empty() {
            return Err(CatalogError::InvalidScheme {
                key: scheme.title.clone(),
                reason: "empty topic key".into(),
            });
        }
        if !seen.insert(scheme.key.as_str()) {
            return Err(CatalogError::DuplicateKey(scheme.key.clone()));
        }
        if scheme.title.trim().is_empty() {
            return Err(CatalogError::InvalidScheme {
                key: scheme.key.clone(),
                reason: "empty title".into(),
            });
        }
        if scheme.triggers.is_empty() || scheme.triggers.iter().any(|t| t.trim().is_empty()) {
            return Err(CatalogError::InvalidScheme {
                key: scheme.key.clone(),
                reason: "trigger set must be non-empty".into(),
            });
        }
    }

    Ok(())
}
