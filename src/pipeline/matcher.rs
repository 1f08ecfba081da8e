use crate::catalog::{SchemeCatalog, SchemeRecord};

/// Map free text to at most one scheme by trigger substrings.
///
/// The text is lowercased once; records are walked in catalog order and
/// the first record with any trigger occurring anywhere in the text wins.
/// No scoring, no ranking — overlapping trigger sets are resolved purely
/// by declaration order.
pub fn match_topic<'a>(catalog: &'a SchemeCatalog, text: &str) -> Option<&'a SchemeRecord> {
    let lower = text.to_lowercase();
    catalog
        .schemes
        .iter()
        .find(|scheme| scheme.triggers.iter().any(|t| lower.contains(t.as_str())))
}
