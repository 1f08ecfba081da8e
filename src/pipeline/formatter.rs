//! Deterministic Markdown rendering of catalog content.
//!
//! The fallback path never translates: content is always English, with an
//! honest note echoing the requested language when it isn't English.

use crate::catalog::{SchemeCatalog, SchemeRecord};

/// Disclaimer shown on every fallback document.
const OFFLINE_NOTE: &str =
    "**Note:** *Showing offline information as AI services are momentarily unavailable.*";

/// Render a single scheme record as a display-ready document.
pub fn format_scheme(record: &SchemeRecord, language: &str) -> String {
    let mut doc = String::new();

    doc.push_str(&format!("# {}\n\n", record.title));
    if let Some(note) = language_note(language) {
        doc.push_str(&note);
        doc.push_str("\n\n");
    }
    doc.push_str(OFFLINE_NOTE);
    doc.push_str("\n\n");
    doc.push_str(&record.description);
    doc.push_str("\n\n");

    doc.push_str("### Key Benefits\n");
    for benefit in &record.benefits {
        doc.push_str(&format!("- {benefit}\n"));
    }

    doc.push_str("\n### Eligibility\n");
    for criteria in &record.eligibility {
        doc.push_str(&format!("- {criteria}\n"));
    }

    doc.push_str(&format!("\n### How to Apply\n{}", record.application));
    doc
}

/// Render the general fallback: every catalog title, once, in order,
/// followed by the closing retry note.
pub fn format_general(catalog: &SchemeCatalog, language: &str) -> String {
    let general = &catalog.general;
    let mut doc = String::new();

    doc.push_str(&format!("# {}\n\n", general.title));
    if let Some(note) = language_note(language) {
        doc.push_str(&note);
        doc.push_str("\n\n");
    }
    doc.push_str(OFFLINE_NOTE);
    doc.push_str("\n\n");
    doc.push_str(&general.description);
    doc.push_str("\n\n");

    doc.push_str("### Popular Schemes:\n");
    for title in catalog.titles() {
        doc.push_str(&format!("- {title}\n"));
    }

    doc.push_str(&format!("\n*{}*", general.note));
    doc
}

fn is_english(language: &str) -> bool {
    matches!(language.to_lowercase().as_str(), "en" | "english")
}

/// Note inserted under the title for non-English requests, echoing the
/// requested language verbatim. Unknown language strings are simply
/// treated as non-English.
fn language_note(language: &str) -> Option<String> {
    if is_english(language) {
        None
    } else {
        Some(format!(
            "*(Note: Content is displayed in English as translation services are \
             currently offline. Requested Language: {language})*"
        ))
    }
}
