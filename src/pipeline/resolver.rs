//! Degraded-answer resolution: try the AI capability, fall back to the
//! local catalog on any failure.
//!
//! The fallback path is pure computation over static data and cannot fail
//! for well-formed input — it is the availability floor of the whole
//! system. Capability failures never cross this boundary as errors.

use super::prompt::{build_query_prompt, QUERY_SYSTEM_PROMPT};
use super::{formatter, matcher, AiError};
use crate::catalog::SchemeCatalog;
use crate::models::{AnswerEnvelope, AnswerSource, QueryRequest, RequestError};

/// Trait for the external AI text-generation capability.
///
/// Implementations decide their own timeout bound; the resolver treats a
/// timeout exactly like any other failure. Retries are the capability's
/// own concern, never the resolver's.
pub trait AiGenerate {
    fn generate(&self, system: &str, prompt: &str) -> Result<String, AiError>;
}

/// Orchestrates AI-first resolution over a shared read-only catalog.
pub struct AnswerResolver<'a> {
    catalog: &'a SchemeCatalog,
}

impl<'a> AnswerResolver<'a> {
    pub fn new(catalog: &'a SchemeCatalog) -> Self {
        Self { catalog }
    }

    /// Resolve a question into a display-ready answer.
    ///
    /// AI success passes the answer through unchanged; any `AiError` (or a
    /// blank AI answer) selects the deterministic fallback. Never fails.
    pub fn resolve(&self, question: &str, language: &str, ai: &dyn AiGenerate) -> AnswerEnvelope {
        let prompt = build_query_prompt(question, language);

        match ai.generate(QUERY_SYSTEM_PROMPT, &prompt) {
            Ok(answer) if !answer.trim().is_empty() => {
                tracing::debug!(language, answer_len = answer.len(), "AI answer generated");
                AnswerEnvelope {
                    text: answer,
                    source: AnswerSource::Ai,
                    language_requested: language.to_string(),
                    matched_topic: None,
                }
            }
            Ok(_) => {
                tracing::warn!("AI returned a blank answer, using offline fallback");
                self.fallback(question, language)
            }
            Err(e) => {
                tracing::warn!(error = %e, "AI capability unavailable, using offline fallback");
                self.fallback(question, language)
            }
        }
    }

    /// Deterministic local answer: keyword match, then format the matched
    /// record or the general catalog summary.
    fn fallback(&self, question: &str, language: &str) -> AnswerEnvelope {
        match matcher::match_topic(self.catalog, question) {
            Some(record) => {
                tracing::info!(topic = %record.key, "Fallback matched a scheme");
                AnswerEnvelope {
                    text: formatter::format_scheme(record, language),
                    source: AnswerSource::Fallback,
                    language_requested: language.to_string(),
                    matched_topic: Some(record.key.clone()),
                }
            }
            None => {
                tracing::info!("Fallback matched no scheme, using general summary");
                AnswerEnvelope {
                    text: formatter::format_general(self.catalog, language),
                    source: AnswerSource::Fallback,
                    language_requested: language.to_string(),
                    matched_topic: None,
                }
            }
        }
    }
}

/// Boundary operation for typed-text questions: validate the request,
/// then resolve. Only input errors come back as `Err`.
pub fn answer_query(
    catalog: &SchemeCatalog,
    request: &QueryRequest,
    ai: &dyn AiGenerate,
) -> Result<AnswerEnvelope, RequestError> {
    let (question, language) = request.validated()?;
    Ok(AnswerResolver::new(catalog).resolve(question, language, ai))
}
