//! Request and response envelopes crossing the core boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input validation failures. These are the only errors the core ever
/// surfaces to the caller; service-availability problems are absorbed
/// into `AnswerSource::Fallback` results instead.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Question must not be empty")]
    EmptyQuestion,

    #[error("Image must not be empty")]
    EmptyImage,

    #[error("Image could not be read: {0}")]
    UnreadableImage(String),
}

/// A typed-text question from the request layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,
    /// Optional BCP-47-ish language tag; defaults to "en".
    #[serde(default)]
    pub language: Option<String>,
}

impl QueryRequest {
    pub fn new(question: impl Into<String>, language: Option<&str>) -> Self {
        Self {
            question: question.into(),
            language: language.map(str::to_string),
        }
    }

    /// Validate and normalize: non-empty question, defaulted language.
    pub fn validated(&self) -> Result<(&str, &str), RequestError> {
        let question = self.question.trim();
        if question.is_empty() {
            return Err(RequestError::EmptyQuestion);
        }
        Ok((question, normalize_language(self.language.as_deref())))
    }
}

/// An uploaded notice image from the request layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRequest {
    pub image: Vec<u8>,
    #[serde(default)]
    pub language: Option<String>,
}

impl ImageRequest {
    pub fn new(image: Vec<u8>, language: Option<&str>) -> Self {
        Self {
            image,
            language: language.map(str::to_string),
        }
    }

    pub fn validated(&self) -> Result<(&[u8], &str), RequestError> {
        if self.image.is_empty() {
            return Err(RequestError::EmptyImage);
        }
        Ok((&self.image, normalize_language(self.language.as_deref())))
    }
}

fn normalize_language(language: Option<&str>) -> &str {
    match language {
        Some(lang) if !lang.trim().is_empty() => lang,
        _ => "en",
    }
}

/// Where the answer text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    Ai,
    Fallback,
}

/// The resolver's uniform result: display-ready text plus metadata.
///
/// Invariant: `source == Fallback` implies the text was produced purely
/// from the local catalog — no external service was involved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerEnvelope {
    pub text: String,
    pub source: AnswerSource,
    pub language_requested: String,
    pub matched_topic: Option<String>,
}

/// Result of the image pipeline: what OCR read, paired with the
/// explanation resolved over that text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAnswerEnvelope {
    pub extracted_text: String,
    pub explanation: AnswerEnvelope,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_language_defaults_to_en() {
        let req = QueryRequest::new("How do I apply?", None);
        let (question, language) = req.validated().unwrap();
        assert_eq!(question, "How do I apply?");
        assert_eq!(language, "en");
    }

    #[test]
    fn blank_language_defaults_to_en() {
        let req = QueryRequest::new("How do I apply?", Some("  "));
        let (_, language) = req.validated().unwrap();
        assert_eq!(language, "en");
    }

    #[test]
    fn empty_question_rejected() {
        let req = QueryRequest::new("   ", Some("hi"));
        assert!(matches!(req.validated(), Err(RequestError::EmptyQuestion)));
    }

    #[test]
    fn empty_image_rejected() {
        let req = ImageRequest::new(vec![], None);
        assert!(matches!(req.validated(), Err(RequestError::EmptyImage)));
    }

    #[test]
    fn requested_language_passes_through_verbatim() {
        let req = ImageRequest::new(vec![0xFF, 0xD8], Some("Hindi (hi-IN)"));
        let (_, language) = req.validated().unwrap();
        assert_eq!(language, "Hindi (hi-IN)");
    }

    #[test]
    fn answer_source_serializes_snake_case() {
        let json = serde_json::to_string(&AnswerSource::Fallback).unwrap();
        assert_eq!(json, "\"fallback\"");
    }
}
