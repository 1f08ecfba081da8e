pub mod formatter;
pub mod image;
pub mod matcher;
pub mod ollama;
pub mod prompt;
pub mod resolver;

use thiserror::Error;

/// Failures of the external AI capability. Every variant is absorbed by
/// the resolver and converted into a deterministic fallback answer.
#[derive(Error, Debug)]
pub enum AiError {
    #[error("AI service connection failed: {0}")]
    Connection(String),

    #[error("AI request timed out after {0}s")]
    Timeout(u64),

    #[error("AI service returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("AI response parsing failed: {0}")]
    ResponseParsing(String),
}

/// Failures of the external OCR capability. `InvalidImage` is an input
/// error and crosses the boundary; the rest are availability problems
/// absorbed by the image pipeline.
#[derive(Error, Debug)]
pub enum OcrError {
    #[error("Image could not be read: {0}")]
    InvalidImage(String),

    #[error("OCR service connection failed: {0}")]
    Connection(String),

    #[error("OCR request timed out after {0}s")]
    Timeout(u64),

    #[error("OCR service returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("OCR response parsing failed: {0}")]
    ResponseParsing(String),
}
