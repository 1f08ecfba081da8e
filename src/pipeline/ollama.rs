//! Production capability adapters backed by a local Ollama instance.
//!
//! `OllamaGenerator` satisfies `AiGenerate` via `/api/generate`;
//! `OllamaVisionOcr` satisfies `OcrExtract` via `/api/chat` with a
//! base64-encoded image. Both carry their own timeout; the pipeline
//! treats a timeout exactly like a connection failure.

use base64::Engine as _;
use serde::{Deserialize, Serialize};

use super::image::OcrExtract;
use super::resolver::AiGenerate;
use super::{AiError, OcrError};
use crate::config;

const OCR_SYSTEM_PROMPT: &str = "\
You are a document text extractor. Extract ALL visible text from the \
provided image of a government notice or form, preserving structure. \
Output only the extracted text, nothing else.";

const OCR_USER_PROMPT: &str = "\
Extract all visible text from this document image. Preserve headings and \
line breaks. Do not summarize or explain.";

/// Shared blocking HTTP client for one Ollama instance.
pub struct OllamaClient {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl OllamaClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// Default local instance with the configured AI timeout.
    pub fn default_local() -> Self {
        Self::new(config::DEFAULT_OLLAMA_URL, config::DEFAULT_AI_TIMEOUT_SECS)
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    images: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Text-generation capability: a fixed model on one Ollama instance.
pub struct OllamaGenerator {
    client: OllamaClient,
    model: String,
}

impl OllamaGenerator {
    pub fn new(client: OllamaClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

impl AiGenerate for OllamaGenerator {
    fn generate(&self, system: &str, prompt: &str) -> Result<String, AiError> {
        let url = format!("{}/api/generate", self.client.base_url);
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            system,
            stream: false,
        };

        let response = self.client.client.post(&url).json(&body).send().map_err(|e| {
            if e.is_timeout() {
                AiError::Timeout(self.client.timeout_secs)
            } else if e.is_connect() {
                AiError::Connection(self.client.base_url.clone())
            } else {
                AiError::Connection(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| AiError::ResponseParsing(e.to_string()))?;

        Ok(parsed.response)
    }
}

/// Vision OCR capability: a vision-capable model on one Ollama instance.
pub struct OllamaVisionOcr {
    client: OllamaClient,
    model: String,
}

impl OllamaVisionOcr {
    pub fn new(client: OllamaClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

impl OcrExtract for OllamaVisionOcr {
    fn extract_text(&self, image_bytes: &[u8]) -> Result<String, OcrError> {
        let start = std::time::Instant::now();
        let base64_image = base64::engine::general_purpose::STANDARD.encode(image_bytes);

        let url = format!("{}/api/chat", self.client.base_url);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: OCR_SYSTEM_PROMPT,
                    images: None,
                },
                ChatMessage {
                    role: "user",
                    content: OCR_USER_PROMPT,
                    images: Some(vec![base64_image]),
                },
            ],
            stream: false,
        };

        let response = self.client.client.post(&url).json(&body).send().map_err(|e| {
            if e.is_timeout() {
                OcrError::Timeout(self.client.timeout_secs)
            } else if e.is_connect() {
                OcrError::Connection(self.client.base_url.clone())
            } else {
                OcrError::Connection(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(OcrError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| OcrError::ResponseParsing(e.to_string()))?;

        tracing::info!(
            model = %self.model,
            elapsed_ms = %start.elapsed().as_millis(),
            text_len = parsed.message.content.len(),
            "Vision OCR extraction complete"
        );

        Ok(parsed.message.content)
    }
}
