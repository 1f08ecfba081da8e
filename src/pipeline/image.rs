//! Image pipeline: OCR the uploaded notice, then resolve the extracted
//! text through the same degraded-answer logic as typed questions.
//!
//! When OCR is down or finds no text, a representative sample notice
//! stands in for the extraction — and is still resolved through the real
//! resolver, so AI availability keeps selecting the branch even inside
//! the degraded image path.

use super::resolver::{AiGenerate, AnswerResolver};
use super::OcrError;
use crate::catalog::SchemeCatalog;
use crate::models::{ImageAnswerEnvelope, ImageRequest, RequestError};

/// Trait for the external OCR capability: best-effort text from image
/// bytes, or failure.
pub trait OcrExtract {
    fn extract_text(&self, image_bytes: &[u8]) -> Result<String, OcrError>;
}

/// Sample government notice used when OCR is unavailable or reads nothing.
pub const SAMPLE_NOTICE_TEXT: &str = "GOVERNMENT OF INDIA\nMINISTRY OF RURAL DEVELOPMENT\n\nNOTICE\n\nSubject: Implementation of Pradhan Mantri Awas Yojana - Gramin (PMAY-G)\n\nThis is to inform all beneficiaries that the deadline for document submission has been extended to 31st March 2024. Eligible applicants must submit their Aadhaar card, MGNREGA job card, and bank account details to the Gram Panchayat office.\n\nBy Order,\nBlock Development Officer";

/// Wraps the OCR capability around the answer resolver.
pub struct ImagePipeline<'a> {
    catalog: &'a SchemeCatalog,
}

impl<'a> ImagePipeline<'a> {
    pub fn new(catalog: &'a SchemeCatalog) -> Self {
        Self { catalog }
    }

    /// Resolve an uploaded image into extracted text plus an explanation.
    ///
    /// Only input problems (empty or unreadable image) are errors; OCR
    /// availability failures and empty extractions degrade to the sample
    /// notice and still go through the resolver.
    pub fn resolve_image(
        &self,
        image_bytes: &[u8],
        language: &str,
        ocr: &dyn OcrExtract,
        ai: &dyn AiGenerate,
    ) -> Result<ImageAnswerEnvelope, RequestError> {
        if image_bytes.is_empty() {
            return Err(RequestError::EmptyImage);
        }

        let extracted_text = match ocr.extract_text(image_bytes) {
            Ok(text) if !text.trim().is_empty() => {
                tracing::debug!(text_len = text.len(), "OCR extraction succeeded");
                text
            }
            Ok(_) => {
                tracing::info!("OCR found no text in image, using sample notice");
                SAMPLE_NOTICE_TEXT.to_string()
            }
            Err(OcrError::InvalidImage(reason)) => {
                return Err(RequestError::UnreadableImage(reason));
            }
            Err(e) => {
                tracing::warn!(error = %e, "OCR capability unavailable, using sample notice");
                SAMPLE_NOTICE_TEXT.to_string()
            }
        };

        let explanation = AnswerResolver::new(self.catalog).resolve(&extracted_text, language, ai);

        Ok(ImageAnswerEnvelope {
            extracted_text,
            explanation,
        })
    }
}

/// Boundary operation for image requests: validate, OCR, resolve.
pub fn answer_image(
    catalog: &SchemeCatalog,
    request: &ImageRequest,
    ocr: &dyn OcrExtract,
    ai: &dyn AiGenerate,
) -> Result<ImageAnswerEnvelope, RequestError> {
    let (image, language) = request.validated()?;
    ImagePipeline::new(catalog).resolve_image(image, language, ocr, ai)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::models::AnswerSource;
    use crate::pipeline::AiError;

    struct StubAi {
        up: bool,
    }

    impl AiGenerate for StubAi {
        fn generate(&self, _system: &str, _prompt: &str) -> Result<String, AiError> {
            if self.up {
                Ok("AI explanation of the notice".into())
            } else {
                Err(AiError::Connection("stub: service down".into()))
            }
        }
    }

    /// Scripted OCR capability stub.
    enum StubOcr {
        Text(&'static str),
        Empty,
        Down,
        Unreadable,
    }

    impl OcrExtract for StubOcr {
        fn extract_text(&self, _image_bytes: &[u8]) -> Result<String, OcrError> {
            match self {
                StubOcr::Text(t) => Ok((*t).to_string()),
                StubOcr::Empty => Ok("   \n".to_string()),
                StubOcr::Down => Err(OcrError::Connection("stub: service down".into())),
                StubOcr::Unreadable => Err(OcrError::InvalidImage("not an image".into())),
            }
        }
    }

    fn default_catalog() -> SchemeCatalog {
        catalog::load_default().unwrap()
    }

    fn image_request() -> ImageRequest {
        ImageRequest::new(vec![0xFF, 0xD8, 0xFF], Some("en"))
    }

    #[test]
    fn extracted_text_flows_into_resolver() {
        let catalog = default_catalog();
        let ocr = StubOcr::Text("Notice about ujjwala lpg connection camp");
        let result = answer_image(&catalog, &image_request(), &ocr, &StubAi { up: false }).unwrap();

        assert_eq!(result.extracted_text, "Notice about ujjwala lpg connection camp");
        assert_eq!(result.explanation.source, AnswerSource::Fallback);
        assert_eq!(result.explanation.matched_topic.as_deref(), Some("gas"));
    }

    #[test]
    fn extraction_with_ai_up_returns_ai_explanation() {
        let catalog = default_catalog();
        let ocr = StubOcr::Text("Some notice text");
        let result = answer_image(&catalog, &image_request(), &ocr, &StubAi { up: true }).unwrap();

        assert_eq!(result.explanation.source, AnswerSource::Ai);
        assert_eq!(result.explanation.text, "AI explanation of the notice");
    }

    #[test]
    fn empty_extraction_uses_sample_notice() {
        let catalog = default_catalog();
        let result =
            answer_image(&catalog, &image_request(), &StubOcr::Empty, &StubAi { up: false })
                .unwrap();

        assert_eq!(result.extracted_text, SAMPLE_NOTICE_TEXT);
        // The sample notice mentions Awas Yojana, so the resolver lands on housing
        assert_eq!(result.explanation.source, AnswerSource::Fallback);
        assert_eq!(result.explanation.matched_topic.as_deref(), Some("housing"));
        assert!(result.explanation.text.contains("Pradhan Mantri Awas Yojana"));
    }

    #[test]
    fn ocr_down_uses_sample_notice() {
        let catalog = default_catalog();
        let result =
            answer_image(&catalog, &image_request(), &StubOcr::Down, &StubAi { up: false })
                .unwrap();

        assert_eq!(result.extracted_text, SAMPLE_NOTICE_TEXT);
        assert_eq!(result.explanation.source, AnswerSource::Fallback);
    }

    #[test]
    fn ai_state_still_selects_branch_in_degraded_image_path() {
        // Same OCR-down input, different AI state: the explanation is not
        // hard-coded but computed by the resolver over the sample notice.
        let catalog = default_catalog();

        let degraded =
            answer_image(&catalog, &image_request(), &StubOcr::Down, &StubAi { up: false })
                .unwrap();
        assert_eq!(degraded.explanation.source, AnswerSource::Fallback);

        let recovered =
            answer_image(&catalog, &image_request(), &StubOcr::Down, &StubAi { up: true })
                .unwrap();
        assert_eq!(recovered.explanation.source, AnswerSource::Ai);
        assert_eq!(recovered.extracted_text, SAMPLE_NOTICE_TEXT);
    }

    #[test]
    fn unreadable_image_is_an_input_error() {
        let catalog = default_catalog();
        let result =
            answer_image(&catalog, &image_request(), &StubOcr::Unreadable, &StubAi { up: true });
        assert!(matches!(result, Err(RequestError::UnreadableImage(_))));
    }

    #[test]
    fn empty_image_rejected_before_ocr() {
        let catalog = default_catalog();
        let request = ImageRequest::new(vec![], Some("en"));
        let result = answer_image(&catalog, &request, &StubOcr::Down, &StubAi { up: true });
        assert!(matches!(result, Err(RequestError::EmptyImage)));
    }

    #[test]
    fn language_note_carried_through_image_fallback() {
        let catalog = default_catalog();
        let request = ImageRequest::new(vec![1, 2, 3], Some("hi"));
        let result = answer_image(&catalog, &request, &StubOcr::Empty, &StubAi { up: false }).unwrap();

        assert_eq!(result.explanation.language_requested, "hi");
        assert!(result.explanation.text.contains("Requested Language: hi"));
    }
}
