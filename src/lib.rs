pub mod catalog;
pub mod config;
pub mod models;
pub mod pipeline;

pub use catalog::{CatalogError, GeneralFallback, SchemeCatalog, SchemeRecord};
pub use models::{
    AnswerEnvelope, AnswerSource, ImageAnswerEnvelope, ImageRequest, QueryRequest, RequestError,
};
pub use pipeline::image::{answer_image, ImagePipeline, OcrExtract, SAMPLE_NOTICE_TEXT};
pub use pipeline::resolver::{answer_query, AiGenerate, AnswerResolver};
pub use pipeline::{AiError, OcrError};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the embedding process. Call once at startup;
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} core v{}", config::APP_NAME, config::APP_VERSION);
}
