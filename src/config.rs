use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Civic-AI";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default local Ollama instance used by the production capability adapters.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Upper bound on a single AI generation call. Hitting it is treated the
/// same as any other capability failure: the deterministic fallback answers.
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 30;

/// Vision OCR is slower than text generation; give it more room.
pub const DEFAULT_OCR_TIMEOUT_SECS: u64 = 120;

/// Environment variable pointing at an external scheme catalog file.
pub const CATALOG_ENV_VAR: &str = "CIVIC_AI_CATALOG";

/// External catalog file, when configured.
pub fn catalog_path() -> Option<PathBuf> {
    std::env::var_os(CATALOG_ENV_VAR).map(PathBuf::from)
}

pub fn default_log_filter() -> &'static str {
    "info,civic_ai=debug"
}
