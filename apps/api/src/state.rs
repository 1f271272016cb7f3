use std::sync::Arc;

use crate::config::Config;
use crate::extract::Extractor;
use crate::layout::PageConfig;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable extraction engine. Default: RegexExtractor. Swap via
    /// ENABLE_LLM_EXTRACTION env plus an API key.
    pub extractor: Arc<dyn Extractor>,
    /// Page dimensions for the pagination pass. Defaults to A4 with the
    /// editor's padding.
    pub page_config: PageConfig,
}
