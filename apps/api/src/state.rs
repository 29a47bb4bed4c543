use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatCompleter;
use crate::search::SearchBackend;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; no request mutates it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Completion backend. Default: `LlmClient` against the OpenAI API.
    pub llm: Arc<dyn ChatCompleter>,
    /// Search backend. Default: `GoogleSearchClient`.
    pub search: Arc<dyn SearchBackend>,
}
