use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ScoringClient;
use crate::naming::NameExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable scoring collaborator. Production: `LlmClient`.
    pub scoring: Arc<dyn ScoringClient>,
    /// Name extraction engine; patterns are compiled once at startup.
    pub naming: Arc<NameExtractor>,
    /// Retained for handlers that grow config-dependent behavior.
    #[allow(dead_code)]
    pub config: Config,
}
