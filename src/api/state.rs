use std::sync::Arc;

use crate::domain::generation::GenerationSettings;
use crate::domain::llm::LlmProvider;
use crate::domain::quality::ScoringConfig;

/// Shared application state.
///
/// Built once at startup; request handlers only read from it. The HTTP
/// client inside the provider is shared across requests and released with
/// the state itself.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn LlmProvider>,
    pub settings: Arc<GenerationSettings>,
    pub scoring: Arc<ScoringConfig>,
}
