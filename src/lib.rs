//! QA Testgen Gateway
//!
//! Turns a natural-language user story into a structured set of QA test
//! cases through a single LLM call, then validates, repairs and scores the
//! output:
//! - Truncation-tolerant JSON repair for malformed LLM responses
//! - Total structural validation of the generated test cases
//! - Deterministic 5-dimension quality scoring
//! - Bounded retry loop that distinguishes recoverable parse failures from
//!   infrastructure faults

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use api::state::AppState;
use domain::generation::GenerationSettings;
use domain::quality::ScoringConfig;
use infrastructure::llm::{HttpClient, OpenAiProvider};
use tracing::warn;

/// Create the application state with all services initialized
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let api_key = config.llm.resolve_api_key();
    if api_key.is_empty() {
        warn!("No LLM API key configured; generation requests will fail upstream");
    }

    let http_client = HttpClient::with_timeout(Duration::from_secs(config.llm.timeout_seconds));
    let provider = OpenAiProvider::with_base_url(http_client, api_key, &config.llm.base_url);

    let scoring = ScoringConfig::from_word_lists(
        &config.scoring.vague_words,
        &config.scoring.generic_preconditions,
    )?;

    Ok(AppState {
        provider: Arc::new(provider),
        settings: Arc::new(GenerationSettings::from(config)),
        scoring: Arc::new(scoring),
    })
}
