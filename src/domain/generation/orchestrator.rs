//! Orchestrates one generation request: LLM call, parse/repair, validation,
//! scoring, and the retry loop around recoverable failures.
//!
//! Retry strategy:
//! - `Parse` errors (malformed or schema-violating output) are retried up
//!   to the configured budget, each attempt fully independent.
//! - `Timeout`, `Network` and `UpstreamHttp` faults abort immediately at
//!   any attempt; they indicate infrastructure trouble, not a recoverable
//!   malformed response.

use serde::Serialize;
use tracing::{info, warn};

use super::prompt::{SYSTEM_PROMPT, build_user_message};
use crate::domain::DomainError;
use crate::domain::llm::{FinishReason, LlmProvider, LlmRequest};
use crate::domain::parsing::parse_and_validate;
use crate::domain::quality::{QualityReport, ScoringConfig, score_test_cases};
use crate::domain::test_case::TestCase;

/// Static inputs for the generation loop
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    /// Extra attempts beyond the first when parsing or validation fails
    pub max_retries: u32,
}

/// Final artifact of a successful generation request
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutcome {
    pub test_cases: Vec<TestCase>,
    pub quality: QualityReport,
    pub model: String,
    pub stop_reason: FinishReason,
    pub was_repaired: bool,
    pub attempts: u32,
}

/// Full pipeline: user story -> LLM -> parse/repair -> validate -> score.
///
/// Each attempt performs a fresh generation call followed by fresh parsing
/// and scoring; no partial state carries over between attempts.
pub async fn generate_test_cases(
    user_story: &str,
    provider: &dyn LlmProvider,
    settings: &GenerationSettings,
    scoring: &ScoringConfig,
) -> Result<GenerationOutcome, DomainError> {
    let total_attempts = settings.max_retries + 1;
    let mut last_error: Option<DomainError> = None;

    for attempt in 1..=total_attempts {
        info!(attempt, max = total_attempts, "Generation attempt");

        match run_attempt(user_story, provider, settings, scoring, attempt).await {
            Ok(outcome) => {
                info!(
                    attempt,
                    test_cases = outcome.test_cases.len(),
                    quality_score = outcome.quality.score,
                    was_repaired = outcome.was_repaired,
                    "Pipeline complete"
                );
                return Ok(outcome);
            }
            Err(error) => match error {
                DomainError::Parse { .. } => {
                    warn!(attempt, %error, "Parse error on attempt");
                    last_error = Some(error);
                    if attempt < total_attempts {
                        info!("Retrying");
                    }
                }
                fatal @ (DomainError::Timeout { .. }
                | DomainError::Network { .. }
                | DomainError::UpstreamHttp { .. }
                | DomainError::Validation { .. }
                | DomainError::Configuration { .. }) => return Err(fatal),
            },
        }
    }

    Err(last_error.unwrap_or_else(|| {
        DomainError::parse("generation failed after all retries", "unknown", "")
    }))
}

async fn run_attempt(
    user_story: &str,
    provider: &dyn LlmProvider,
    settings: &GenerationSettings,
    scoring: &ScoringConfig,
    attempt: u32,
) -> Result<GenerationOutcome, DomainError> {
    let request = LlmRequest::builder()
        .system(SYSTEM_PROMPT)
        .user(build_user_message(user_story))
        .temperature(settings.temperature)
        .max_tokens(settings.max_tokens)
        .top_p(settings.top_p)
        .build();

    let response = provider.generate(&settings.model, request).await?;

    let (set, was_repaired) = parse_and_validate(&response.text, response.finish_reason)?;

    let quality = score_test_cases(&set.test_cases, scoring);

    Ok(GenerationOutcome {
        test_cases: set.test_cases,
        quality,
        model: response.model,
        stop_reason: response.finish_reason,
        was_repaired,
        attempts: attempt,
    })
}
