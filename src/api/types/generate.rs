use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::domain::generation::GenerationOutcome;
use crate::domain::quality::QualityReport;
use crate::domain::test_case::TestCase;

pub const USER_STORY_CHARS: std::ops::RangeInclusive<usize> = 10..=2000;

const PIPELINE_DESCRIPTION: &str =
    "user_story -> prompt -> llm -> validate+repair -> quality_score -> response";

/// POST /v1/generate-tests request body
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub user_story: String,
}

/// Successful generation response
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub test_cases: Vec<TestCase>,
    pub quality: QualityReport,
    pub meta: ResponseMeta,
}

/// Provenance metadata for one generation
#[derive(Debug, Clone, Serialize)]
pub struct ResponseMeta {
    pub model: String,
    pub stop_reason: String,
    pub was_repaired: bool,
    pub attempts: u32,
    pub pipeline: &'static str,
}

impl From<GenerationOutcome> for GenerateResponse {
    fn from(outcome: GenerationOutcome) -> Self {
        Self {
            test_cases: outcome.test_cases,
            quality: outcome.quality,
            meta: ResponseMeta {
                model: outcome.model,
                stop_reason: outcome.stop_reason.as_str().to_string(),
                was_repaired: outcome.was_repaired,
                attempts: outcome.attempts,
                pipeline: PIPELINE_DESCRIPTION,
            },
        }
    }
}

/// Validate the request body bounds before any LLM work is started
pub fn validate_generate_request(request: &GenerateRequest) -> Result<(), ApiError> {
    let chars = request.user_story.trim().chars().count();
    if !USER_STORY_CHARS.contains(&chars) {
        return Err(ApiError::bad_request(format!(
            "user_story must be 10-2000 characters, got {chars}"
        ))
        .with_param("user_story"));
    }
    Ok(())
}
