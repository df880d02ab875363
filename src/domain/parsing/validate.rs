use serde_json::Value;
use tracing::{info, warn};

use super::fence::strip_fences;
use super::repair::repair_truncated_json;
use crate::domain::DomainError;
use crate::domain::llm::FinishReason;
use crate::domain::test_case::{TestCaseSet, validate_set};

/// Parse raw LLM output into a validated [`TestCaseSet`].
///
/// Returns the set together with a flag telling whether textual repair was
/// applied. Direct parse is always tried first, whatever the reported stop
/// reason: models occasionally mislabel the stop cause, and output that
/// already parses must never be altered by repair heuristics.
pub fn parse_and_validate(
    raw: &str,
    finish_reason: FinishReason,
) -> Result<(TestCaseSet, bool), DomainError> {
    let cleaned = strip_fences(raw);

    match serde_json::from_str::<Value>(&cleaned) {
        Ok(data) => Ok((validate_structure(data, finish_reason, raw)?, false)),
        Err(error) => {
            warn!(%error, "Direct JSON parse failed, attempting repair");
            let data = repair_truncated_json(&cleaned).map_err(|repair_error| {
                DomainError::parse(
                    format!("JSON could not be parsed or repaired: {repair_error}"),
                    finish_reason.as_str(),
                    raw,
                )
            })?;
            info!("JSON repaired successfully");
            Ok((validate_structure(data, finish_reason, raw)?, true))
        }
    }
}

fn validate_structure(
    data: Value,
    finish_reason: FinishReason,
    raw: &str,
) -> Result<TestCaseSet, DomainError> {
    let set: TestCaseSet = serde_json::from_value(data).map_err(|error| {
        DomainError::parse(
            format!("Structural validation failed: {error}"),
            finish_reason.as_str(),
            raw,
        )
    })?;

    validate_set(&set).map_err(|error| {
        DomainError::parse(
            format!("Structural validation failed: {error}"),
            finish_reason.as_str(),
            raw,
        )
    })?;

    Ok(set)
}
