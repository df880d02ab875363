//! Structural validation for generated test case sets.
//!
//! Validation is total: either every case satisfies all field constraints
//! or the whole set is rejected. Out-of-range values are never silently
//! truncated.

use thiserror::Error;

use super::{TestCase, TestCaseSet};

pub const TITLE_CHARS: std::ops::RangeInclusive<usize> = 5..=200;
pub const PRECONDITIONS_CHARS: std::ops::RangeInclusive<usize> = 5..=200;
pub const EXPECTED_RESULT_CHARS: std::ops::RangeInclusive<usize> = 10..=200;
pub const STEP_COUNT: std::ops::RangeInclusive<usize> = 2..=4;

/// Validation errors for generated test case sets
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TestCaseValidationError {
    #[error("test_cases must contain at least one test case")]
    EmptySet,

    #[error("test case {index}: title must be 5-200 characters, got {chars}")]
    TitleLength { index: usize, chars: usize },

    #[error("test case {index}: preconditions must be 5-200 characters, got {chars}")]
    PreconditionsLength { index: usize, chars: usize },

    #[error("test case {index}: steps must contain 2-4 entries, got {count}")]
    StepCount { index: usize, count: usize },

    #[error("test case {index}: step {step} must not be blank")]
    BlankStep { index: usize, step: usize },

    #[error("test case {index}: expected_result must be 10-200 characters, got {chars}")]
    ExpectedResultLength { index: usize, chars: usize },
}

/// Validate a whole set against the schema bounds
pub fn validate_set(set: &TestCaseSet) -> Result<(), TestCaseValidationError> {
    if set.test_cases.is_empty() {
        return Err(TestCaseValidationError::EmptySet);
    }

    for (index, case) in set.test_cases.iter().enumerate() {
        validate_case(index, case)?;
    }

    Ok(())
}

fn validate_case(index: usize, case: &TestCase) -> Result<(), TestCaseValidationError> {
    let title_chars = case.title.chars().count();
    if !TITLE_CHARS.contains(&title_chars) {
        return Err(TestCaseValidationError::TitleLength {
            index,
            chars: title_chars,
        });
    }

    let preconditions_chars = case.preconditions.chars().count();
    if !PRECONDITIONS_CHARS.contains(&preconditions_chars) {
        return Err(TestCaseValidationError::PreconditionsLength {
            index,
            chars: preconditions_chars,
        });
    }

    if !STEP_COUNT.contains(&case.steps.len()) {
        return Err(TestCaseValidationError::StepCount {
            index,
            count: case.steps.len(),
        });
    }

    for (step, text) in case.steps.iter().enumerate() {
        if text.trim().is_empty() {
            return Err(TestCaseValidationError::BlankStep { index, step });
        }
    }

    let expected_chars = case.expected_result.chars().count();
    if !EXPECTED_RESULT_CHARS.contains(&expected_chars) {
        return Err(TestCaseValidationError::ExpectedResultLength {
            index,
            chars: expected_chars,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_case() -> TestCase {
        TestCase {
            title: "Happy path login".to_string(),
            preconditions: "User has a verified account on the login page".to_string(),
            steps: vec![
                "Enter a valid email".to_string(),
                "Enter the correct password".to_string(),
                "Click the login button".to_string(),
            ],
            expected_result: "User is redirected to the dashboard".to_string(),
        }
    }

    fn set_of(cases: Vec<TestCase>) -> TestCaseSet {
        TestCaseSet { test_cases: cases }
    }

    #[test]
    fn test_valid_set() {
        assert!(validate_set(&set_of(vec![valid_case(), valid_case()])).is_ok());
    }

    #[test]
    fn test_empty_set_rejected() {
        assert_eq!(
            validate_set(&set_of(vec![])),
            Err(TestCaseValidationError::EmptySet)
        );
    }

    #[test]
    fn test_short_title_rejected() {
        let mut case = valid_case();
        case.title = "Shrt".to_string();
        assert_eq!(
            validate_set(&set_of(vec![case])),
            Err(TestCaseValidationError::TitleLength { index: 0, chars: 4 })
        );
    }

    #[test]
    fn test_boundary_lengths_accepted() {
        let mut case = valid_case();
        case.title = "x".repeat(5);
        case.preconditions = "y".repeat(200);
        case.expected_result = "z".repeat(10);
        assert!(validate_set(&set_of(vec![case])).is_ok());
    }

    #[test]
    fn test_overlong_expected_result_rejected() {
        let mut case = valid_case();
        case.expected_result = "z".repeat(201);
        assert!(matches!(
            validate_set(&set_of(vec![case])),
            Err(TestCaseValidationError::ExpectedResultLength { chars: 201, .. })
        ));
    }

    #[test]
    fn test_step_count_bounds() {
        let mut case = valid_case();
        case.steps = vec!["Only one step".to_string()];
        assert_eq!(
            validate_set(&set_of(vec![case.clone()])),
            Err(TestCaseValidationError::StepCount { index: 0, count: 1 })
        );

        case.steps = vec!["A step".to_string(); 5];
        assert_eq!(
            validate_set(&set_of(vec![case])),
            Err(TestCaseValidationError::StepCount { index: 0, count: 5 })
        );
    }

    #[test]
    fn test_blank_step_rejected() {
        let mut case = valid_case();
        case.steps = vec!["First step".to_string(), "   ".to_string()];
        assert_eq!(
            validate_set(&set_of(vec![case])),
            Err(TestCaseValidationError::BlankStep { index: 0, step: 1 })
        );
    }

    #[test]
    fn test_one_bad_case_rejects_whole_set() {
        let mut bad = valid_case();
        bad.preconditions = "P".to_string();
        assert!(validate_set(&set_of(vec![valid_case(), bad])).is_err());
    }

    #[test]
    fn test_multibyte_titles_counted_in_chars() {
        let mut case = valid_case();
        case.title = "ñandú".to_string();
        assert!(validate_set(&set_of(vec![case])).is_ok());
    }
}
