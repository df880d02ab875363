//! Five-dimension heuristic scoring.
//!
//! | dimension        | weight | heuristic                                   |
//! |------------------|--------|---------------------------------------------|
//! | quantity         | 0.20   | saturates at 3+ generated cases             |
//! | steps_depth      | 0.25   | average steps per case, saturates at 3      |
//! | preconditions    | 0.20   | penalizes generic or terse preconditions    |
//! | expected_results | 0.20   | penalizes vague, unverifiable phrasing      |
//! | diversity        | 0.15   | unique words across titles (topic coverage) |

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::ScoringConfig;
use crate::domain::test_case::TestCase;

const WEIGHT_QUANTITY: f64 = 0.20;
const WEIGHT_STEPS_DEPTH: f64 = 0.25;
const WEIGHT_PRECONDITIONS: f64 = 0.20;
const WEIGHT_EXPECTED_RESULTS: f64 = 0.20;
const WEIGHT_DIVERSITY: f64 = 0.15;

/// Quality band derived from the aggregate score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityLabel {
    High,
    Medium,
    NeedsImprovement,
}

impl QualityLabel {
    fn from_score(score: f64) -> Self {
        let pct = (score * 100.0).round();
        if pct >= 75.0 {
            Self::High
        } else if pct >= 50.0 {
            Self::Medium
        } else {
            Self::NeedsImprovement
        }
    }
}

/// Per-dimension sub-scores, each in [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityDimensions {
    pub quantity: f64,
    pub steps_depth: f64,
    pub preconditions: f64,
    pub expected_results: f64,
    pub diversity: f64,
}

/// Quality assessment of one generated test case set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub score: f64,
    pub label: QualityLabel,
    pub dimensions: QualityDimensions,
}

/// Score a validated, non-empty set of test cases.
///
/// Pure and deterministic: identical input always yields an identical
/// report. The caller guarantees a non-empty slice (the schema validator
/// rejects empty sets upstream).
pub fn score_test_cases(test_cases: &[TestCase], config: &ScoringConfig) -> QualityReport {
    debug_assert!(!test_cases.is_empty());
    let n = test_cases.len() as f64;

    let quantity = (n / 3.0).min(1.0);

    let steps_depth = test_cases
        .iter()
        .map(|tc| (tc.steps.len() as f64 / 3.0).min(1.0))
        .sum::<f64>()
        / n;

    let preconditions = test_cases
        .iter()
        .map(|tc| precondition_score(tc, config))
        .sum::<f64>()
        / n;

    let expected_results = test_cases
        .iter()
        .map(|tc| expected_result_score(tc, config))
        .sum::<f64>()
        / n;

    let diversity = title_diversity(test_cases);

    let score = round4(
        quantity * WEIGHT_QUANTITY
            + steps_depth * WEIGHT_STEPS_DEPTH
            + preconditions * WEIGHT_PRECONDITIONS
            + expected_results * WEIGHT_EXPECTED_RESULTS
            + diversity * WEIGHT_DIVERSITY,
    );

    QualityReport {
        score,
        label: QualityLabel::from_score(score),
        dimensions: QualityDimensions {
            quantity: round4(quantity),
            steps_depth: round4(steps_depth),
            preconditions: round4(preconditions),
            expected_results: round4(expected_results),
            diversity: round4(diversity),
        },
    }
}

fn precondition_score(tc: &TestCase, config: &ScoringConfig) -> f64 {
    let text = tc.preconditions.trim();
    if config.is_generic_precondition(text) {
        0.2
    } else if text.chars().count() > 25 {
        1.0
    } else {
        0.6
    }
}

fn expected_result_score(tc: &TestCase, config: &ScoringConfig) -> f64 {
    let vague = config.vague_matches(&tc.expected_result);
    if vague == 0 && tc.expected_result.chars().count() > 35 {
        1.0
    } else if vague <= 1 {
        0.7
    } else {
        0.3
    }
}

fn title_diversity(test_cases: &[TestCase]) -> f64 {
    let words: HashSet<String> = test_cases
        .iter()
        .flat_map(|tc| {
            tc.title
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect();

    (words.len() as f64 / (test_cases.len() as f64 * 3.0)).min(1.0)
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_case(title: &str) -> TestCase {
        TestCase {
            title: title.to_string(),
            preconditions: "User is on the registration page with valid data".to_string(),
            steps: vec![
                "Fill in the form".to_string(),
                "Submit the registration".to_string(),
                "Open the confirmation email".to_string(),
            ],
            expected_result: "System displays a confirmation and sends a verification email"
                .to_string(),
        }
    }

    fn scoring() -> ScoringConfig {
        ScoringConfig::default()
    }

    #[test]
    fn test_high_quality_set() {
        let cases = vec![
            make_case("Happy path registration"),
            make_case("Email already registered error"),
            make_case("Edge case empty form submission"),
            make_case("Security SQL injection attempt"),
        ];

        let report = score_test_cases(&cases, &scoring());
        assert!(report.score >= 0.70, "score was {}", report.score);
        assert_eq!(report.label, QualityLabel::High);
    }

    #[test]
    fn test_vague_expected_results_penalized() {
        let mut first = make_case("Vague one");
        first.expected_result = "It works correctly and everything is ok".to_string();
        let mut second = make_case("Vague two");
        second.expected_result = "Works fine and success is shown".to_string();

        let report = score_test_cases(&[first, second], &scoring());
        assert!(report.dimensions.expected_results < 0.8);
    }

    #[test]
    fn test_generic_preconditions_penalized() {
        let mut first = make_case("Generic one");
        first.preconditions = "N/A".to_string();
        let mut second = make_case("Generic two");
        second.preconditions = "the user is logged in".to_string();

        let report = score_test_cases(&[first, second], &scoring());
        assert!(report.dimensions.preconditions < 0.5);
    }

    #[test]
    fn test_terse_but_specific_precondition_scores_middle() {
        let mut case = make_case("Terse precondition");
        case.preconditions = "Cart has two items".to_string();

        let report = score_test_cases(&[case], &scoring());
        assert_eq!(report.dimensions.preconditions, 0.6);
    }

    #[test]
    fn test_all_dimensions_in_range() {
        let cases = vec![make_case("Same title"); 4];
        let report = score_test_cases(&cases, &scoring());

        let d = &report.dimensions;
        for value in [
            d.quantity,
            d.steps_depth,
            d.preconditions,
            d.expected_results,
            d.diversity,
        ] {
            assert!((0.0..=1.0).contains(&value), "{value}");
        }
        assert!((0.0..=1.0).contains(&report.score));
    }

    #[test]
    fn test_deterministic() {
        let cases = vec![
            make_case("Happy path checkout"),
            make_case("Declined card error"),
        ];
        let first = score_test_cases(&cases, &scoring());
        let second = score_test_cases(&cases, &scoring());
        assert_eq!(first, second);
    }

    #[test]
    fn test_medium_label() {
        let case = TestCase {
            title: "Password reset request".to_string(),
            preconditions: "None".to_string(),
            steps: vec!["Open the form".to_string(), "Submit it".to_string()],
            expected_result: "A reset link is sent to the registered address and it works"
                .to_string(),
        };

        let report = score_test_cases(&[case], &scoring());
        assert_eq!(report.label, QualityLabel::Medium);
    }

    #[test]
    fn test_needs_improvement_label() {
        let case = TestCase {
            title: "Login".to_string(),
            preconditions: "None".to_string(),
            steps: vec!["Open the page".to_string(), "Log in".to_string()],
            expected_result: "Everything works fine and looks good".to_string(),
        };

        let report = score_test_cases(&[case], &scoring());
        assert_eq!(report.label, QualityLabel::NeedsImprovement);
    }

    #[test]
    fn test_score_is_rounded_to_four_decimals() {
        let cases = vec![make_case("Rounding check case")];
        let report = score_test_cases(&cases, &scoring());
        let rescaled = report.score * 10_000.0;
        assert!((rescaled - rescaled.round()).abs() < 1e-9);
    }

    #[test]
    fn test_label_serialization() {
        assert_eq!(
            serde_json::to_string(&QualityLabel::NeedsImprovement).unwrap(),
            "\"needs_improvement\""
        );
        assert_eq!(serde_json::to_string(&QualityLabel::High).unwrap(), "\"high\"");
    }
}
