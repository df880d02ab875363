use serde::{Deserialize, Serialize};

/// One generated QA test case.
///
/// Field bounds are enforced by [`super::validate_set`], not on
/// construction: the struct mirrors the JSON schema the LLM is instructed
/// to produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub title: String,
    pub preconditions: String,
    pub steps: Vec<String>,
    pub expected_result: String,
}

/// The canonical parsed-and-validated output of one generation attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCaseSet {
    pub test_cases: Vec<TestCase>,
}
