//! Deterministic quality scoring for generated test case sets

mod config;
mod scorer;

pub use config::ScoringConfig;
pub use scorer::{QualityDimensions, QualityLabel, QualityReport, score_test_cases};
