//! Parsing pipeline for raw LLM output: fence stripping, truncation-tolerant
//! JSON repair, and structural validation into a [`crate::domain::TestCaseSet`].

mod fence;
mod repair;
mod validate;

pub use fence::strip_fences;
pub use repair::repair_truncated_json;
pub use validate::parse_and_validate;
