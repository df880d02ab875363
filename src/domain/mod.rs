//! Domain layer: the generation pipeline and its supporting types

pub mod error;
pub mod generation;
pub mod llm;
pub mod parsing;
pub mod quality;
pub mod test_case;

pub use error::DomainError;
pub use llm::{FinishReason, LlmProvider, LlmRequest, LlmResponse, Message, MessageRole};
pub use test_case::{TestCase, TestCaseSet};
