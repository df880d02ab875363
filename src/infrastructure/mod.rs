//! Infrastructure layer: logging setup and the concrete LLM provider

pub mod llm;
pub mod logging;
