use serde::{Deserialize, Serialize};

/// Reason why the generation finished, as reported by the provider.
///
/// `Length` is the truncation signal: the output was cut off by the token
/// limit rather than completing naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    Unknown,
}

impl FinishReason {
    pub fn parse(reason: &str) -> Self {
        match reason {
            "stop" => Self::Stop,
            "length" => Self::Length,
            "content_filter" => Self::ContentFilter,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stop => "stop",
            Self::Length => "length",
            Self::ContentFilter => "content_filter",
            Self::Unknown => "unknown",
        }
    }
}

/// Raw result of one generation attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    pub text: String,
    pub model: String,
    pub finish_reason: FinishReason,
}

impl LlmResponse {
    pub fn new(
        text: impl Into<String>,
        model: impl Into<String>,
        finish_reason: FinishReason,
    ) -> Self {
        Self {
            text: text.into(),
            model: model.into(),
            finish_reason,
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.finish_reason == FinishReason::Length
    }
}
