use thiserror::Error;

/// Maximum number of characters of upstream response body kept in errors.
const BODY_EXCERPT_CHARS: usize = 200;

/// Maximum number of characters of raw LLM output kept for diagnostics.
const RAW_PREFIX_CHARS: usize = 300;

/// Pipeline errors.
///
/// The set is closed on purpose: the orchestrator matches on these variants
/// to decide between retrying and failing fast, and that match must stay
/// exhaustive.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    #[error("LLM request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("LLM network error: {message}")]
    Network { message: String },

    #[error("LLM upstream returned HTTP {status}: {body}")]
    UpstreamHttp { status: u16, body: String },

    #[error(
        "LLM output could not be parsed or repaired: {message} \
         (stop_reason={stop_reason}, raw prefix: {raw_prefix:?})"
    )]
    Parse {
        message: String,
        stop_reason: String,
        raw_prefix: String,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn timeout(seconds: u64) -> Self {
        Self::Timeout { seconds }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn upstream_http(status: u16, body: &str) -> Self {
        Self::UpstreamHttp {
            status,
            body: truncate_chars(body, BODY_EXCERPT_CHARS),
        }
    }

    pub fn parse(message: impl Into<String>, stop_reason: impl Into<String>, raw: &str) -> Self {
        Self::Parse {
            message: message.into(),
            stop_reason: stop_reason.into(),
            raw_prefix: truncate_chars(raw, RAW_PREFIX_CHARS),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
