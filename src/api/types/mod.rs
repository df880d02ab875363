//! API request/response types

pub mod error;
pub mod generate;
pub mod json;

pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};
pub use generate::{
    GenerateRequest, GenerateResponse, ResponseMeta, USER_STORY_CHARS, validate_generate_request,
};
pub use json::Json;
