//! Test generation endpoint handlers

use axum::extract::State;
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, GenerateRequest, GenerateResponse, Json, validate_generate_request,
};
use crate::domain::generation::generate_test_cases;

/// Example user stories for quick manual testing
#[derive(Debug, Clone, Serialize)]
pub struct ExampleStory {
    pub label: &'static str,
    pub story: &'static str,
}

const EXAMPLES: &[ExampleStory] = &[
    ExampleStory {
        label: "Password recovery",
        story: "As a user I want to recover my password so I can access the system again.",
    },
    ExampleStory {
        label: "Shopping cart",
        story: "As a customer I want to add products to my cart so I can buy them later.",
    },
    ExampleStory {
        label: "File upload",
        story: "As a user I want to upload PDF documents to my profile so my files are available in the cloud.",
    },
    ExampleStory {
        label: "Push notifications",
        story: "As a user I want to receive push notifications when a new offer is available.",
    },
    ExampleStory {
        label: "Card payment",
        story: "As a customer I want to pay my order with a credit card to complete my purchase securely.",
    },
];

/// POST /v1/generate-tests
pub async fn generate_tests(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let request_id = Uuid::new_v4();

    info!(
        request_id = %request_id,
        story_chars = request.user_story.chars().count(),
        "Processing generate-tests request"
    );

    validate_generate_request(&request)?;

    let outcome = generate_test_cases(
        &request.user_story,
        state.provider.as_ref(),
        &state.settings,
        &state.scoring,
    )
    .await
    .map_err(|err| {
        error!(request_id = %request_id, error = %err, "Generation failed");
        ApiError::from(err)
    })?;

    Ok(Json(outcome.into()))
}

/// GET /v1/examples
pub async fn list_examples() -> Json<&'static [ExampleStory]> {
    Json(EXAMPLES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::json;

    use crate::domain::DomainError;
    use crate::domain::generation::GenerationSettings;
    use crate::domain::llm::{FinishReason, LlmResponse, MockLlmProvider};
    use crate::domain::quality::ScoringConfig;

    fn state_with(provider: MockLlmProvider) -> AppState {
        AppState {
            provider: Arc::new(provider),
            settings: Arc::new(GenerationSettings {
                model: "gpt-4o-mini".to_string(),
                temperature: 0.3,
                max_tokens: 2048,
                top_p: 0.95,
                max_retries: 2,
            }),
            scoring: Arc::new(ScoringConfig::default()),
        }
    }

    fn valid_llm_payload() -> String {
        json!({
            "test_cases": [{
                "title": "Happy path checkout",
                "preconditions": "Cart contains two in-stock items and a saved card",
                "steps": ["Open the cart", "Confirm the order", "Authorize the payment"],
                "expected_result": "Order confirmation page shows the order number and total"
            }]
        })
        .to_string()
    }

    fn request(story: &str) -> GenerateRequest {
        GenerateRequest {
            user_story: story.to_string(),
        }
    }

    #[tokio::test]
    async fn test_generate_tests_success() {
        let provider = MockLlmProvider::new().then_ok(LlmResponse::new(
            valid_llm_payload(),
            "gpt-4o-mini",
            FinishReason::Stop,
        ));

        let Json(response) = generate_tests(
            State(state_with(provider)),
            Json(request("As a customer I want to check out my cart")),
        )
        .await
        .unwrap();

        assert_eq!(response.test_cases.len(), 1);
        assert_eq!(response.meta.attempts, 1);
        assert!(!response.meta.was_repaired);
    }

    #[tokio::test]
    async fn test_generate_tests_rejects_short_story_without_llm_call() {
        let state = state_with(MockLlmProvider::new());

        let error = generate_tests(State(state), Json(request("too short")))
            .await
            .unwrap_err();

        assert_eq!(error.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generate_tests_maps_timeout_to_504() {
        let provider = MockLlmProvider::new().then_err(DomainError::timeout(30));

        let error = generate_tests(
            State(state_with(provider)),
            Json(request("As a customer I want to check out my cart")),
        )
        .await
        .unwrap_err();

        assert_eq!(error.status, StatusCode::GATEWAY_TIMEOUT);
    }

    #[tokio::test]
    async fn test_generate_tests_maps_exhausted_retries_to_502() {
        let provider = MockLlmProvider::new()
            .then_ok(LlmResponse::new("garbage", "gpt-4o-mini", FinishReason::Stop))
            .then_ok(LlmResponse::new("garbage", "gpt-4o-mini", FinishReason::Stop))
            .then_ok(LlmResponse::new("garbage", "gpt-4o-mini", FinishReason::Stop));

        let error = generate_tests(
            State(state_with(provider)),
            Json(request("As a customer I want to check out my cart")),
        )
        .await
        .unwrap_err();

        assert_eq!(error.status, StatusCode::BAD_GATEWAY);
        assert!(error.response.error.message.contains("garbage"));
    }

    #[tokio::test]
    async fn test_list_examples_returns_fixtures() {
        let Json(examples) = list_examples().await;
        assert_eq!(examples.len(), 5);
        assert!(examples.iter().all(|e| !e.story.is_empty()));
    }
}
