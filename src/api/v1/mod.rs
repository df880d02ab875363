//! v1 API endpoints

pub mod generate;

use axum::{
    Router,
    routing::{get, post},
};

use super::state::AppState;

pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/generate-tests", post(generate::generate_tests))
        .route("/examples", get(generate::list_examples))
}
