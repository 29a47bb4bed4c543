//! Axum route handler for the Recommendation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::recommendation::models::{interpret_completion, RecommendationRequest};
use crate::recommendation::prompts::build_recommendation_prompt;
use crate::state::AppState;

pub const RECOMMEND_FAILED: &str = "Failed to process request";

/// POST /api/recommend
///
/// Topic + grade → prompt → completion API → cleaned JSON.
/// Model output that is not JSON still answers 200 with a single placeholder subtopic.
pub async fn handle_recommend(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) =
        payload.map_err(|e| AppError::internal(RECOMMEND_FAILED, anyhow::anyhow!(e.body_text())))?;

    let request = request.validate()?;
    info!(
        "Generating essay prompts: topic={:?}, grade={}, excluded={}",
        request.topic,
        request.grade.identifier,
        request.exclude.len()
    );

    let prompt = build_recommendation_prompt(&request);
    let raw = state
        .llm
        .complete(JSON_ONLY_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::internal(RECOMMEND_FAILED, e))?;
    debug!("Completion response: {raw}");

    Ok(match interpret_completion(&raw) {
        Ok(generated) => Json(generated).into_response(),
        Err(fallback) => (StatusCode::OK, Json(fallback)).into_response(),
    })
}
