//! Axum route handlers for the Generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;

use crate::errors::{AppError, MISSING_FIELDS_MESSAGE};
use crate::generation::generator::generate;
use crate::generation::models::GenerationRequest;
use crate::state::AppState;

/// POST /api/generate
///
/// Turns a business profile plus pasted reviews into ad copy with a single
/// LLM call. Returns the model's JSON object verbatim.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("Unreadable generate body: {rejection}");
        AppError::Validation(MISSING_FIELDS_MESSAGE.to_string())
    })?;

    let result = generate(&state.llm, &request).await?;
    Ok(Json(result))
}
