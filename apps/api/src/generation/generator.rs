//! Ad generation — validates the request, builds the prompt, and runs the
//! single chat-completion call.
//!
//! Flow: validate → build_prompt → LlmClient::complete_json → JSON value.
//! The extracted value is returned as-is; the typed `GenerationResult` is a
//! view for consumers, not a gate.

use serde_json::Value;
use tracing::info;

use crate::errors::{AppError, MISSING_FIELDS_MESSAGE};
use crate::generation::models::GenerationRequest;
use crate::generation::prompts::{build_prompt, PromptInput};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;

/// Returns the field's value if it is present and not blank.
fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.trim().is_empty())
}

/// Checks the four required fields and borrows them for prompt building.
pub fn validate(request: &GenerationRequest) -> Result<PromptInput<'_>, AppError> {
    match (
        required(&request.business_category),
        required(&request.primary_goal),
        required(&request.brand_tone),
        required(&request.reviews),
    ) {
        (Some(business_category), Some(primary_goal), Some(brand_tone), Some(reviews)) => {
            Ok(PromptInput {
                business_category,
                primary_goal,
                brand_tone,
                reviews,
            })
        }
        _ => Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string())),
    }
}

/// Runs one generation request end to end.
pub async fn generate(llm: &LlmClient, request: &GenerationRequest) -> Result<Value, AppError> {
    let input = validate(request)?;

    info!(
        "Generating ads: category={:?} goal={:?} tone={:?} business={:?} formats={:?}",
        input.business_category,
        input.primary_goal,
        input.brand_tone,
        request.business_name.as_deref().unwrap_or(""),
        request.output_formats,
    );

    let prompt = build_prompt(&input);
    let value = llm.complete_json(&prompt, JSON_ONLY_SYSTEM).await?;

    Ok(value)
}
