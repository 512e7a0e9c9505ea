use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields.";
pub const MISSING_API_KEY_MESSAGE: &str =
    "GROQ_API_KEY is not set. Add it to your environment to enable generation.";
pub const UPSTREAM_FALLBACK_MESSAGE: &str = "AI request failed.";
pub const EMPTY_RESPONSE_MESSAGE: &str = "No content returned from AI.";
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON response from AI.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client-correctable input problem.
    #[error("{0}")]
    Validation(String),

    /// Server is missing configuration needed to serve the request.
    #[error("{0}")]
    Configuration(String),

    /// The chat-completion API failed; carries its message when it gave one.
    #[error("{0}")]
    Upstream(String),

    #[error("No content returned from AI.")]
    EmptyResponse,

    #[error("Invalid JSON response from AI.")]
    Parse,

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_)
            | AppError::Upstream(_)
            | AppError::EmptyResponse
            | AppError::Parse
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingApiKey => AppError::Configuration(MISSING_API_KEY_MESSAGE.to_string()),
            LlmError::Api { message, .. } => {
                AppError::Upstream(message.unwrap_or_else(|| UPSTREAM_FALLBACK_MESSAGE.to_string()))
            }
            LlmError::Http(e) => AppError::Upstream(e.to_string()),
            LlmError::EmptyContent => AppError::EmptyResponse,
            LlmError::Extract(_) => AppError::Parse,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        match &self {
            AppError::Validation(msg) => tracing::debug!("Rejected request: {msg}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            _ => tracing::error!("Generation failed: {message}"),
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        (status, serde_json::from_slice(&body).expect("json body"))
    }

    #[tokio::test]
    async fn test_validation_error_is_bad_request_with_flat_error_body() {
        let (status, body) = render(AppError::Validation(MISSING_FIELDS_MESSAGE.into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing required fields." }));
    }

    #[tokio::test]
    async fn test_server_side_errors_are_500() {
        for err in [
            AppError::Configuration(MISSING_API_KEY_MESSAGE.into()),
            AppError::Upstream("rate limited".into()),
            AppError::EmptyResponse,
            AppError::Parse,
            AppError::Internal(anyhow::anyhow!("boom")),
        ] {
            let (status, body) = render(err).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert!(!body["error"].as_str().unwrap_or_default().is_empty());
        }
    }

    #[test]
    fn test_llm_api_error_passes_upstream_message_through() {
        let err = AppError::from(LlmError::Api {
            status: 401,
            message: Some("Invalid API Key".into()),
        });
        assert_eq!(err.to_string(), "Invalid API Key");
    }

    #[test]
    fn test_llm_api_error_without_message_uses_fallback() {
        let err = AppError::from(LlmError::Api {
            status: 503,
            message: None,
        });
        assert_eq!(err.to_string(), UPSTREAM_FALLBACK_MESSAGE);
    }

    #[test]
    fn test_missing_key_maps_to_configuration_error() {
        let err = AppError::from(LlmError::MissingApiKey);
        assert!(matches!(err, AppError::Configuration(_)));
        assert_eq!(err.to_string(), MISSING_API_KEY_MESSAGE);
    }

    #[test]
    fn test_response_shape_errors_use_fixed_messages() {
        assert_eq!(
            AppError::from(LlmError::EmptyContent).to_string(),
            "No content returned from AI."
        );
        assert_eq!(
            AppError::from(LlmError::Extract(crate::llm_client::ExtractError)).to_string(),
            "Invalid JSON response from AI."
        );
    }
}
