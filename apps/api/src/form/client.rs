//! HTTP client the form uses to reach `POST /api/generate`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::generation::models::GenerationRequest;

pub const GENERATE_FALLBACK_MESSAGE: &str = "Failed to generate ads.";

#[derive(Debug, Error)]
pub enum ClientError {
    /// The endpoint answered with a non-success status.
    #[error("{0}")]
    Endpoint(String),

    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

/// Anything that can turn a form submission into generated content.
#[async_trait]
pub trait GenerateClient: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<Value, ClientError>;
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    error: Option<String>,
}

/// Posts form submissions to a running VoiceAds API.
#[derive(Clone)]
pub struct HttpGenerateClient {
    client: Client,
    endpoint: String,
}

impl HttpGenerateClient {
    /// `base_url` is the API origin, e.g. `http://localhost:8080`.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self::with_client(client, base_url)
    }

    fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/api/generate", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GenerateClient for HttpGenerateClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<Value, ClientError> {
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Generate endpoint returned {status}: {body}");
            let message = serde_json::from_str::<ErrorPayload>(&body)
                .ok()
                .and_then(|p| p.error)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| GENERATE_FALLBACK_MESSAGE.to_string());
            return Err(ClientError::Endpoint(message));
        }

        Ok(response.json().await?)
    }
}
