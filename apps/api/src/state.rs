use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Nothing here is mutated per request; each generation call is independent.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
}
