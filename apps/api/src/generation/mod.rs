// Ad generation: prompt templating, the single LLM call, and the HTTP endpoint.
// All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
