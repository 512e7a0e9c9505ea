//! VoiceAds API: turns pasted customer reviews into ad copy with one LLM call.

pub mod config;
pub mod errors;
pub mod form;
pub mod generation;
pub mod llm_client;
pub mod routes;
pub mod state;
