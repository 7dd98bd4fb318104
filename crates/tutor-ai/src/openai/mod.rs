//! OpenAI-compatible chat-completions client.
//!
//! Implements the `AiClient` trait against `POST {base_url}/chat/completions`.
//! The same wire format is served by OpenAI and by Ollama's `/v1`
//! compatibility layer, so one client covers both providers.

mod api;
mod client;
mod config;

pub use client::ChatCompletionsClient;
pub use config::ChatCompletionsConfig;
