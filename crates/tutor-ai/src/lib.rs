//! Model layer for the language tutor.
//!
//! Provides:
//! - the `AiClient` capability every agent calls through
//! - a chat-completions client speaking the OpenAI wire format
//!   (OpenAI itself and local Ollama servers)
//! - a registry of named model configurations
//! - token usage tracking

pub mod models;
pub mod openai;
pub mod token_tracker;

use async_trait::async_trait;

pub use models::{ModelConfig, ModelRegistry, Provider};
pub use openai::{ChatCompletionsClient, ChatCompletionsConfig};
pub use token_tracker::TokenTracker;

#[async_trait]
pub trait AiClient: Send + Sync {
    /// Send the full message list (system prompt first) and return the reply.
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn human(content: impl Into<String>) -> Self {
        Self {
            role: Role::Human,
            content: content.into(),
        }
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self {
            role: Role::Ai,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    Human,
    Ai,
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Unknown model: {0}")]
    UnknownModel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_constructors_tag_roles() {
        assert_eq!(Message::system("p").role, Role::System);
        assert_eq!(Message::human("hi").role, Role::Human);
        assert_eq!(Message::ai("hello").role, Role::Ai);
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::ai("hey")).unwrap();
        assert_eq!(json, r#"{"role":"ai","content":"hey"}"#);
    }

    #[test]
    fn total_tokens_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 5,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }

    #[test]
    fn error_display() {
        assert_eq!(AiError::RateLimited.to_string(), "Rate limited");
        assert_eq!(
            AiError::UnknownModel("gpt-9".into()).to_string(),
            "Unknown model: gpt-9"
        );
    }
}
