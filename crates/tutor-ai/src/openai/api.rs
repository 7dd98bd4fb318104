//! AiClient trait implementation for ChatCompletionsClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiClient, AiError, AiResponse, Message};

use super::client::ChatCompletionsClient;

#[async_trait]
impl AiClient for ChatCompletionsClient {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(messages);
        let url = self.config.endpoint();

        debug!(model = %self.config.model, %url, messages = messages.len(), "chat completion request");

        let mut request = self.http.post(&url).json(&body);
        if let Some(ref key) = self.config.api_key {
            request = request.bearer_auth(key);
        } else if url.starts_with(super::config::OPENAI_BASE_URL) {
            return Err(AiError::ApiError(
                "OpenAI API not configured. Set OPENAI_API_KEY.".into(),
            ));
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                AiError::Timeout
            } else {
                AiError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        self.parse_response(json)
    }
}
