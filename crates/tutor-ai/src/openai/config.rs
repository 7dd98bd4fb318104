//! Chat-completions client configuration.

use std::fmt;

pub(crate) const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub(crate) const OLLAMA_DEFAULT_HOST: &str = "http://localhost:11434";

/// Chat-completions client configuration.
#[derive(Clone)]
pub struct ChatCompletionsConfig {
    /// Base URL up to and including the API version segment, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    /// Bearer token; local servers usually need none.
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl fmt::Debug for ChatCompletionsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatCompletionsConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &self.api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl ChatCompletionsConfig {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            model: model.into(),
            max_tokens: 4096,
            temperature: 0.7,
        }
    }

    /// OpenAI endpoint, key from `OPENAI_API_KEY`.
    ///
    /// `OPENAI_BASE_URL` overrides the endpoint (proxies, Azure-style gateways).
    /// A missing key is not an error here: the first request reports it.
    pub fn openai_from_env(model: impl Into<String>) -> Self {
        let base_url = env_value("OPENAI_BASE_URL").unwrap_or_else(|| OPENAI_BASE_URL.to_string());
        let mut config = Self::new(base_url, model);
        config.api_key = env_value("OPENAI_API_KEY");
        config
    }

    /// Local Ollama server, host from `OLLAMA_HOST`.
    pub fn ollama_from_env(model: impl Into<String>) -> Self {
        let host = env_value("OLLAMA_HOST").unwrap_or_else(|| OLLAMA_DEFAULT_HOST.into());
        Self::new(ollama_base_url(&host), model)
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Full URL of the completions endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Value of `name`, treating an unset or blank variable as absent.
fn env_value(name: &str) -> Option<String> {
    non_blank(std::env::var(name).ok())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// `OLLAMA_HOST` is often given as bare `host:port`.
fn ollama_base_url(host: &str) -> String {
    let host = host.trim_end_matches('/');
    if host.contains("://") {
        format!("{host}/v1")
    } else {
        format!("http://{host}/v1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ChatCompletionsConfig::new("https://api.openai.com/v1/", "gpt-4o");
        assert_eq!(
            config.endpoint(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn ollama_host_without_scheme_gets_http() {
        assert_eq!(ollama_base_url("127.0.0.1:11434"), "http://127.0.0.1:11434/v1");
        assert_eq!(
            ollama_base_url("http://gpu-box:11434/"),
            "http://gpu-box:11434/v1"
        );
    }

    #[test]
    fn blank_env_values_count_as_unset() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(Some("  \t".into())), None);
        assert_eq!(non_blank(Some("sk-test".into())), Some("sk-test".to_string()));
    }

    #[test]
    fn empty_env_var_reads_as_none() {
        std::env::set_var("TUTOR_CONFIG_TEST_EMPTY_KEY", "");
        assert_eq!(env_value("TUTOR_CONFIG_TEST_EMPTY_KEY"), None);
        std::env::set_var("TUTOR_CONFIG_TEST_EMPTY_KEY", "sk-live");
        assert_eq!(
            env_value("TUTOR_CONFIG_TEST_EMPTY_KEY").as_deref(),
            Some("sk-live")
        );
    }

    #[test]
    fn openai_from_env_ignores_empty_key() {
        std::env::set_var("OPENAI_API_KEY", "");
        let config = ChatCompletionsConfig::openai_from_env("gpt-4o-mini");
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = ChatCompletionsConfig::new(OPENAI_BASE_URL, "gpt-4o").with_api_key("sk-secret");
        let dbg = format!("{config:?}");
        assert!(!dbg.contains("sk-secret"));
        assert!(dbg.contains("[REDACTED]"));
    }

    #[test]
    fn builder_methods_override_defaults() {
        let config = ChatCompletionsConfig::new(OPENAI_BASE_URL, "gpt-4o")
            .with_model("gpt-4o-mini")
            .with_max_tokens(1024)
            .with_temperature(0.2);
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.temperature, 0.2);
        assert!(config.api_key.is_none());
    }
}
