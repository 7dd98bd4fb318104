//! Model registry: resolves a model name to a callable client.
//!
//! Agents select their model by name at construction time. The registry
//! holds named configurations (provider, model id, token limit, sampling
//! temperature) and turns them into `AiClient`s on demand. Unknown names
//! are rejected here rather than at request time.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::openai::{ChatCompletionsClient, ChatCompletionsConfig};
use crate::{AiClient, AiError};

/// Which backend serves a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[serde(rename = "openai")]
    OpenAi,
    Ollama,
}

/// A named model configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Registry key, e.g. `gpt-4o-mini`.
    pub name: String,
    pub provider: Provider,
    /// Provider-side model identifier.
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl ModelConfig {
    pub fn new(
        name: impl Into<String>,
        provider: Provider,
        model: impl Into<String>,
        max_tokens: u32,
        temperature: f64,
    ) -> Self {
        Self {
            name: name.into(),
            provider,
            model: model.into(),
            max_tokens,
            temperature,
        }
    }

    /// Client configuration with endpoint and credentials taken from the environment.
    pub fn client_config(&self) -> ChatCompletionsConfig {
        let base = match self.provider {
            Provider::OpenAi => ChatCompletionsConfig::openai_from_env(&self.model),
            Provider::Ollama => ChatCompletionsConfig::ollama_from_env(&self.model),
        };
        base.with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature)
    }
}

/// Names of the models every registry built with [`ModelRegistry::builtin`] knows.
pub const BUILTIN_MODELS: &[&str] = &["llama2", "gpt-4o-mini", "gpt-4o"];

/// Built-in model configurations.
pub fn builtin_models() -> Vec<ModelConfig> {
    vec![
        ModelConfig::new(
            "llama2",
            Provider::Ollama,
            "llama3.1:8b-instruct-q8_0",
            8192,
            0.8,
        ),
        ModelConfig::new("gpt-4o-mini", Provider::OpenAi, "gpt-4o-mini", 4096, 0.7),
        ModelConfig::new("gpt-4o", Provider::OpenAi, "gpt-4o", 4096, 0.7),
    ]
}

/// Resolves model names to clients.
#[derive(Default)]
pub struct ModelRegistry {
    /// Named configurations, turned into HTTP clients on resolve.
    configs: HashMap<String, ModelConfig>,
    /// Pre-built clients; take precedence over configurations.
    clients: HashMap<String, Arc<dyn AiClient>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with [`builtin_models`].
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for config in builtin_models() {
            registry.register(config);
        }
        registry
    }

    /// Register (or replace) a model configuration under its name.
    pub fn register(&mut self, config: ModelConfig) {
        self.configs.insert(config.name.clone(), config);
    }

    /// Register a ready-made client under a name.
    pub fn register_client(&mut self, name: impl Into<String>, client: Arc<dyn AiClient>) {
        self.clients.insert(name.into(), client);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.clients.contains_key(name) || self.configs.contains_key(name)
    }

    pub fn config(&self, name: &str) -> Option<&ModelConfig> {
        self.configs.get(name)
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .configs
            .keys()
            .chain(self.clients.keys())
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Resolve a model name into a client.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn AiClient>, AiError> {
        if let Some(client) = self.clients.get(name) {
            return Ok(Arc::clone(client));
        }

        let config = self
            .configs
            .get(name)
            .ok_or_else(|| AiError::UnknownModel(name.to_string()))?;

        debug!(name, provider = ?config.provider, model = %config.model, "building model client");
        let client = ChatCompletionsClient::new(config.client_config())?;
        Ok(Arc::new(client))
    }
}
