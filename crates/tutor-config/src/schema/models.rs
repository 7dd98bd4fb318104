//! Model selection configuration.

use serde::{Deserialize, Serialize};
use tutor_ai::{ModelConfig, ModelRegistry};

/// Which model agents use, plus any models beyond the built-ins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelsConfig {
    /// Registry name used by every agent.
    pub default: String,
    /// Extra models, registered alongside the built-ins (same name replaces a built-in).
    pub custom: Vec<ModelConfig>,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            default: "gpt-4o-mini".to_string(),
            custom: Vec::new(),
        }
    }
}

impl ModelsConfig {
    /// Built-in registry extended with the custom models.
    pub fn registry(&self) -> ModelRegistry {
        let mut registry = ModelRegistry::builtin();
        for model in &self.custom {
            registry.register(model.clone());
        }
        registry
    }
}
