//! Startup-populated collection of scenario agents.

use std::collections::HashMap;

use tracing::info;
use tutor_ai::ModelRegistry;

use super::ScenarioAgent;
use crate::agent::ChatAgent;
use crate::error::AgentError;
use crate::session::SessionStore;
use crate::settings::AgentSettings;

/// Scenario agents by key. Filled at startup; lookups never create agents.
#[derive(Default)]
pub struct ScenarioRegistry {
    agents: HashMap<String, ScenarioAgent>,
    /// Keys in registration order, for menus.
    order: Vec<String>,
}

impl ScenarioRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every scenario in `keys`, failing on the first broken one.
    pub fn load<S: AsRef<str>>(
        keys: &[S],
        settings: &AgentSettings,
        models: &ModelRegistry,
        store: &SessionStore,
    ) -> Result<Self, AgentError> {
        let mut registry = Self::new();
        for key in keys {
            let agent = ScenarioAgent::new(key.as_ref(), settings, models, store.clone(), None)?;
            registry.register(agent);
        }
        info!(count = registry.len(), "scenarios loaded");
        Ok(registry)
    }

    /// Add a scenario; a second agent with the same key replaces the first.
    pub fn register(&mut self, agent: ScenarioAgent) {
        let key = agent.key().to_string();
        if self.agents.insert(key.clone(), agent).is_none() {
            self.order.push(key);
        }
    }

    pub fn get(&self, key: &str) -> Result<&ScenarioAgent, AgentError> {
        self.agents
            .get(key)
            .ok_or_else(|| AgentError::UnknownScenario(key.to_string()))
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut ScenarioAgent, AgentError> {
        self.agents
            .get_mut(key)
            .ok_or_else(|| AgentError::UnknownScenario(key.to_string()))
    }

    /// Open the session of scenario `key` and return its opening message.
    pub fn start_session(&self, key: &str) -> Result<String, AgentError> {
        Ok(self.get(key)?.start_new_session())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.agents.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
