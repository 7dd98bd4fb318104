//! Agent construction.

use std::path::PathBuf;
use std::sync::Mutex;

use tracing::info;
use tutor_ai::{AiError, ModelRegistry, TokenTracker};
use tutor_common::SessionId;

use super::Agent;
use crate::error::AgentError;
use crate::pipeline::ChatPipeline;
use crate::prompt;
use crate::session::SessionStore;
use crate::WELCOME_MESSAGE;

/// Collects the optional parts of an [`Agent`].
#[derive(Debug, Clone)]
pub struct AgentBuilder {
    name: String,
    prompt_path: PathBuf,
    session_id: Option<SessionId>,
    model: String,
    welcome: String,
}

impl AgentBuilder {
    pub fn new(name: impl Into<String>, prompt_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            prompt_path: prompt_path.into(),
            session_id: None,
            model: "gpt-4o-mini".to_string(),
            welcome: WELCOME_MESSAGE.to_string(),
        }
    }

    /// Session to read and write; defaults to the agent name.
    pub fn session_id(mut self, session_id: impl Into<SessionId>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Like [`Self::session_id`], leaving the default in place for `None`.
    pub fn maybe_session_id(mut self, session_id: Option<SessionId>) -> Self {
        if session_id.is_some() {
            self.session_id = session_id;
        }
        self
    }

    /// Model registry name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Opening message for an empty history.
    pub fn welcome(mut self, welcome: impl Into<String>) -> Self {
        self.welcome = welcome.into();
        self
    }

    /// Load the prompt, resolve the model and bind the pipeline.
    ///
    /// Prompt problems fall back to the default prompt; only an
    /// unregistered model name fails.
    pub fn build(self, models: &ModelRegistry, store: SessionStore) -> Result<Agent, AgentError> {
        let prompt = prompt::load_or_default(&self.prompt_path);

        let client = models.resolve(&self.model).map_err(|e| match e {
            AiError::UnknownModel(name) => AgentError::UnknownModel(name),
            other => AgentError::Model(other),
        })?;

        let session_id = self
            .session_id
            .unwrap_or_else(|| SessionId::new(self.name.clone()));
        let pipeline = ChatPipeline::new(prompt.clone(), client.clone(), store.clone());

        info!(agent = %self.name, session = %session_id, model = %self.model, "agent ready");

        Ok(Agent {
            name: self.name,
            session_id,
            prompt_path: self.prompt_path,
            prompt,
            model_name: self.model,
            welcome: self.welcome,
            client,
            store,
            pipeline,
            tracker: Mutex::new(TokenTracker::new()),
        })
    }
}
