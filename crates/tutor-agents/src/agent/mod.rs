//! The base conversational agent.
//!
//! An agent is created ready to chat: construction loads the prompt
//! (falling back to the default prompt) and binds it to the selected model.
//! [`Agent::reload_prompt`] rebinds in place when the prompt file changed.

mod builder;


use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tracing::{debug, info};
use tutor_ai::{AiClient, Message, TokenTracker, TokenUsage};
use tutor_common::SessionId;

use crate::error::AgentError;
use crate::pipeline::ChatPipeline;
use crate::prompt;
use crate::session::{ChatHistory, SessionStore};

pub use builder::AgentBuilder;

pub struct Agent {
    name: String,
    session_id: SessionId,
    prompt_path: PathBuf,
    prompt: String,
    model_name: String,
    welcome: String,
    client: Arc<dyn AiClient>,
    store: SessionStore,
    pipeline: ChatPipeline,
    tracker: Mutex<TokenTracker>,
}

impl Agent {
    pub fn builder(name: impl Into<String>, prompt_path: impl Into<PathBuf>) -> AgentBuilder {
        AgentBuilder::new(name, prompt_path)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn prompt_path(&self) -> &Path {
        &self.prompt_path
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// The system prompt the bound pipeline currently sends.
    pub fn pipeline_prompt(&self) -> &str {
        self.pipeline.system_prompt()
    }

    /// This agent's session history.
    pub fn history(&self) -> ChatHistory {
        self.store.get_history(self.session_id.as_str())
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Cumulative token usage of this agent's model calls.
    pub fn token_usage(&self) -> TokenUsage {
        self.tracker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .total()
            .clone()
    }

    /// Number of successful model calls behind [`Self::token_usage`].
    pub fn model_calls(&self) -> u64 {
        self.tracker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .call_count()
    }

    /// Open the session: seed an empty history with `opening`, otherwise
    /// return the latest message unchanged.
    pub fn start_session_with(&self, opening: impl FnOnce() -> String) -> String {
        let history = self.history();
        debug!("[history]: {history:?}");
        history
            .last_or_insert_with(|| Message::ai(opening()))
            .content
    }

    /// Open the session with the welcome message.
    pub fn start_new_session(&self) -> String {
        self.start_session_with(|| self.welcome.clone())
    }

    /// Send `user_input` and return the model's reply.
    ///
    /// The pipeline records both the input and the reply in history.
    /// Model failures propagate unchanged; nothing is retried.
    pub async fn chat(&self, user_input: &str) -> Result<String, AgentError> {
        let response = self
            .pipeline
            .invoke(Message::human(user_input), &self.session_id)
            .await?;

        self.tracker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record(&response.usage);

        debug!(agent = %self.name, "{response:?}");
        Ok(response.content)
    }

    /// Re-read the prompt file and rebuild the pipeline if it changed.
    ///
    /// Returns whether a rebuild happened.
    pub fn reload_prompt(&mut self) -> bool {
        let reloaded = prompt::reload(&self.prompt_path, &self.prompt);
        if !reloaded.changed {
            return false;
        }

        info!(agent = %self.name, "prompt updated, rebuilding chat pipeline");
        self.prompt = reloaded.text;
        self.pipeline = ChatPipeline::new(
            self.prompt.clone(),
            Arc::clone(&self.client),
            self.store.clone(),
        );
        true
    }
}

/// Operations every tutor agent offers to a front end.
#[async_trait]
pub trait ChatAgent: Send + Sync {
    fn agent(&self) -> &Agent;

    fn agent_mut(&mut self) -> &mut Agent;

    fn start_new_session(&self) -> String {
        self.agent().start_new_session()
    }

    async fn chat(&self, user_input: &str) -> Result<String, AgentError> {
        self.agent().chat(user_input).await
    }

    fn reload_prompt(&mut self) -> bool {
        self.agent_mut().reload_prompt()
    }

    fn name(&self) -> &str {
        self.agent().name()
    }

    fn history(&self) -> ChatHistory {
        self.agent().history()
    }
}

impl ChatAgent for Agent {
    fn agent(&self) -> &Agent {
        self
    }

    fn agent_mut(&mut self) -> &mut Agent {
        self
    }
}
