//! Free conversation practice.

use tutor_ai::ModelRegistry;
use tutor_common::SessionId;

use crate::agent::{Agent, ChatAgent};
use crate::error::AgentError;
use crate::session::SessionStore;
use crate::settings::AgentSettings;

pub struct ConversationAgent {
    agent: Agent,
}

impl ConversationAgent {
    pub const NAME: &'static str = "conversation";

    pub fn new(
        settings: &AgentSettings,
        models: &ModelRegistry,
        store: SessionStore,
        session_id: Option<SessionId>,
    ) -> Result<Self, AgentError> {
        let agent = Agent::builder(Self::NAME, settings.prompt_path(Self::NAME))
            .maybe_session_id(session_id)
            .model(&settings.model)
            .build(models, store)?;
        Ok(Self { agent })
    }
}

impl ChatAgent for ConversationAgent {
    fn agent(&self) -> &Agent {
        &self.agent
    }

    fn agent_mut(&mut self) -> &mut Agent {
        &mut self.agent
    }
}
