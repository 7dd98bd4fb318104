//! Scenario role-play agents.
//!
//! A scenario is an agent named after its key, with its own prompt file
//! and an intro file whose messages open a fresh session. Unlike prompts,
//! intro files are mandatory: a bad one fails construction.

mod registry;

use tutor_ai::ModelRegistry;
use tutor_common::SessionId;
use tutor_config::IntroSelection;

use crate::agent::{Agent, ChatAgent};
use crate::error::AgentError;
use crate::intro::IntroMessages;
use crate::session::SessionStore;
use crate::settings::AgentSettings;

pub use registry::ScenarioRegistry;

pub struct ScenarioAgent {
    agent: Agent,
    intros: IntroMessages,
    selection: IntroSelection,
}

impl ScenarioAgent {
    /// Build the agent for `scenario`, reading
    /// `<prompts_dir>/<scenario>_prompt.txt` and `<intro_dir>/<scenario>.json`.
    pub fn new(
        scenario: &str,
        settings: &AgentSettings,
        models: &ModelRegistry,
        store: SessionStore,
        session_id: Option<SessionId>,
    ) -> Result<Self, AgentError> {
        let intros = IntroMessages::load(&settings.intro_path(scenario))?;
        let agent = Agent::builder(scenario, settings.prompt_path(scenario))
            .maybe_session_id(session_id)
            .model(&settings.model)
            .build(models, store)?;

        Ok(Self {
            agent,
            intros,
            selection: settings.intro_selection,
        })
    }

    /// Scenario key; same as the agent name.
    pub fn key(&self) -> &str {
        self.agent.name()
    }

    pub fn intros(&self) -> &IntroMessages {
        &self.intros
    }

    pub fn intro_selection(&self) -> IntroSelection {
        self.selection
    }
}

impl ChatAgent for ScenarioAgent {
    fn agent(&self) -> &Agent {
        &self.agent
    }

    fn agent_mut(&mut self) -> &mut Agent {
        &mut self.agent
    }

    /// Open with an intro message instead of the generic welcome.
    fn start_new_session(&self) -> String {
        self.agent
            .start_session_with(|| self.intros.select(self.selection).to_string())
    }
}
