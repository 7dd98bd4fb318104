//! Vocabulary drilling.
//!
//! Each round starts from a wiped session: the front end calls
//! [`VocabAgent::restart_session`] and then chats [`VOCAB_KICKOFF`] to get
//! the first batch of words. [`VocabAgent::start_round`] does both.

use tracing::debug;
use tutor_ai::ModelRegistry;
use tutor_common::SessionId;

use crate::agent::{Agent, ChatAgent};
use crate::error::AgentError;
use crate::session::{ChatHistory, SessionStore};
use crate::settings::AgentSettings;

/// User message that asks the model for a new round of words.
pub const VOCAB_KICKOFF: &str = "Let's do it";

pub struct VocabAgent {
    agent: Agent,
}

impl VocabAgent {
    pub const NAME: &'static str = "vocab_study";

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

    /// Wipe this session's history and return the (now empty) handle.
    pub fn restart_session(&self) -> ChatHistory {
        let session_id = self.agent.session_id();
        let history = self.agent.store().get_history(session_id.as_str());
        history.clear();
        debug!("[history][{session_id}]:{history:?}");
        history
    }

    /// Restart and request the first words of a new round.
    pub async fn start_round(&self) -> Result<String, AgentError> {
        self.restart_session();
        self.agent.chat(VOCAB_KICKOFF).await
    }
}

impl ChatAgent for VocabAgent {
    fn agent(&self) -> &Agent {
        &self.agent
    }

    fn agent_mut(&mut self) -> &mut Agent {
        &mut self.agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Fixture;
    use tutor_ai::Message;

    fn vocab(fixture: &Fixture, session_id: Option<SessionId>) -> VocabAgent {
        VocabAgent::new(&fixture.settings, &fixture.models, SessionStore::new(), session_id).unwrap()
    }

    #[test]
    fn initialization() {
        let fixture = Fixture::silent();
        let agent = vocab(&fixture, Some(SessionId::new("test_session")));
        assert_eq!(agent.name(), "vocab_study");
        assert!(agent
            .agent()
            .prompt_path()
            .ends_with("prompts/vocab_study_prompt.txt"));
        assert_eq!(agent.agent().session_id().as_str(), "test_session");
    }

    #[test]
    fn restart_session_empties_history() {
        let fixture = Fixture::silent();
        let agent = vocab(&fixture, Some(SessionId::new("test_session")));
        let history = agent.history();
        for i in 0..7 {
            history.add_user_message(format!("word {i}"));
        }

        let restarted = agent.restart_session();
        assert!(restarted.is_empty());
        assert!(restarted.ptr_eq(&history));
        assert_eq!(agent.history().len(), 0);
    }

    #[test]
    fn restart_on_empty_session_is_fine() {
        let fixture = Fixture::silent();
        let agent = vocab(&fixture, None);
        assert!(agent.restart_session().is_empty());
    }

    #[tokio::test]
    async fn start_round_wipes_then_kicks_off() {
        let fixture = Fixture::replying(["Word 1: apple", "Correct!", "Word 1: river"]);
        let agent = vocab(&fixture, None);

        agent.start_round().await.unwrap();
        agent.chat("apple means 苹果").await.unwrap();
        assert_eq!(agent.history().len(), 4);

        let reply = agent.start_round().await.unwrap();
        assert_eq!(reply, "Word 1: river");

        let messages = agent.history().messages();
        assert_eq!(
            messages,
            vec![Message::human(VOCAB_KICKOFF), Message::ai("Word 1: river")]
        );
    }
}
