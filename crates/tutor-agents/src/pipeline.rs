//! Prompt + model bound to the session store.
//!
//! The pipeline owns history management for a turn: it reads the prior
//! messages, sends `[system, history.., input]` to the model and appends
//! the input and the reply. Agents never touch history around `chat`.

use std::sync::Arc;

use tracing::debug;
use tutor_ai::{AiClient, AiResponse, Message};
use tutor_common::SessionId;

use crate::error::AgentError;
use crate::session::SessionStore;

pub struct ChatPipeline {
    system_prompt: String,
    client: Arc<dyn AiClient>,
    store: SessionStore,
}

impl ChatPipeline {
    pub fn new(
        system_prompt: impl Into<String>,
        client: Arc<dyn AiClient>,
        store: SessionStore,
    ) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            client,
            store,
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Run one turn for `session_id`.
    ///
    /// History is only written after the model answers, so a failed call
    /// leaves it untouched.
    pub async fn invoke(
        &self,
        input: Message,
        session_id: &SessionId,
    ) -> Result<AiResponse, AgentError> {
        let history = self.store.get_history(session_id.as_str());
        let _guard = history
            .try_begin_turn()
            .ok_or_else(|| AgentError::SessionBusy(session_id.clone()))?;

        let prior = history.messages();
        let mut messages = Vec::with_capacity(prior.len() + 2);
        messages.push(Message::system(&self.system_prompt));
        messages.extend(prior);
        messages.push(input.clone());

        debug!(session = %session_id, messages = messages.len(), "invoking model");
        let response = self.client.send_message(&messages).await?;
        debug!(session = %session_id, reply = %response.content, "model replied");

        history.extend([input, Message::ai(&response.content)]);
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedClient;
    use tutor_ai::{AiError, Role};

    #[tokio::test]
    async fn invoke_sends_system_history_and_input() {
        let client = Arc::new(ScriptedClient::replying(["first", "second"]));
        let store = SessionStore::new();
        let pipeline = ChatPipeline::new("Be brief.", client.clone(), store.clone());
        let sid = SessionId::new("s");

        pipeline.invoke(Message::human("one"), &sid).await.unwrap();
        let reply = pipeline.invoke(Message::human("two"), &sid).await.unwrap();
        assert_eq!(reply.content, "second");

        let requests = client.requests();
        assert_eq!(requests.len(), 2);
        let last = &requests[1];
        let roles: Vec<Role> = last.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::System, Role::Human, Role::Ai, Role::Human]);
        assert_eq!(last[0].content, "Be brief.");
        assert_eq!(last[3].content, "two");

        assert_eq!(store.get_history("s").len(), 4);
    }

    #[tokio::test]
    async fn failed_invoke_leaves_history_untouched() {
        let client = Arc::new(ScriptedClient::new(vec![Err(AiError::RateLimited)]));
        let store = SessionStore::new();
        store.get_history("s").add_ai_message("welcome");
        let pipeline = ChatPipeline::new("p", client, store.clone());

        let err = pipeline
            .invoke(Message::human("hi"), &SessionId::new("s"))
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::Model(AiError::RateLimited)));
        assert_eq!(store.get_history("s").len(), 1);
    }

    #[tokio::test]
    async fn concurrent_turn_on_same_session_is_rejected() {
        let client = Arc::new(ScriptedClient::replying(["ok"]));
        let store = SessionStore::new();
        let pipeline = ChatPipeline::new("p", client, store.clone());

        let history = store.get_history("s");
        let _held = history.try_begin_turn().unwrap();

        let err = pipeline
            .invoke(Message::human("hi"), &SessionId::new("s"))
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::SessionBusy(ref id) if id.as_str() == "s"));
        assert!(history.is_empty());
    }
}
