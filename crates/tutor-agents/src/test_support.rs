//! Stub model client and on-disk fixtures shared by the agent tests.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tutor_ai::{AiClient, AiError, AiResponse, Message, ModelRegistry, TokenUsage};

use crate::settings::AgentSettings;

/// Registry name the stub client is registered under.
pub(crate) const STUB_MODEL: &str = "stub";

/// Returns scripted replies in order and records every request.
pub(crate) struct ScriptedClient {
    replies: Mutex<VecDeque<Result<String, AiError>>>,
    requests: Mutex<Vec<Vec<Message>>>,
}

impl ScriptedClient {
    pub(crate) fn new(replies: Vec<Result<String, AiError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn replying<'a>(replies: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(replies.into_iter().map(|r| Ok(r.to_string())).collect())
    }

    pub(crate) fn requests(&self) -> Vec<Vec<Message>> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> Vec<Message> {
        self.requests().pop().unwrap_or_default()
    }
}

#[async_trait]
impl AiClient for ScriptedClient {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
        self.requests.lock().unwrap().push(messages.to_vec());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AiError::ApiError("no scripted reply left".into())))?;
        Ok(AiResponse {
            content: reply,
            usage: TokenUsage {
                input_tokens: 10,
                output_tokens: 5,
            },
        })
    }
}

/// Temporary `prompts/` + `content/intro/` tree with a stub model.
pub(crate) struct Fixture {
    _dir: tempfile::TempDir,
    pub(crate) settings: AgentSettings,
    pub(crate) models: ModelRegistry,
    pub(crate) client: Arc<ScriptedClient>,
}

impl Fixture {
    pub(crate) fn new(client: ScriptedClient) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let settings = AgentSettings::rooted_at(dir.path()).with_model(STUB_MODEL);
        std::fs::create_dir_all(&settings.prompts_dir).unwrap();
        std::fs::create_dir_all(&settings.intro_dir).unwrap();

        let client = Arc::new(client);
        let mut models = ModelRegistry::builtin();
        models.register_client(STUB_MODEL, client.clone());

        Self {
            _dir: dir,
            settings,
            models,
            client,
        }
    }

    pub(crate) fn replying<'a>(replies: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(ScriptedClient::replying(replies))
    }

    /// Fixture whose model must not be called.
    pub(crate) fn silent() -> Self {
        Self::new(ScriptedClient::new(Vec::new()))
    }

    pub(crate) fn write_prompt(&self, name: &str, content: &str) -> PathBuf {
        let path = self.settings.prompt_path(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub(crate) fn write_intro(&self, name: &str, content: &str) -> PathBuf {
        let path = self.settings.intro_path(name);
        std::fs::write(&path, content).unwrap();
        path
    }
}
