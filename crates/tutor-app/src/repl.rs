//! Interactive line loop shared by every mode.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{error, info};
use tutor_agents::{AgentError, ChatAgent, Role, VocabAgent};
use tutor_common::TutorError;

/// Printed instead of the error itself when a turn fails.
pub const CHAT_FAILURE: &str = "Sorry, something went wrong. Please try again.";

const HELP: &str = "Commands: /reload, /restart (vocab), /history, /quit";

/// What the loop drives. Vocabulary drills also support `/restart`.
pub enum Target<'a> {
    Chat(&'a mut dyn ChatAgent),
    Vocab(&'a mut VocabAgent),
}

impl Target<'_> {
    fn agent(&self) -> &dyn ChatAgent {
        match self {
            Target::Chat(agent) => &**agent,
            Target::Vocab(agent) => &**agent,
        }
    }

    fn agent_mut(&mut self) -> &mut dyn ChatAgent {
        match self {
            Target::Chat(agent) => &mut **agent,
            Target::Vocab(agent) => &mut **agent,
        }
    }

    /// Opening line: the session opening, or the first words of a round.
    async fn open(&mut self) -> Result<String, AgentError> {
        match self {
            Target::Chat(agent) => Ok(agent.start_new_session()),
            Target::Vocab(agent) => agent.start_round().await,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    Reload,
    Restart,
    History,
    Help,
    Say(&'a str),
    Blank,
}

fn parse_input(line: &str) -> Input<'_> {
    match line.trim() {
        "" => Input::Blank,
        "/quit" | "/exit" => Input::Quit,
        "/reload" => Input::Reload,
        "/restart" => Input::Restart,
        "/history" => Input::History,
        "/help" => Input::Help,
        text => Input::Say(text),
    }
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::System => "system",
        Role::Human => "you",
        Role::Ai => "tutor",
    }
}

fn print_reply<W: Write>(
    out: &mut W,
    result: Result<String, AgentError>,
) -> Result<(), TutorError> {
    match result {
        Ok(reply) => writeln!(out, "tutor> {reply}")?,
        Err(e) => {
            error!("chat failed: {e}");
            writeln!(out, "{CHAT_FAILURE}")?;
        }
    }
    Ok(())
}

/// Run the loop until `/quit` or end of input.
pub async fn run<R, W>(mut target: Target<'_>, input: R, out: &mut W) -> Result<(), TutorError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    info!(
        agent = target.agent().name(),
        model = target.agent().agent().model_name(),
        "session started"
    );
    writeln!(out, "{HELP}")?;
    let opening = target.open().await;
    print_reply(out, opening)?;

    let mut lines = input.lines();
    loop {
        write!(out, "you> ")?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        match parse_input(&line) {
            Input::Blank => continue,
            Input::Quit => break,
            Input::Help => writeln!(out, "{HELP}")?,
            Input::Reload => {
                if target.agent_mut().reload_prompt() {
                    writeln!(out, "Prompt reloaded.")?;
                } else {
                    writeln!(out, "Prompt unchanged.")?;
                }
            }
            Input::Restart => match target {
                Target::Vocab(ref mut agent) => {
                    let result = agent.start_round().await;
                    print_reply(out, result)?;
                }
                Target::Chat(_) => writeln!(out, "/restart is only available in vocab mode.")?,
            },
            Input::History => {
                for message in target.agent().history().messages() {
                    writeln!(out, "[{}] {}", role_label(message.role), message.content)?;
                }
            }
            Input::Say(text) => {
                let result = target.agent().chat(text).await;
                print_reply(out, result)?;
            }
        }
    }

    let agent = target.agent().agent();
    let usage = agent.token_usage();
    info!(
        agent = agent.name(),
        calls = agent.model_calls(),
        input_tokens = usage.input_tokens,
        output_tokens = usage.output_tokens,
        total_tokens = usage.total_tokens(),
        "session finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use tutor_agents::{AgentSettings, ConversationAgent, SessionStore, WELCOME_MESSAGE};
    use tutor_ai::{AiClient, AiError, AiResponse, Message, ModelRegistry, TokenUsage};

    use super::*;

    struct Scripted(Mutex<VecDeque<Result<String, AiError>>>);

    #[async_trait]
    impl AiClient for Scripted {
        async fn send_message(&self, _messages: &[Message]) -> Result<AiResponse, AiError> {
            let reply = self
                .0
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(AiError::ApiError("empty".into())))?;
            Ok(AiResponse {
                content: reply,
                usage: TokenUsage::default(),
            })
        }
    }

    fn setup(replies: Vec<Result<String, AiError>>) -> (tempfile::TempDir, AgentSettings, ModelRegistry) {
        let dir = tempfile::tempdir().unwrap();
        let settings = AgentSettings::rooted_at(dir.path()).with_model("stub");
        std::fs::create_dir_all(&settings.prompts_dir).unwrap();
        let mut models = ModelRegistry::builtin();
        models.register_client("stub", Arc::new(Scripted(Mutex::new(replies.into()))));
        (dir, settings, models)
    }

    async fn drive(target: Target<'_>, script: &str) -> String {
        let mut out = Vec::new();
        run(target, script.as_bytes(), &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_input("  /quit "), Input::Quit);
        assert_eq!(parse_input("/reload"), Input::Reload);
        assert_eq!(parse_input(""), Input::Blank);
        assert_eq!(parse_input(" hello "), Input::Say("hello"));
    }

    #[tokio::test]
    async fn conversation_turns_and_history() {
        let (_dir, settings, models) = setup(vec![Ok("Hello, how can I help you?".into())]);
        let mut agent = ConversationAgent::new(&settings, &models, SessionStore::new(), None).unwrap();

        let output = drive(
            Target::Chat(&mut agent),
            "Hi, what can you do?\n/history\n/quit\nignored\n",
        )
        .await;

        assert!(output.contains(&format!("tutor> {WELCOME_MESSAGE}")));
        assert!(output.contains("tutor> Hello, how can I help you?"));
        assert!(output.contains("[you] Hi, what can you do?"));
        assert_eq!(agent.history().len(), 3);
    }

    #[tokio::test]
    async fn chat_failure_prints_generic_line_and_continues() {
        let (_dir, settings, models) = setup(vec![
            Err(AiError::RateLimited),
            Ok("Second try".into()),
        ]);
        let mut agent = ConversationAgent::new(&settings, &models, SessionStore::new(), None).unwrap();

        let output = drive(Target::Chat(&mut agent), "one\ntwo\n").await;
        assert!(output.contains(CHAT_FAILURE));
        assert!(output.contains("tutor> Second try"));
    }

    #[tokio::test]
    async fn restart_outside_vocab_is_refused() {
        let (_dir, settings, models) = setup(Vec::new());
        let mut agent = ConversationAgent::new(&settings, &models, SessionStore::new(), None).unwrap();
        let output = drive(Target::Chat(&mut agent), "/restart\n").await;
        assert!(output.contains("only available in vocab mode"));
        assert_eq!(agent.history().len(), 1);
    }

    #[tokio::test]
    async fn vocab_restart_starts_a_new_round() {
        let (_dir, settings, models) = setup(vec![
            Ok("Word: apple".into()),
            Ok("Word: river".into()),
        ]);
        let mut agent = VocabAgent::new(&settings, &models, SessionStore::new(), None).unwrap();

        let output = drive(Target::Vocab(&mut agent), "/restart\n").await;
        assert!(output.contains("tutor> Word: apple"));
        assert!(output.contains("tutor> Word: river"));
        assert_eq!(agent.history().len(), 2);
    }

    #[tokio::test]
    async fn reload_reports_change() {
        let (_dir, settings, models) = setup(Vec::new());
        let prompt = settings.prompt_path("conversation");
        std::fs::write(&prompt, "v1").unwrap();
        let mut agent = ConversationAgent::new(&settings, &models, SessionStore::new(), None).unwrap();
        std::fs::write(&prompt, "v2").unwrap();

        let output = drive(Target::Chat(&mut agent), "/reload\n/reload\n").await;
        assert!(output.contains("Prompt reloaded."));
        assert!(output.contains("Prompt unchanged."));
        assert_eq!(agent.agent().prompt(), "v2");
    }
}
