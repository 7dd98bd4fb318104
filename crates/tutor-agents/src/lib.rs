//! Conversational tutoring agents.
//!
//! An [`Agent`] binds a prompt file, a model and a session history into one
//! conversational unit. Histories live in a [`SessionStore`] shared by all
//! agents of a process and keyed by session id (the agent's name unless
//! told otherwise).
//!
//! Specializations:
//! - [`ConversationAgent`]: free conversation with a fixed welcome line
//! - [`ScenarioAgent`]: role-play scenario opening with an intro message,
//!   collected in a [`ScenarioRegistry`]
//! - [`VocabAgent`]: vocabulary drill whose session is wiped between rounds

pub mod agent;
pub mod conversation;
pub mod error;
pub mod intro;
pub mod pipeline;
pub mod prompt;
pub mod scenario;
pub mod session;
pub mod settings;
pub mod vocab;

#[cfg(test)]
pub(crate) mod test_support;

pub use agent::{Agent, AgentBuilder, ChatAgent};
pub use conversation::ConversationAgent;
pub use error::{AgentError, IntroError, PromptError};
pub use intro::IntroMessages;
pub use pipeline::ChatPipeline;
pub use scenario::{ScenarioAgent, ScenarioRegistry};
pub use session::{ChatHistory, SessionStore};
pub use settings::AgentSettings;
pub use vocab::{VocabAgent, VOCAB_KICKOFF};

pub use tutor_ai::{Message, Role};
pub use tutor_common::SessionId;

/// First AI message of a fresh conversation.
pub const WELCOME_MESSAGE: &str = "欢迎！今天有什么我能帮忙的吗？";

/// Prompt used when a prompt file is missing, unreadable or empty.
pub const DEFAULT_PROMPT: &str = "Default conversation prompt";
