use std::path::PathBuf;

use tutor_ai::AiError;
use tutor_common::SessionId;

/// Why a prompt file could not be used. Always recovered with the default prompt.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("prompt file not found: {0}")]
    NotFound(PathBuf),

    #[error("prompt file is empty: {0}")]
    Empty(PathBuf),

    #[error("failed to read prompt {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why an intro file could not be used. Fatal for the scenario that needs it.
#[derive(Debug, thiserror::Error)]
pub enum IntroError {
    #[error("failed to read intro {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid intro JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("intro file has no messages: {0}")]
    Empty(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("unknown model: {0}")]
    UnknownModel(String),

    #[error("unknown scenario: {0}")]
    UnknownScenario(String),

    #[error(transparent)]
    Intro(#[from] IntroError),

    #[error("model invocation failed: {0}")]
    Model(#[from] AiError),

    #[error("session {0} is busy with another request")]
    SessionBusy(SessionId),
}
