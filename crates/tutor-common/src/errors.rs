use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Top-level error for the tutor binary and anything that glues crates together.
#[derive(Debug, thiserror::Error)]
pub enum TutorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("agent error: {0}")]
    Agent(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TutorError {
    /// Wrap an agent-layer error, keeping it as the source.
    pub fn agent(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Agent(Box::new(e))
    }
}
