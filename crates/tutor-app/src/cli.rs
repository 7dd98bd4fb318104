use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tutor, a language practice partner in the terminal.
#[derive(Parser, Debug)]
#[command(name = "tutor", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log directive override (e.g. "tutor=debug").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Session id for conversation and vocab (scenario sessions use their key).
    #[arg(long)]
    pub session: Option<String>,

    /// Model registry name overriding `models.default`.
    #[arg(long)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Free conversation practice.
    Conversation,
    /// Role-play one of the configured scenarios.
    Scenario {
        /// Scenario key, e.g. "job_interview".
        key: String,
    },
    /// Vocabulary drill; `/restart` begins a new round.
    Vocab,
    /// List configured scenarios.
    Scenarios,
    /// Print the effective configuration as JSON.
    Config,
}

pub fn parse() -> Args {
    Args::parse()
}
