//! Tutor configuration system.
//!
//! TOML-based configuration for prompt/intro locations, model selection,
//! scenario keys and logging. Every section uses serde defaults so partial
//! configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tutor_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    IntroSelection, LogLevel, LoggingConfig, ModelsConfig, PathsConfig, ScenariosConfig,
    TutorConfig, CONFIG_SCHEMA_VERSION, DEFAULT_SCENARIOS,
};

use std::path::Path;

use tutor_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default file is created from the commented template if missing.
/// Unlike [`toml_loader::load_from_path`], validation failures are errors.
pub fn load_config(path: Option<&Path>) -> Result<TutorConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TutorConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
