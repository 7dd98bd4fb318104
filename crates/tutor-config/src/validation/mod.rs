//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod helpers;
mod models;
mod scenarios;


use crate::schema::TutorConfig;
use tutor_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TutorConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    models::validate_models(&mut errors, config);
    scenarios::validate_scenarios(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
