//! Model section validation.

use crate::schema::TutorConfig;
use tutor_ai::models::BUILTIN_MODELS;

use super::helpers::{validate_range, validate_range_f64, validate_unique};

/// Validate custom model limits and that the default model resolves.
pub(crate) fn validate_models(errors: &mut Vec<String>, config: &TutorConfig) {
    let models = &config.models;

    for model in &models.custom {
        if model.name.trim().is_empty() {
            errors.push("models.custom: name must not be empty".to_string());
        }
        if model.model.trim().is_empty() {
            errors.push(format!("models.custom[{}].model must not be empty", model.name));
        }
        validate_range(
            errors,
            &format!("models.custom[{}].max_tokens", model.name),
            model.max_tokens,
            1,
            131_072,
        );
        validate_range_f64(
            errors,
            &format!("models.custom[{}].temperature", model.name),
            model.temperature,
            0.0,
            2.0,
        );
    }

    validate_unique(
        errors,
        "models.custom",
        models.custom.iter().map(|m| m.name.as_str()),
    );

    let known = BUILTIN_MODELS.contains(&models.default.as_str())
        || models.custom.iter().any(|m| m.name == models.default);
    if !known {
        errors.push(format!(
            "models.default = '{}' is not a built-in or custom model",
            models.default
        ));
    }
}
