//! Scenario section validation.

use regex::Regex;
use std::sync::LazyLock;

use crate::schema::TutorConfig;

use super::helpers::validate_unique;

/// Scenario keys double as file stems, so keep them to lowercase snake case.
static SCENARIO_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_]+$").unwrap());

/// Validate scenario key format and uniqueness.
pub(crate) fn validate_scenarios(errors: &mut Vec<String>, config: &TutorConfig) {
    for key in &config.scenarios.keys {
        if !SCENARIO_KEY_RE.is_match(key) {
            errors.push(format!(
                "scenarios.keys: '{key}' must match [a-z0-9_]+"
            ));
        }
    }

    validate_unique(
        errors,
        "scenarios.keys",
        config.scenarios.keys.iter().map(String::as_str),
    );
}
