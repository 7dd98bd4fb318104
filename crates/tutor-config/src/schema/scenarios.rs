//! Scenario role-play configuration.

use serde::{Deserialize, Serialize};

/// Scenarios shipped with the default prompt set.
pub const DEFAULT_SCENARIOS: &[&str] = &[
    "job_interview",
    "hotel_checkin",
    "renting",
    "salary_negotiation",
];

/// How a scenario picks its opening line when a session starts empty.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IntroSelection {
    /// First message of the intro file.
    #[default]
    First,
    /// Uniformly random message of the intro file.
    Random,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenariosConfig {
    /// Scenario keys, in display order. Each needs `<key>_prompt.txt` and `<key>.json`.
    pub keys: Vec<String>,
    pub intro_selection: IntroSelection,
}

impl Default for ScenariosConfig {
    fn default() -> Self {
        Self {
            keys: DEFAULT_SCENARIOS.iter().map(|k| k.to_string()).collect(),
            intro_selection: IntroSelection::First,
        }
    }
}
