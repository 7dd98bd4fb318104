//! Configuration schema types for the tutor.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod models;
mod scenarios;
mod system;

pub use models::*;
pub use scenarios::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TutorConfig {
    pub paths: PathsConfig,
    pub models: ModelsConfig,
    pub scenarios: ScenariosConfig,
    pub logging: LoggingConfig,
}
