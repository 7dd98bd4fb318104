//! Where agents find their files and which model they use.

use std::path::{Path, PathBuf};

use tutor_config::{IntroSelection, TutorConfig};

#[derive(Debug, Clone)]
pub struct AgentSettings {
    pub prompts_dir: PathBuf,
    pub intro_dir: PathBuf,
    /// Model registry name.
    pub model: String,
    pub intro_selection: IntroSelection,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self::from_config(&TutorConfig::default())
    }
}

impl AgentSettings {
    pub fn from_config(config: &TutorConfig) -> Self {
        Self {
            prompts_dir: config.paths.prompts_dir.clone(),
            intro_dir: config.paths.intro_dir.clone(),
            model: config.models.default.clone(),
            intro_selection: config.scenarios.intro_selection,
        }
    }

    /// Settings rooted at `dir`, i.e. `dir/prompts` and `dir/content/intro`.
    pub fn rooted_at(dir: &Path) -> Self {
        Self {
            prompts_dir: dir.join("prompts"),
            intro_dir: dir.join("content").join("intro"),
            ..Self::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_intro_selection(mut self, selection: IntroSelection) -> Self {
        self.intro_selection = selection;
        self
    }

    /// `<prompts_dir>/<name>_prompt.txt`
    pub fn prompt_path(&self, name: &str) -> PathBuf {
        self.prompts_dir.join(format!("{name}_prompt.txt"))
    }

    /// `<intro_dir>/<name>.json`
    pub fn intro_path(&self, name: &str) -> PathBuf {
        self.intro_dir.join(format!("{name}.json"))
    }
}
