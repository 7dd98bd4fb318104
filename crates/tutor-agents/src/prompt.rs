//! Prompt file loading with default fallback and change detection.
//!
//! Prompts are re-read only on explicit request: [`reload`] compares the
//! current file content with the prompt in use and reports whether the
//! agent needs to rebuild its pipeline.

use std::path::Path;

use tracing::{info, warn};

use crate::error::PromptError;
use crate::DEFAULT_PROMPT;

/// Characters of old/new prompt shown when a change is logged.
const PREVIEW_CHARS: usize = 100;

/// Outcome of [`reload`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reloaded {
    pub text: String,
    pub changed: bool,
}

/// Read a prompt file, trimmed of surrounding whitespace.
pub fn load(path: &Path) -> Result<String, PromptError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => PromptError::NotFound(path.to_path_buf()),
        _ => PromptError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let text = content.trim();
    if text.is_empty() {
        return Err(PromptError::Empty(path.to_path_buf()));
    }
    Ok(text.to_string())
}

/// [`load`], substituting [`DEFAULT_PROMPT`] on any failure.
pub fn load_or_default(path: &Path) -> String {
    match load(path) {
        Ok(text) => text,
        Err(e) => {
            warn!("{e}, using default prompt");
            DEFAULT_PROMPT.to_string()
        }
    }
}

/// Whether switching from `old` to `new` requires a rebuild.
pub fn prompt_changed(old: &str, new: &str) -> bool {
    old != new
}

/// Re-read `path` and compare with `current`.
///
/// A file that has become unreadable reloads as the default prompt, which
/// counts as a change unless the default was already in use.
pub fn reload(path: &Path, current: &str) -> Reloaded {
    let new_text = load_or_default(path);
    if !prompt_changed(current, &new_text) {
        return Reloaded {
            text: current.to_string(),
            changed: false,
        };
    }

    info!(
        "prompt changed in {}\n  old: {}...\n  new: {}...",
        path.display(),
        preview(current),
        preview(&new_text)
    );
    Reloaded {
        text: new_text,
        changed: true,
    }
}

fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}
