//! Scenario intro messages loaded from JSON.
//!
//! Two shapes are accepted:
//!
//! ```json
//! ["Welcome to the interview!", "Please have a seat."]
//! ```
//!
//! ```json
//! {"greeting": "Welcome to the hotel!", "followup": "Do you have a booking?"}
//! ```
//!
//! Keyed objects are ordered by key: numeric keys by value and ahead of
//! any other keys, the rest as text.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;

use rand::seq::SliceRandom;
use serde::Deserialize;
use tutor_config::IntroSelection;

use crate::error::IntroError;

#[derive(Deserialize)]
#[serde(untagged)]
enum IntroSource {
    Ordered(Vec<String>),
    Keyed(HashMap<String, String>),
}

fn compare_keys(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Non-empty, ordered set of intro messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroMessages {
    messages: Vec<String>,
}

impl IntroMessages {
    /// Read and parse an intro file.
    pub fn load(path: &Path) -> Result<Self, IntroError> {
        let content = std::fs::read_to_string(path).map_err(|source| IntroError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse intro JSON; `path` is only used for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self, IntroError> {
        let source: IntroSource =
            serde_json::from_str(content).map_err(|source| IntroError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let messages: Vec<String> = match source {
            IntroSource::Ordered(messages) => messages,
            IntroSource::Keyed(map) => {
                let mut entries: Vec<(String, String)> = map.into_iter().collect();
                entries.sort_by(|(a, _), (b, _)| compare_keys(a, b));
                entries.into_iter().map(|(_, message)| message).collect()
            }
        };

        if messages.is_empty() {
            return Err(IntroError::Empty(path.to_path_buf()));
        }
        Ok(Self { messages })
    }

    pub fn first(&self) -> &str {
        // Non-empty by construction.
        &self.messages[0]
    }

    pub fn random(&self) -> &str {
        self.messages
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .unwrap_or_else(|| self.first())
    }

    pub fn select(&self, selection: IntroSelection) -> &str {
        match selection {
            IntroSelection::First => self.first(),
            IntroSelection::Random => self.random(),
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
