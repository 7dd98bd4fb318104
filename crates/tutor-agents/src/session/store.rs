//! Session id → history map shared by all agents.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;
use tutor_common::SessionId;

use super::history::ChatHistory;

/// Process-wide store of session histories.
///
/// Constructed once and handed to every agent; clones share the map.
/// Tests build a fresh store each instead of clearing a global one.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, ChatHistory>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, ChatHistory>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// History for `session_id`, created empty on first access.
    pub fn get_history(&self, session_id: &str) -> ChatHistory {
        let mut sessions = self.lock();
        if let Some(history) = sessions.get(session_id) {
            return history.clone();
        }
        debug!(session = session_id, "creating session history");
        let history = ChatHistory::new();
        sessions.insert(SessionId::from(session_id), history.clone());
        history
    }

    pub fn contains(&self, session_id: &str) -> bool {
        self.lock().contains_key(session_id)
    }

    /// Known session ids, sorted.
    pub fn session_ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<SessionId> = self.lock().keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every history. Handles obtained earlier keep their messages
    /// but are no longer reachable through the store.
    pub fn clear_all(&self) {
        self.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_session_gets_empty_history() {
        let store = SessionStore::new();
        let history = store.get_history("test_session");
        assert!(history.is_empty());
        assert!(store.contains("test_session"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn repeated_lookup_returns_same_history() {
        let store = SessionStore::new();
        let first = store.get_history("test_session");
        let second = store.get_history("test_session");
        assert!(first.ptr_eq(&second));

        first.add_user_message("hello");
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn sessions_are_independent() {
        let store = SessionStore::new();
        store.get_history("a").add_user_message("only in a");
        assert!(store.get_history("b").is_empty());
        assert_eq!(
            store.session_ids(),
            vec![SessionId::new("a"), SessionId::new("b")]
        );
    }

    #[test]
    fn clones_share_the_map() {
        let store = SessionStore::new();
        let other = store.clone();
        let history = store.get_history("shared");
        assert!(other.get_history("shared").ptr_eq(&history));
    }

    #[test]
    fn clear_all_discards_histories() {
        let store = SessionStore::new();
        let old = store.get_history("test_session");
        old.add_ai_message("stale");

        store.clear_all();
        assert!(store.is_empty());

        let fresh = store.get_history("test_session");
        assert!(fresh.is_empty());
        assert!(!fresh.ptr_eq(&old));
    }
}
