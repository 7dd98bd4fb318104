//! Shared, append-only message history of one session.

use std::fmt;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tutor_ai::Message;

use super::guard::BusyGuard;

#[derive(Default)]
struct Inner {
    messages: Mutex<Vec<Message>>,
    /// Set while a chat turn for this session is in flight.
    busy: AtomicBool,
}

/// Handle to a session's messages.
///
/// Clones share the same underlying history. Messages are only ever
/// appended or cleared wholesale; the lock is never held across an await.
#[derive(Clone, Default)]
pub struct ChatHistory {
    inner: Arc<Inner>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Message>> {
        self.inner
            .messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the messages, oldest first.
    pub fn messages(&self) -> Vec<Message> {
        self.lock().clone()
    }

    pub fn add_message(&self, message: Message) {
        self.lock().push(message);
    }

    pub fn add_user_message(&self, content: impl Into<String>) {
        self.add_message(Message::human(content));
    }

    pub fn add_ai_message(&self, content: impl Into<String>) {
        self.add_message(Message::ai(content));
    }

    /// Append several messages under one lock, keeping them adjacent.
    pub fn extend(&self, messages: impl IntoIterator<Item = Message>) {
        self.lock().extend(messages);
    }

    pub fn last_message(&self) -> Option<Message> {
        self.lock().last().cloned()
    }

    /// Return the most recent message, or append `seed()` to an empty
    /// history and return that. Checked and written under one lock.
    pub fn last_or_insert_with(&self, seed: impl FnOnce() -> Message) -> Message {
        let mut messages = self.lock();
        if let Some(last) = messages.last() {
            return last.clone();
        }
        let message = seed();
        messages.push(message.clone());
        message
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Whether both handles point at the same history.
    pub fn ptr_eq(&self, other: &ChatHistory) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Claim this session for one chat turn.
    pub fn try_begin_turn(&self) -> Option<BusyGuard<'_>> {
        BusyGuard::acquire(&self.inner.busy)
    }
}

impl fmt::Debug for ChatHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatHistory")
            .field("messages", &*self.lock())
            .finish()
    }
}
