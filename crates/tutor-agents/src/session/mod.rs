//! Per-session message histories.
//!
//! A [`SessionStore`] maps session ids to [`ChatHistory`] handles. Handles
//! are shared: every lookup of the same id yields the same history.

mod guard;
mod history;
mod store;

pub use guard::BusyGuard;
pub use history::ChatHistory;
pub use store::SessionStore;
