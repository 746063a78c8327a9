//! Session state shared across the client.
//!
//! Holds the authenticated user behind a watch channel so interested parts
//! (the CLI prompt, the HTTP layer) observe login and logout as they happen.

use std::sync::Arc;

use mensa_api_types::User;
use tokio::sync::watch;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Shared handle to the session. Cloning is cheap; all clones observe the
/// same state.
#[derive(Clone)]
pub struct Session {
    tx: Arc<watch::Sender<SessionState>>,
}

impl Session {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SessionState::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn set_user(&self, user: User) {
        debug!(user_id = %user.id, "Session established");
        self.tx.send_replace(SessionState { user: Some(user) });
    }

    /// Drop the authenticated identity. Called on logout and when the server
    /// rejects a request as unauthenticated.
    pub fn clear(&self) {
        self.tx.send_replace(SessionState::default());
    }

    pub fn current_user(&self) -> Option<User> {
        self.tx.borrow().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.tx.borrow().is_authenticated()
    }

    /// Subscribe to session changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
