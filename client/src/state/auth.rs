//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the identity service's session events into a signal so the nav
//! bar and pages can render identity-dependent UI.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::identity::{Identity, SessionEvent};

/// Authentication state tracking the current identity and loading status.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub identity: Option<Identity>,
    /// `true` until the identity service reports the initial session.
    pub loading: bool,
    /// `true` while an interactive sign-in or sign-out is running.
    pub busy: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { identity: None, loading: true, busy: false }
    }
}

impl AuthState {
    /// Fold a session event into the state.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::SignedIn(identity) => self.identity = Some(identity),
            SessionEvent::SignedOut => self.identity = None,
            SessionEvent::TokenRefreshed => {}
        }
        self.loading = false;
    }

    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.uid.as_str())
    }
}
