//! Identity-provider abstraction.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app never talks to the identity provider directly. Pages receive an
//! [`IdentityService`] through context (see `crate::app::Services`) and
//! observe session changes through [`IdentityService::subscribe`].
//!
//! DESIGN
//! ======
//! A [`Subscription`] is a drop guard: holding it keeps the listener
//! registered, dropping it unsubscribes. Pages tie the guard to their reactive
//! owner so unmounting tears the subscription down.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod memory;
pub mod session;

use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A signed-in user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque provider user id; keys the history endpoints.
    pub uid: String,
    pub display_name: String,
    /// Avatar URL; may be empty.
    pub photo_url: String,
}

/// Result of an interactive sign-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignIn {
    pub identity: Identity,
    /// Provider token exchanged with the login endpoint.
    pub id_token: String,
}

/// Session change delivered to subscribers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn(Identity),
    SignedOut,
    /// The provider rotated the id token. Observed only.
    TokenRefreshed,
}

/// Failure reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("sign-in cancelled")]
    Cancelled,
    #[error("identity provider error: {0}")]
    Provider(String),
    #[error("identity provider not available")]
    Unavailable,
}

/// Callback invoked for every [`SessionEvent`].
pub type SessionListener = Rc<dyn Fn(SessionEvent)>;

/// Identity provider seam. Futures are `?Send`: the browser runtime is
/// single-threaded and provider handles are JS values.
#[async_trait(?Send)]
pub trait IdentityService {
    /// Run the provider's interactive sign-in.
    async fn sign_in(&self) -> Result<SignIn, IdentityError>;

    /// End the provider session.
    async fn sign_out(&self) -> Result<(), IdentityError>;

    /// Currently signed-in user, if the provider has one.
    fn current(&self) -> Option<Identity>;

    /// Register `listener`. The current state is delivered immediately as
    /// `SignedIn`/`SignedOut`, followed by every later change.
    fn subscribe(&self, listener: SessionListener) -> Subscription;
}

/// Tells real token rotations apart from the token notifications providers
/// also send when a user signs in or out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenWatch {
    last_uid: Option<String>,
}

impl TokenWatch {
    /// Record the uid carried by a token notification. Returns `true` only
    /// when the same non-empty uid held the previous token.
    pub fn observe(&mut self, uid: Option<&str>) -> bool {
        let uid = uid.filter(|u| !u.is_empty());
        let refreshed = uid.is_some() && uid == self.last_uid.as_deref();
        self.last_uid = uid.map(str::to_owned);
        refreshed
    }
}

/// Drop guard for a registered [`SessionListener`].
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self { teardown: Some(Box::new(teardown)) }
    }

    /// A guard with nothing to tear down.
    pub fn detached() -> Self {
        Self { teardown: None }
    }

    /// Unsubscribe now.
    pub fn cancel(mut self) {
        self.run_teardown();
    }

    fn run_teardown(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_teardown();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.teardown.is_some())
            .finish()
    }
}
