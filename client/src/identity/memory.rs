//! In-process identity provider.
//!
//! Used during server rendering (where no provider exists) and in tests. It
//! follows the same subscription contract as the browser bridge.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use async_trait::async_trait;

use super::{Identity, IdentityError, IdentityService, SessionEvent, SessionListener, SignIn, Subscription};

#[derive(Default)]
struct Inner {
    /// Account returned by the next `sign_in`. `None` means no provider.
    account: Option<SignIn>,
    current: Option<Identity>,
    listeners: Vec<(u64, SessionListener)>,
    next_listener_id: u64,
}

/// Identity provider backed by a fixed account.
#[derive(Clone, Default)]
pub struct MemoryIdentity {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryIdentity {
    /// Provider that signs in as `account` on request. Starts signed out.
    #[must_use]
    pub fn with_account(account: SignIn) -> Self {
        let inner = Inner { account: Some(account), ..Inner::default() };
        Self { inner: Rc::new(RefCell::new(inner)) }
    }

    /// Provider already signed in as `account`.
    #[must_use]
    pub fn signed_in(account: SignIn) -> Self {
        let current = Some(account.identity.clone());
        let inner = Inner { account: Some(account), current, ..Inner::default() };
        Self { inner: Rc::new(RefCell::new(inner)) }
    }

    /// Simulate a token rotation.
    pub fn refresh_token(&self) {
        self.emit(&SessionEvent::TokenRefreshed);
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn emit(&self, event: &SessionEvent) {
        // Snapshot so listeners may subscribe/unsubscribe re-entrantly.
        let listeners: Vec<SessionListener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener(event.clone());
        }
    }
}

fn current_event(current: Option<Identity>) -> SessionEvent {
    current.map_or(SessionEvent::SignedOut, SessionEvent::SignedIn)
}

#[async_trait(?Send)]
impl IdentityService for MemoryIdentity {
    async fn sign_in(&self) -> Result<SignIn, IdentityError> {
        let account = self.inner.borrow().account.clone().ok_or(IdentityError::Unavailable)?;
        self.inner.borrow_mut().current = Some(account.identity.clone());
        self.emit(&SessionEvent::SignedIn(account.identity.clone()));
        Ok(account)
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        self.inner.borrow_mut().current = None;
        self.emit(&SessionEvent::SignedOut);
        Ok(())
    }

    fn current(&self) -> Option<Identity> {
        self.inner.borrow().current.clone()
    }

    fn subscribe(&self, listener: SessionListener) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.push((id, Rc::clone(&listener)));
            id
        };
        listener(current_event(self.current()));

        let weak: Weak<RefCell<Inner>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }
}
