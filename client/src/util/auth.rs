//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The history route requires a live persisted uid; every entry point into it
//! applies the same redirect rule. Both views also mirror identity-session
//! events into the shared auth signal for as long as they are mounted.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::identity::{IdentityService, SessionEvent, SessionListener};
use crate::state::auth::AuthState;
use crate::util::persistence::{UidStore, now_ms};

/// `true` when the history route must bounce back to the submission view.
pub fn should_redirect_to_submit(stored_uid: Option<&str>) -> bool {
    stored_uid.is_none_or(|uid| uid.trim().is_empty())
}

/// Redirect to `/` on mount when no live uid is persisted.
pub fn install_history_guard<F>(store: Rc<dyn UidStore>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_to_submit(store.load(now_ms()).as_deref()) {
            navigate("/", NavigateOptions::default());
        }
    });
}

/// Subscribe `auth` to identity-session events until the current owner is
/// cleaned up.
pub fn install_session_listener(identity: &Rc<dyn IdentityService>, auth: RwSignal<AuthState>) {
    let listener: SessionListener = Rc::new(move |event: SessionEvent| {
        if event == SessionEvent::TokenRefreshed {
            leptos::logging::log!("identity token refreshed");
        }
        auth.update(|a| a.apply(event));
    });
    let subscription = StoredValue::new_local(Some(identity.subscribe(listener)));
    on_cleanup(move || {
        if let Some(Some(active)) = subscription.try_update_value(Option::take) {
            active.cancel();
        }
    });
}
