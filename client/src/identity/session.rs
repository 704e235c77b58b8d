//! Sign-in and sign-out flows shared by every page.
//!
//! ERROR HANDLING
//! ==============
//! Provider failures are returned to the caller, which logs them. A failed
//! login exchange is only logged: the provider session is authoritative.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::{Identity, IdentityError, IdentityService};
use crate::net::api::{self, ApiConfig};
use crate::util::persistence::{UidStore, now_ms};

/// Interactive sign-in, token exchange, and uid persistence.
///
/// # Errors
///
/// Returns the provider's [`IdentityError`] when sign-in fails or is
/// cancelled. Nothing is persisted in that case.
pub async fn sign_in(
    identity: &dyn IdentityService,
    store: &dyn UidStore,
    config: &ApiConfig,
) -> Result<Identity, IdentityError> {
    let signed = identity.sign_in().await?;
    if let Err(e) = api::login(config, &signed.id_token).await {
        leptos::logging::warn!("login exchange failed: {e}");
    }
    store.save(&signed.identity.uid, now_ms());
    Ok(signed.identity)
}

/// Provider sign-out followed by clearing the persisted uid and cookie.
///
/// # Errors
///
/// Returns the provider's [`IdentityError`]; local persistence is left intact
/// when the provider refuses.
pub async fn sign_out(identity: &dyn IdentityService, store: &dyn UidStore) -> Result<(), IdentityError> {
    identity.sign_out().await?;
    store.clear();
    Ok(())
}
