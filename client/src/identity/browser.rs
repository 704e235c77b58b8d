//! Browser identity provider bridged from JavaScript.
//!
//! The hosting page installs `window.summaryAiIdentity`, a thin wrapper over
//! the provider SDK exposing:
//!
//! - `signIn(): Promise<{ user, idToken } | null>`
//! - `signOut(): Promise<void>`
//! - `currentUser(): user | null`
//! - `onAuthStateChanged(cb): () => void`
//! - `onIdTokenChanged(cb): () => void`
//!
//! where `user` carries `uid`, `displayName` and `photoURL`. Every import is
//! declared with `catch` so a missing bridge surfaces as an error instead of
//! aborting the WASM module.

use std::rc::Rc;

use async_trait::async_trait;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;

use super::{
    Identity, IdentityError, IdentityService, SessionEvent, SessionListener, SignIn, Subscription, TokenWatch,
};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = summaryAiIdentity, js_name = signIn)]
    async fn bridge_sign_in() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = summaryAiIdentity, js_name = signOut)]
    async fn bridge_sign_out() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = summaryAiIdentity, js_name = currentUser)]
    fn bridge_current_user() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = summaryAiIdentity, js_name = onAuthStateChanged)]
    fn bridge_on_auth_state_changed(callback: &Closure<dyn FnMut(JsValue)>) -> Result<js_sys::Function, JsValue>;

    #[wasm_bindgen(catch, js_namespace = summaryAiIdentity, js_name = onIdTokenChanged)]
    fn bridge_on_id_token_changed(callback: &Closure<dyn FnMut(JsValue)>) -> Result<js_sys::Function, JsValue>;
}

fn string_field(value: &JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

fn identity_from_js(user: &JsValue) -> Option<Identity> {
    if user.is_null() || user.is_undefined() {
        return None;
    }
    Some(Identity {
        uid: string_field(user, "uid")?,
        display_name: string_field(user, "displayName").unwrap_or_default(),
        photo_url: string_field(user, "photoURL").unwrap_or_default(),
    })
}

fn provider_error(err: &JsValue) -> IdentityError {
    let message = string_field(err, "message")
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"));
    IdentityError::Provider(message)
}

/// [`IdentityService`] backed by `window.summaryAiIdentity`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserIdentity;

#[async_trait(?Send)]
impl IdentityService for BrowserIdentity {
    async fn sign_in(&self) -> Result<SignIn, IdentityError> {
        let result = bridge_sign_in().await.map_err(|e| provider_error(&e))?;
        if result.is_null() || result.is_undefined() {
            return Err(IdentityError::Cancelled);
        }
        let user = js_sys::Reflect::get(&result, &JsValue::from_str("user")).map_err(|e| provider_error(&e))?;
        let identity = identity_from_js(&user)
            .ok_or_else(|| IdentityError::Provider("sign-in returned no user".to_owned()))?;
        let id_token = string_field(&result, "idToken")
            .ok_or_else(|| IdentityError::Provider("sign-in returned no id token".to_owned()))?;
        Ok(SignIn { identity, id_token })
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        bridge_sign_out().await.map_err(|e| provider_error(&e))?;
        Ok(())
    }

    fn current(&self) -> Option<Identity> {
        match bridge_current_user() {
            Ok(user) => identity_from_js(&user),
            Err(e) => {
                leptos::logging::warn!("identity bridge unavailable: {}", provider_error(&e));
                None
            }
        }
    }

    fn subscribe(&self, listener: SessionListener) -> Subscription {
        let auth_listener = Rc::clone(&listener);
        let on_auth = Closure::<dyn FnMut(JsValue)>::new(move |user: JsValue| {
            match identity_from_js(&user) {
                Some(identity) => auth_listener(SessionEvent::SignedIn(identity)),
                None => auth_listener(SessionEvent::SignedOut),
            }
        });
        let token_listener = Rc::clone(&listener);
        let mut watch = TokenWatch::default();
        let on_token = Closure::<dyn FnMut(JsValue)>::new(move |user: JsValue| {
            let uid = identity_from_js(&user).map(|identity| identity.uid);
            if watch.observe(uid.as_deref()) {
                token_listener(SessionEvent::TokenRefreshed);
            }
        });

        let unsubscribe_auth = match bridge_on_auth_state_changed(&on_auth) {
            Ok(f) => f,
            Err(e) => {
                leptos::logging::warn!("identity subscribe failed: {}", provider_error(&e));
                listener(SessionEvent::SignedOut);
                return Subscription::detached();
            }
        };
        let unsubscribe_token = match bridge_on_id_token_changed(&on_token) {
            Ok(f) => Some(f),
            Err(e) => {
                leptos::logging::warn!("token subscribe failed: {}", provider_error(&e));
                None
            }
        };

        Subscription::new(move || {
            for unsubscribe in std::iter::once(unsubscribe_auth).chain(unsubscribe_token) {
                if let Err(e) = unsubscribe.call0(&JsValue::NULL) {
                    leptos::logging::warn!("identity unsubscribe failed: {}", provider_error(&e));
                }
            }
            drop(on_auth);
            drop(on_token);
        })
    }
}
