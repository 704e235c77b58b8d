//! Short-lived persistence of the signed-in uid.
//!
//! SYSTEM CONTEXT
//! ==============
//! The uid is mirrored into `localStorage` (JSON with an explicit expiry) and
//! into a cookie with the same max-age. Its presence gates the history route.
//! Stores are injected through [`UidStore`] so route guards and sign-out can
//! be exercised without a browser.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

/// `localStorage` key and cookie name.
pub const UID_KEY: &str = "uid";
/// Lifetime of both the storage entry and the cookie.
pub const UID_TTL_SECS: i64 = 3600;

/// Storage payload under [`UID_KEY`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUid {
    pub uid: String,
    pub expires_at_ms: i64,
}

impl StoredUid {
    #[must_use]
    pub fn new(uid: &str, now_ms: i64) -> Self {
        Self { uid: uid.to_owned(), expires_at_ms: now_ms + UID_TTL_SECS * 1000 }
    }

    /// The uid, unless the entry has expired at `now_ms`.
    #[must_use]
    pub fn live_uid(&self, now_ms: i64) -> Option<&str> {
        (now_ms < self.expires_at_ms).then_some(self.uid.as_str())
    }
}

/// `document.cookie` assignment that sets the uid cookie.
#[must_use]
pub fn uid_cookie(uid: &str) -> String {
    format!("{UID_KEY}={uid}; max-age={UID_TTL_SECS}; path=/; SameSite=Lax")
}

/// `document.cookie` assignment that expires the uid cookie.
#[must_use]
pub fn cleared_uid_cookie() -> String {
    format!("{UID_KEY}=; max-age=0; path=/; SameSite=Lax")
}

/// Current wall-clock time in milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let now = js_sys::Date::now() as i64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}

/// Key-value side channel holding the signed-in uid.
pub trait UidStore {
    /// The stored uid if present and not expired at `now_ms`.
    fn load(&self, now_ms: i64) -> Option<String>;

    /// Store `uid` with a [`UID_TTL_SECS`] expiry.
    fn save(&self, uid: &str, now_ms: i64);

    /// Remove the entry and its cookie.
    fn clear(&self);
}

/// [`UidStore`] over `localStorage` and `document.cookie`. No-op on the server.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserUidStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn write_cookie(assignment: &str) {
    use wasm_bindgen::JsCast as _;

    let Some(doc) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
    else {
        return;
    };
    if let Err(e) = doc.set_cookie(assignment) {
        leptos::logging::warn!("cookie write failed: {e:?}");
    }
}

impl UidStore for BrowserUidStore {
    fn load(&self, now_ms: i64) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            let raw = storage.get_item(UID_KEY).ok().flatten()?;
            let Ok(entry) = serde_json::from_str::<StoredUid>(&raw) else {
                return None;
            };
            if let Some(uid) = entry.live_uid(now_ms) {
                return Some(uid.to_owned());
            }
            self.clear();
            None
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = now_ms;
            None
        }
    }

    fn save(&self, uid: &str, now_ms: i64) {
        #[cfg(feature = "hydrate")]
        {
            let entry = StoredUid::new(uid, now_ms);
            if let (Some(storage), Ok(raw)) = (local_storage(), serde_json::to_string(&entry)) {
                if let Err(e) = storage.set_item(UID_KEY, &raw) {
                    leptos::logging::warn!("uid storage write failed: {e:?}");
                }
            }
            write_cookie(&uid_cookie(uid));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (uid, now_ms);
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if let Err(e) = storage.remove_item(UID_KEY) {
                    leptos::logging::warn!("uid storage clear failed: {e:?}");
                }
            }
            write_cookie(&cleared_uid_cookie());
        }
    }
}

/// In-memory [`UidStore`] that records cookie writes. Used for server
/// rendering and tests.
#[derive(Debug, Default)]
pub struct MemoryUidStore {
    entry: RefCell<Option<StoredUid>>,
    cookie: RefCell<Option<String>>,
}

impl MemoryUidStore {
    /// Last cookie assignment, if any.
    #[must_use]
    pub fn cookie(&self) -> Option<String> {
        self.cookie.borrow().clone()
    }

    /// Raw storage entry, ignoring expiry.
    #[must_use]
    pub fn entry(&self) -> Option<StoredUid> {
        self.entry.borrow().clone()
    }
}

impl UidStore for MemoryUidStore {
    fn load(&self, now_ms: i64) -> Option<String> {
        self.entry
            .borrow()
            .as_ref()
            .and_then(|e| e.live_uid(now_ms))
            .map(str::to_owned)
    }

    fn save(&self, uid: &str, now_ms: i64) {
        *self.entry.borrow_mut() = Some(StoredUid::new(uid, now_ms));
        *self.cookie.borrow_mut() = Some(uid_cookie(uid));
    }

    fn clear(&self) {
        *self.entry.borrow_mut() = None;
        *self.cookie.borrow_mut() = Some(cleared_uid_cookie());
    }
}
