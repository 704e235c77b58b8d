use super::*;

fn ada() -> Identity {
    Identity {
        uid: "u1".to_owned(),
        display_name: "Ada".to_owned(),
        photo_url: String::new(),
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_identity() {
    let state = AuthState::default();
    assert!(state.identity.is_none());
    assert!(state.uid().is_none());
}

#[test]
fn auth_state_default_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.busy);
}

// =============================================================
// apply
// =============================================================

#[test]
fn signed_in_sets_identity_and_clears_loading() {
    let mut state = AuthState::default();
    state.apply(SessionEvent::SignedIn(ada()));
    assert_eq!(state.uid(), Some("u1"));
    assert!(!state.loading);
}

#[test]
fn signed_out_clears_identity() {
    let mut state = AuthState::default();
    state.apply(SessionEvent::SignedIn(ada()));
    state.apply(SessionEvent::SignedOut);
    assert!(state.identity.is_none());
}

#[test]
fn token_refresh_keeps_identity() {
    let mut state = AuthState::default();
    state.apply(SessionEvent::SignedIn(ada()));
    state.apply(SessionEvent::TokenRefreshed);
    assert_eq!(state.identity, Some(ada()));
}
