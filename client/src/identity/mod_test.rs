use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn subscription_runs_teardown_once_on_drop() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let sub = Subscription::new(move || counter.set(counter.get() + 1));
    assert_eq!(calls.get(), 0);
    drop(sub);
    assert_eq!(calls.get(), 1);
}

#[test]
fn subscription_cancel_does_not_run_teardown_twice() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    Subscription::new(move || counter.set(counter.get() + 1)).cancel();
    assert_eq!(calls.get(), 1);
}

#[test]
fn detached_subscription_debug_reports_inactive() {
    let sub = Subscription::detached();
    assert_eq!(format!("{sub:?}"), "Subscription { active: false }");
}

#[test]
fn identity_error_messages() {
    assert_eq!(IdentityError::Cancelled.to_string(), "sign-in cancelled");
    assert_eq!(
        IdentityError::Provider("popup blocked".to_owned()).to_string(),
        "identity provider error: popup blocked"
    );
}

// =============================================================
// TokenWatch
// =============================================================

#[test]
fn token_watch_ignores_sign_in_and_sign_out_notifications() {
    let mut watch = TokenWatch::default();
    assert!(!watch.observe(Some("u1")), "first token after sign-in");
    assert!(!watch.observe(None), "sign-out");
    assert!(!watch.observe(Some("u1")), "signing back in");
}

#[test]
fn token_watch_reports_rotation_for_same_user() {
    let mut watch = TokenWatch::default();
    watch.observe(Some("u1"));
    assert!(watch.observe(Some("u1")));
    assert!(watch.observe(Some("u1")));
}

#[test]
fn token_watch_treats_user_switch_and_empty_uid_as_session_change() {
    let mut watch = TokenWatch::default();
    watch.observe(Some("u1"));
    assert!(!watch.observe(Some("u2")));
    assert!(!watch.observe(Some("")));
    assert!(!watch.observe(Some("")));
}
