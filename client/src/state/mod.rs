//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by view (`auth`, `submission`, `history`) so components
//! depend on small focused models. Transitions are plain methods so they can
//! be unit-tested without a reactive runtime; pages wrap them in signals.

pub mod auth;
pub mod history;
pub mod submission;
