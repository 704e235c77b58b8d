//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (session subscription, network
//! calls, redirects) and delegates rendering details to `components`.

pub mod history;
pub mod submit;
