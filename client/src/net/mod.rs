//! Networking modules for the summarization service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the wire schema, and `error`
//! classifies failures for the views.

pub mod api;
pub mod error;
pub mod types;
