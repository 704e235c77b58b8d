//! # client
//!
//! Leptos + WASM frontend for Summary AI: upload a document or enter a
//! prompt, pick output sections, and read the structured summary. Signed-in
//! users can reopen past results from their history.
//!
//! This crate contains pages, components, view state, the HTTP client for the
//! summarization service, and the identity-provider seam.

pub mod app;
pub mod components;
pub mod identity;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
