//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders the Leptos app for `/` and `/history` and serves the
//! hydration bundle from `/pkg`. All summarization and history calls go from
//! the browser straight to the external service; the host has no API of
//! its own beyond the health probe.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;

/// Routes that do not depend on the Leptos build output.
fn base_routes() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new().route("/healthz", get(healthz)).layer(cors)
}

/// Full application router: SSR pages, static bundle, health probe.
///
/// # Errors
///
/// Returns [`ConfigError::Leptos`] if the Leptos configuration cannot be
/// loaded (missing or malformed `Cargo.toml` `[package.metadata.leptos]`
/// section).
pub fn app() -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
