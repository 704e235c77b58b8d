#![recursion_limit = "256"]

mod config;
mod routes;

use config::HostConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    // A missing .env file is normal outside local development.
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env loaded");
    }

    let config = HostConfig::from_env()?;
    let app = routes::app()?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(port = config.port, host = %config.host, "summary-ai listening");
    axum::serve(listener, app).await?;
    Ok(())
}
