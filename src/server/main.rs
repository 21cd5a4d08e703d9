// Main entry point for the GraphQL demo API server

use anyhow::{Context, Result};
use server_core::{server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Build application
    let app = build_app();

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!(
        "Running a GraphQL API server at http://localhost:{}/graphql",
        config.port
    );
    tracing::info!("GraphQL explorer: http://localhost:{}/", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
