use stayhub_api::config::AppConfig;
use stayhub_api::state::AppState;
use stayhub_core::seed::Seed;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (dev convenience)
    let _ = dotenvy::dotenv();

    // Load configuration
    let config =
        AppConfig::from_env().map_err(|e| anyhow::anyhow!("Failed to load config: {e}"))?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    tracing::info!("Starting booking API server");

    let state = AppState::in_memory(config);

    if let Some(path) = &state.config().seed_path {
        Seed::from_path(path)
            .map_err(|e| anyhow::anyhow!("Failed to read seed {}: {e}", path.display()))?
            .apply(state.bookings())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to load seed {}: {e}", path.display()))?;
    }

    let addr = state.config().addr();
    let app = stayhub_api::app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Wait for SIGINT (Ctrl+C) or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => { tracing::info!("Received Ctrl+C, shutting down..."); }
        _ = terminate => { tracing::info!("Received SIGTERM, shutting down..."); }
    }
}
