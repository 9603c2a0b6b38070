use anyhow::{Context, Result};
use std::net::SocketAddr;

use common::config::Settings;
use common::db::DbPool;
use common::telemetry;
use galac_api::routes;
use galac_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Settings::load().context("Failed to load configuration")?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    // Guards flush the error log files on drop
    let _log_guards = telemetry::init_logging(&config.observability)?;

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        "Starting Galac API server"
    );

    let metrics_handle = telemetry::init_metrics()?;

    // Initialize database connection pool and make sure it answers before serving
    let db_pool = DbPool::new(&config.database).await?;
    db_pool
        .health_check()
        .await
        .context("Database did not answer the startup check")?;
    tracing::info!("Database connection established");

    let state = AppState::new(db_pool.clone(), metrics_handle, config.clone());
    let app = routes::create_router(state);

    // Start server
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));
    tracing::info!(addr = %addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db_pool.close().await;
    tracing::info!("Galac API server stopped");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Initiating graceful shutdown");
}
