//! LocalLens Server - photo insight API
//!
//! Endpoints:
//! - POST /analyze - store a photo and derive an insight from its file name
//! - GET /history-view - HTML page of all uploads, newest first
//! - GET /uploads/<stored name> - stored photos

use std::net::SocketAddr;

use anyhow::Context;
use locallens_server::{
    create_router_with_config, AppState, Config, LocalFileStore, RecordLogHandle,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("locallens_server=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();

    // The server starts accepting requests before the database is reachable;
    // until then uploads and history fail with a persistence error.
    let record_log = match &config.database_url {
        Some(url) => {
            tracing::info!("Using PostgreSQL record log");
            let handle = RecordLogHandle::pending();
            handle.connect_in_background(url.clone(), config.database_max_connections);
            handle
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory record log");
            RecordLogHandle::in_memory()
        }
    };

    let file_store = LocalFileStore::new(&config.upload_dir);
    if let Err(e) = file_store.prepare().await {
        tracing::error!(error = %e, "Upload directory unavailable - uploads will fail");
    }

    let state = AppState::new(file_store, record_log);
    let app = create_router_with_config(state, &config);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(
        upload_dir = %config.upload_dir.display(),
        "Server running at http://{}",
        addr
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
