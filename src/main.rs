//! UploadHub Server — file upload ingestion service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use uploadhub_core::config::AppConfig;
use uploadhub_core::error::AppError;
use uploadhub_core::traits::storage::ArtifactStore;
use uploadhub_service::IngestService;
use uploadhub_storage::LocalStorageProvider;

#[tokio::main]
async fn main() {
    let env = std::env::var("UPLOADHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting UploadHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Initialize storage ───────────────────────────────
    tracing::info!(dir = %config.storage.upload_dir, "Initializing upload storage");
    let store: Arc<dyn ArtifactStore> =
        Arc::new(LocalStorageProvider::new(&config.storage.upload_dir).await?);

    match config.storage.max_upload_bytes.bytes() {
        Some(max) => tracing::info!(max_upload_bytes = max, "Upload size limit active"),
        None => tracing::warn!("Upload size limit disabled; accepting uploads of any size"),
    }

    // ── Step 2: Initialize services ──────────────────────────────
    let ingest_service = Arc::new(IngestService::new(
        Arc::clone(&store),
        config.storage.clone(),
    ));

    // ── Step 3: Build and start HTTP server ──────────────────────
    let app_state = uploadhub_api::state::AppState {
        config: Arc::new(config.clone()),
        store,
        ingest_service,
    };

    let app = uploadhub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("UploadHub server listening on {addr}");

    // ── Step 4: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("UploadHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
