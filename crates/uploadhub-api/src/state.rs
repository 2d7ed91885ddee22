//! Application state shared across all handlers.

use std::sync::Arc;

use uploadhub_core::config::AppConfig;
use uploadhub_core::traits::storage::ArtifactStore;
use uploadhub_service::IngestService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Storage backend (health checks).
    pub store: Arc<dyn ArtifactStore>,
    /// Upload ingestion service.
    pub ingest_service: Arc<IngestService>,
}
