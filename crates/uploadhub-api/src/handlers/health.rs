//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let storage_ok = state.store.health_check().await.unwrap_or(false);

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage_provider: state.store.provider_type().to_string(),
        storage: if storage_ok {
            "available".to_string()
        } else {
            "unavailable".to_string()
        },
    })
}
