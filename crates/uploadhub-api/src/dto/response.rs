//! Response body types.

use serde::{Deserialize, Serialize};

/// Standard API error response body.
///
/// Every failure yields this stable, minimal shape; no stack traces or
/// filesystem paths are ever exposed to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Health check response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Storage provider type (e.g., "local").
    pub storage_provider: String,
    /// Storage reachability: "available" or "unavailable".
    pub storage: String,
}
