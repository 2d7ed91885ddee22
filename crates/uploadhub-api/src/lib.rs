//! # uploadhub-api
//!
//! HTTP API layer for UploadHub built on Axum.
//!
//! Provides the upload and health endpoints, response DTOs, shared
//! application state, and the `AppError` → HTTP response mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
