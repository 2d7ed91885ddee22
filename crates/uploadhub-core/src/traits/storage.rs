//! Storage trait for pluggable artifact persistence backends.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for artifact storage backends.
///
/// The [`ArtifactStore`] trait is defined here in `uploadhub-core` and
/// implemented in `uploadhub-storage`. The ingestion service only ever
/// creates objects (it never lists, overwrites, or deletes), so the
/// surface stays additive. Retention and cleanup of stored artifacts are
/// the caller's responsibility.
#[async_trait]
pub trait ArtifactStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// The absolute path an object with the given name is (or would be)
    /// stored at. `name` must be a single path component.
    fn object_path(&self, name: &str) -> PathBuf;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Write an object under the given name.
    ///
    /// The object must not be observable under `name` until the write has
    /// fully completed; a failed write leaves nothing behind under `name`.
    async fn write(&self, name: &str, data: Bytes) -> AppResult<()>;

    /// Check whether an object exists under the given name.
    async fn exists(&self, name: &str) -> AppResult<bool>;
}
