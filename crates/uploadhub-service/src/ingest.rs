//! File ingestion service — the single-request upload flow.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;

use uploadhub_core::config::storage::StorageConfig;
use uploadhub_core::error::AppError;
use uploadhub_core::naming;
use uploadhub_core::result::AppResult;
use uploadhub_core::traits::storage::ArtifactStore;
use uploadhub_core::types::artifact::StoredArtifact;

/// Error message surfaced for oversized uploads (HTTP 413 body).
pub const SIZE_EXCEEDED_MESSAGE: &str = "File exceeds maximum allowed size";

/// Persists uploaded files and produces their descriptors.
///
/// Stateless between calls: every ingestion derives its own unique storage
/// name, so concurrent calls never contend for the same path and no
/// locking is needed beyond what the filesystem gives distinct paths.
#[derive(Debug, Clone)]
pub struct IngestService {
    /// Storage backend.
    store: Arc<dyn ArtifactStore>,
    /// Storage configuration (size policy).
    config: StorageConfig,
}

impl IngestService {
    /// Creates a new ingestion service.
    pub fn new(store: Arc<dyn ArtifactStore>, config: StorageConfig) -> Self {
        Self { store, config }
    }

    /// The configured storage backend.
    pub fn store(&self) -> &Arc<dyn ArtifactStore> {
        &self.store
    }

    /// Ingest one uploaded file: enforce the size policy, derive a unique
    /// sanitized storage name, persist the content, and return the
    /// descriptor.
    ///
    /// The descriptor is only returned after the write has fully
    /// completed; on any failure nothing is visible under the final name.
    pub async fn ingest(&self, original_name: &str, data: Bytes) -> AppResult<StoredArtifact> {
        if !self.config.max_upload_bytes.allows(data.len() as u64) {
            return Err(AppError::payload_too_large(SIZE_EXCEEDED_MESSAGE));
        }

        let stored_file_name = naming::storage_file_name(original_name)?;
        let size = data.len() as u64;

        self.store.write(&stored_file_name, data).await?;

        let path = self.store.object_path(&stored_file_name);
        info!(
            original_name,
            stored_file_name, size, "Stored uploaded artifact"
        );

        Ok(StoredArtifact {
            original_name: original_name.to_string(),
            stored_file_name,
            path,
            size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uploadhub_core::config::storage::UploadLimit;
    use uploadhub_core::error::ErrorKind;
    use uploadhub_storage::LocalStorageProvider;

    async fn service(dir: &tempfile::TempDir, limit: UploadLimit) -> IngestService {
        let store = LocalStorageProvider::new(dir.path().to_str().unwrap())
            .await
            .unwrap();
        let config = StorageConfig {
            upload_dir: dir.path().to_string_lossy().into_owned(),
            max_upload_bytes: limit,
        };
        IngestService::new(Arc::new(store), config)
    }

    #[tokio::test]
    async fn ingest_round_trips_content() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir, UploadLimit::Unbounded).await;

        let artifact = svc
            .ingest("report final.csv", Bytes::from_static(b"0123456789"))
            .await
            .unwrap();

        assert_eq!(artifact.original_name, "report final.csv");
        assert_eq!(artifact.size, 10);
        assert!(artifact.stored_file_name.ends_with("-report_final.csv"));
        assert!(artifact.path.is_absolute());
        assert_eq!(std::fs::read(&artifact.path).unwrap(), b"0123456789");
    }

    #[tokio::test]
    async fn identical_names_get_distinct_storage_names() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir, UploadLimit::Unbounded).await;

        let a = svc.ingest("data.bin", Bytes::from_static(b"a")).await.unwrap();
        let b = svc.ingest("data.bin", Bytes::from_static(b"b")).await.unwrap();

        assert_ne!(a.stored_file_name, b.stored_file_name);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[tokio::test]
    async fn oversized_upload_is_rejected_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir, UploadLimit::Limited(100)).await;

        let err = svc
            .ingest("big.bin", Bytes::from(vec![0u8; 101]))
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::PayloadTooLarge);
        assert_eq!(err.message, SIZE_EXCEEDED_MESSAGE);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn upload_exactly_at_the_limit_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir, UploadLimit::Limited(100)).await;

        let artifact = svc
            .ingest("ok.bin", Bytes::from(vec![0u8; 100]))
            .await
            .unwrap();
        assert_eq!(artifact.size, 100);
    }

    #[tokio::test]
    async fn degenerate_name_is_rejected_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir, UploadLimit::Unbounded).await;

        let err = svc.ingest("???", Bytes::from_static(b"x")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
