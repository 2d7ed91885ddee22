//! Local filesystem storage provider.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use uploadhub_core::error::{AppError, ErrorKind};
use uploadhub_core::result::AppResult;
use uploadhub_core::traits::storage::ArtifactStore;

/// Local filesystem storage provider.
///
/// All objects live flat in a single root directory. Writes go through a
/// `.part` temporary file and are renamed into place, so a crash or failed
/// write never leaves a half-written file under the final name.
#[derive(Debug, Clone)]
pub struct LocalStorageProvider {
    /// Absolute root directory for all stored artifacts.
    root: PathBuf,
}

impl LocalStorageProvider {
    /// Create a new local storage provider rooted at the given path.
    ///
    /// Creates the directory (including parents) if it does not exist and
    /// resolves it to an absolute path, so descriptor paths stay stable
    /// regardless of the process working directory.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        fs::create_dir_all(root_path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {root_path}"),
                e,
            )
        })?;
        let root = fs::canonicalize(root_path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to resolve storage root: {root_path}"),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Ensure the root directory exists. Called before every write; the
    /// directory may have been removed since startup, and a pre-existing
    /// directory is not an error.
    async fn ensure_root(&self) -> AppResult<()> {
        fs::create_dir_all(&self.root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", self.root.display()),
                e,
            )
        })
    }
}

#[async_trait]
impl ArtifactStore for LocalStorageProvider {
    fn provider_type(&self) -> &str {
        "local"
    }

    fn object_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }

    async fn write(&self, name: &str, data: Bytes) -> AppResult<()> {
        self.ensure_root().await?;

        let final_path = self.object_path(name);
        let tmp_path = self.root.join(format!("{name}.part"));

        let result = async {
            let mut file = fs::File::create(&tmp_path).await?;
            file.write_all(&data).await?;
            file.flush().await?;
            drop(file);
            fs::rename(&tmp_path, &final_path).await
        }
        .await;

        if let Err(e) = result {
            // Best-effort cleanup; the temp name is unique to this write.
            let _ = fs::remove_file(&tmp_path).await;
            return Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write object: {name}"),
                e,
            ));
        }

        debug!(name, bytes = data.len(), "Wrote artifact");
        Ok(())
    }

    async fn exists(&self, name: &str) -> AppResult<bool> {
        Ok(self.object_path(name).exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn provider(dir: &tempfile::TempDir) -> LocalStorageProvider {
        LocalStorageProvider::new(dir.path().to_str().unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = provider(&dir).await;

        let data = Bytes::from_static(b"hello world");
        store.write("artifact.txt", data.clone()).await.unwrap();

        assert!(store.exists("artifact.txt").await.unwrap());
        let read_back = std::fs::read(store.object_path("artifact.txt")).unwrap();
        assert_eq!(read_back, data);
    }

    #[tokio::test]
    async fn write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = provider(&dir).await;

        store
            .write("a.bin", Bytes::from(vec![0u8; 4096]))
            .await
            .unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["a.bin".to_string()]);
    }

    #[tokio::test]
    async fn write_recreates_a_removed_root() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("uploads");
        let store = LocalStorageProvider::new(nested.to_str().unwrap())
            .await
            .unwrap();

        std::fs::remove_dir_all(&nested).unwrap();
        assert!(!store.health_check().await.unwrap());

        store.write("b.txt", Bytes::from_static(b"x")).await.unwrap();
        assert!(store.health_check().await.unwrap());
        assert!(store.exists("b.txt").await.unwrap());
    }

    #[tokio::test]
    async fn root_is_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let store = provider(&dir).await;
        assert!(store.object_path("x").is_absolute());
    }

    #[tokio::test]
    async fn missing_object_does_not_exist() {
        let dir = tempfile::tempdir().unwrap();
        let store = provider(&dir).await;
        assert!(!store.exists("nope.txt").await.unwrap());
    }
}
