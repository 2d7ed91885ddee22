//! Shared test helpers for integration tests.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use uploadhub_api::state::AppState;
use uploadhub_core::config::AppConfig;
use uploadhub_core::config::storage::{StorageConfig, UploadLimit};
use uploadhub_core::traits::storage::ArtifactStore;
use uploadhub_service::IngestService;
use uploadhub_storage::LocalStorageProvider;

/// Boundary used for hand-built multipart bodies.
pub const BOUNDARY: &str = "uploadhub-test-boundary";

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Temporary upload destination, removed on drop.
    pub upload_dir: TempDir,
}

impl TestApp {
    /// Create a new test application with the given size policy.
    pub async fn new(limit: UploadLimit) -> Self {
        let upload_dir = tempfile::tempdir().expect("Failed to create temp dir");

        let config = AppConfig {
            storage: StorageConfig {
                upload_dir: upload_dir.path().to_string_lossy().into_owned(),
                max_upload_bytes: limit,
            },
            ..AppConfig::default()
        };

        let store: Arc<dyn ArtifactStore> = Arc::new(
            LocalStorageProvider::new(&config.storage.upload_dir)
                .await
                .expect("Failed to init storage"),
        );
        let ingest_service = Arc::new(IngestService::new(
            Arc::clone(&store),
            config.storage.clone(),
        ));

        let app_state = AppState {
            config: Arc::new(config),
            store,
            ingest_service,
        };

        Self {
            router: uploadhub_api::router::build_router(app_state),
            upload_dir,
        }
    }

    /// POST a multipart body to `/api/uploads`.
    ///
    /// Each part is `(field_name, file_name, content)`; a `None` file name
    /// produces a plain (non-file) form field.
    pub async fn upload(&self, parts: &[(&str, Option<&str>, &[u8])]) -> TestResponse {
        let body = multipart_body(parts);

        let req = Request::builder()
            .method("POST")
            .uri("/api/uploads")
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Make an arbitrary request to the test app.
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Names of the files currently present in the upload directory.
    pub fn stored_files(&self) -> Vec<String> {
        list_files(self.upload_dir.path())
    }
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body.
    pub body: Value,
}

/// List file names in a directory (empty if it does not exist).
pub fn list_files(dir: &Path) -> Vec<String> {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Build a multipart/form-data body with the [`BOUNDARY`] boundary.
pub fn multipart_body(parts: &[(&str, Option<&str>, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, file_name, content) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match file_name {
            Some(f) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{f}\"\r\n\
                     Content-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
            ),
        }
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}
