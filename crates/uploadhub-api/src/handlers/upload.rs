//! File upload ingestion handler.

use axum::Json;
use axum::extract::{Multipart, State};
use bytes::BytesMut;

use uploadhub_core::error::AppError;
use uploadhub_core::types::artifact::StoredArtifact;
use uploadhub_service::ingest::SIZE_EXCEEDED_MESSAGE;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/uploads — single-file multipart upload.
///
/// Expects exactly one file-typed field named `file`. The size limit is
/// enforced on observed bytes while the field is drained, never on a
/// client-declared size, so a forged declaration cannot smuggle an
/// oversized payload past the policy.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<StoredArtifact>, ApiError> {
    let limit = state.config.storage.max_upload_bytes;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        // A `file` field without a filename is not a file-typed field.
        let Some(original_name) = field.file_name().map(String::from) else {
            continue;
        };

        let mut data = BytesMut::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| AppError::validation(format!("Read error: {e}")))?
        {
            if !limit.allows(data.len() as u64 + chunk.len() as u64) {
                return Err(AppError::payload_too_large(SIZE_EXCEEDED_MESSAGE).into());
            }
            data.extend_from_slice(&chunk);
        }

        let artifact = state
            .ingest_service
            .ingest(&original_name, data.freeze())
            .await?;
        return Ok(Json(artifact));
    }

    Err(AppError::validation("File is required").into())
}
