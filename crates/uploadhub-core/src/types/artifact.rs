//! The stored-artifact descriptor returned to callers.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Metadata record describing where and how an uploaded file was persisted.
///
/// This is the only metadata the service produces — there are no sidecar
/// files and no database rows. Callers that need the record later must
/// persist it themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredArtifact {
    /// The file name exactly as submitted by the client. Display and audit
    /// use only — never used as a filesystem path component.
    pub original_name: String,
    /// The generated name the artifact was stored under. Unique within the
    /// destination directory and safe as a single path component.
    pub stored_file_name: String,
    /// Absolute filesystem path the content was written to.
    pub path: PathBuf,
    /// Byte length of the content actually written.
    pub size: u64,
}
