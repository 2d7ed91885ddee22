//! Storage name derivation for uploaded files.
//!
//! Client-supplied file names are untrusted bytes. Before a name is used
//! as a filesystem path component it is passed through an allow-list
//! filter, and every stored name is prefixed with a timestamp + UUID token
//! so that two uploads with the same original name never collide.

use chrono::Utc;
use uuid::Uuid;

use crate::error::AppError;
use crate::result::AppResult;

/// Replace every character outside `[A-Za-z0-9._-]` with `_`.
///
/// The output has the same character count as the input. Path separators
/// fall outside the allow-list, so the result is always safe as a single
/// path component.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// A collision-resistant prefix: `<epoch-millis>-<uuid-v4>`.
///
/// The millisecond timestamp keeps directory listings roughly
/// chronological; the random UUID differentiates uploads that land in the
/// same millisecond.
pub fn unique_prefix() -> String {
    format!("{}-{}", Utc::now().timestamp_millis(), Uuid::new_v4())
}

/// Derive the full storage name for an uploaded file:
/// `<epoch-millis>-<uuid-v4>-<sanitized-original>`.
///
/// Rejects names whose sanitized form contains no alphanumeric character
/// at all, to avoid degenerate stored names like `1700000000000-...-___`.
pub fn storage_file_name(original_name: &str) -> AppResult<String> {
    let safe = sanitize_file_name(original_name);
    if !safe.bytes().any(|b| b.is_ascii_alphanumeric()) {
        return Err(AppError::validation(
            "File name must contain at least one alphanumeric character",
        ));
    }
    Ok(format!("{}-{}", unique_prefix(), safe))
}
