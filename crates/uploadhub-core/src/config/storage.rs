//! Upload storage configuration.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Upload storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Destination directory for uploaded artifacts. Created (including
    /// parents) at startup and re-created before every write if missing.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// Maximum accepted upload size (default 1 GiB).
    #[serde(default)]
    pub max_upload_bytes: UploadLimit,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            max_upload_bytes: UploadLimit::default(),
        }
    }
}

/// Maximum-size policy for a single upload.
///
/// Deserializes from a byte count (number or numeric string) or the string
/// `"unbounded"`. Any other value — negative, non-finite, or unparseable —
/// also disables the check: a misconfigured limit opens the gate rather
/// than closing it, so a typo in an override can never make the service
/// reject every upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadLimit {
    /// Uploads larger than this many bytes are rejected.
    Limited(u64),
    /// The size check is disabled.
    Unbounded,
}

impl UploadLimit {
    /// The byte cap, or `None` when the check is disabled.
    pub fn bytes(&self) -> Option<u64> {
        match self {
            Self::Limited(n) => Some(*n),
            Self::Unbounded => None,
        }
    }

    /// Whether a payload of `size` bytes passes the policy.
    pub fn allows(&self, size: u64) -> bool {
        match self {
            Self::Limited(n) => size <= *n,
            Self::Unbounded => true,
        }
    }
}

impl Default for UploadLimit {
    fn default() -> Self {
        // 1 GiB
        Self::Limited(1_073_741_824)
    }
}

impl Serialize for UploadLimit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Limited(n) => serializer.serialize_u64(*n),
            Self::Unbounded => serializer.serialize_str("unbounded"),
        }
    }
}

impl<'de> Deserialize<'de> for UploadLimit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LimitVisitor;

        impl Visitor<'_> for LimitVisitor {
            type Value = UploadLimit;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a byte count or \"unbounded\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(UploadLimit::Limited(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                if v >= 0 {
                    Ok(UploadLimit::Limited(v as u64))
                } else {
                    Ok(UploadLimit::Unbounded)
                }
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                if v.is_finite() && v >= 0.0 {
                    Ok(UploadLimit::Limited(v as u64))
                } else {
                    Ok(UploadLimit::Unbounded)
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                match v.trim().parse::<u64>() {
                    Ok(n) => Ok(UploadLimit::Limited(n)),
                    Err(_) => Ok(UploadLimit::Unbounded),
                }
            }
        }

        deserializer.deserialize_any(LimitVisitor)
    }
}

fn default_upload_dir() -> String {
    "./uploads".to_string()
}
