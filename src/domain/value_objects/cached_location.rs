//! Cached Location Value Object
//!
//! The memoized result of preprocessing one asset: which directory the final
//! file lives in and its path relative to that directory.
//!
//! Stored in the cache as versioned JSON:
//!
//! ```text
//! {"dir":"var","path":"tmp/source/css/widgets.css","v":1}
//! ```

use serde::Deserialize;
use thiserror::Error;

use super::DirectoryCode;

/// Current version of the cache value encoding
pub const ENCODING_VERSION: u32 = 1;

/// Error decoding a cached value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("malformed cached location: {0}")]
    Malformed(String),

    #[error("cached location encoding version {found} is not supported (expected {expected})")]
    VersionMismatch { found: u32, expected: u32 },
}

/// Where a (possibly materialized) asset can be read from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CachedLocation {
    directory: DirectoryCode,
    path: String,
}

#[derive(Deserialize)]
struct EncodedLocation {
    v: u32,
    dir: String,
    path: String,
}

impl CachedLocation {
    pub fn new(directory: DirectoryCode, path: impl Into<String>) -> Self {
        Self {
            directory,
            path: path.into(),
        }
    }

    pub fn directory(&self) -> &DirectoryCode {
        &self.directory
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn encode(&self) -> String {
        serde_json::json!({
            "v": ENCODING_VERSION,
            "dir": self.directory.as_str(),
            "path": self.path,
        })
        .to_string()
    }

    pub fn decode(raw: &str) -> Result<Self, DecodeError> {
        let encoded: EncodedLocation =
            serde_json::from_str(raw).map_err(|e| DecodeError::Malformed(e.to_string()))?;

        if encoded.v != ENCODING_VERSION {
            return Err(DecodeError::VersionMismatch {
                found: encoded.v,
                expected: ENCODING_VERSION,
            });
        }

        Ok(Self::new(DirectoryCode::new(encoded.dir), encoded.path))
    }
}
