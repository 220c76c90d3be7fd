//! File-backed preprocessing cache
//!
//! One file per key under the cache directory. File names are the SHA-256
//! of the key, so arbitrary keys map to safe, fixed-length names.

use std::path::PathBuf;

use sha2::{Digest, Sha256};

use crate::domain::ports::cache::{CacheError, PreprocessCache};
use crate::infrastructure::fs::atomic_write;

#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file holding `key`
    pub fn entry_path(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(key.as_bytes());
        self.dir.join(format!("{:x}", digest))
    }
}

impl PreprocessCache for FileCache {
    fn load(&self, key: &str) -> Result<Option<String>, CacheError> {
        match std::fs::read_to_string(self.entry_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CacheError::Io {
                key: key.to_string(),
                source: e,
            }),
        }
    }

    fn save(&self, value: &str, key: &str) -> Result<(), CacheError> {
        atomic_write(&self.entry_path(key), value.as_bytes()).map_err(|e| CacheError::Io {
            key: key.to_string(),
            source: e,
        })
    }
}
