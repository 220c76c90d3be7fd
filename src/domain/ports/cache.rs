//! PreprocessCache port - storage for memoized preprocessing results
//!
//! Keys and values are opaque strings to the store. The store is shared by
//! concurrent requests; a store without atomic operations may cause
//! duplicate recomputation, never corruption.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cache store unavailable: {0}")]
    Unavailable(String),
}

pub trait PreprocessCache: Send + Sync {
    /// Load the value stored under `key`, `None` on a miss
    fn load(&self, key: &str) -> Result<Option<String>, CacheError>;

    fn save(&self, value: &str, key: &str) -> Result<(), CacheError>;
}
