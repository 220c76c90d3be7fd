//! Error types for Assetry
//!
//! Each layer has its own `thiserror` enum; [`AssetryError`] wraps them for
//! callers that drive the whole stack (the CLI, embedding applications).

use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::entities::ChainError;
use crate::domain::ports::{CacheError, FsError};
use crate::domain::services::SourceError;
use crate::domain::value_objects::PathError;

/// Result type alias for Assetry operations
pub type AssetryResult<T> = Result<T, AssetryError>;

/// Main error type for Assetry operations
#[derive(Error, Debug)]
pub enum AssetryError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Filesystem(#[from] FsError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
