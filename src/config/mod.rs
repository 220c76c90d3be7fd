//! Configuration module for Assetry
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ASSETRY_*)
//! 3. Project config (assetry.toml)
//! 4. User config (~/.config/assetry/config.toml)
//! 5. Built-in defaults (lowest priority)

use std::path::PathBuf;

use thiserror::Error;

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{
    CacheBackend, CacheConfig, Config, DesignConfig, DirectoriesConfig, PipelineConfig,
    PreprocessConfig,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("invalid configuration: {message}")]
    Invalid { message: String },

    #[error("unknown preprocessing step '{step}' in pipeline for '{source_type}'")]
    UnknownStep { step: String, source_type: String },
}
