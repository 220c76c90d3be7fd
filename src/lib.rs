//! Assetry - static asset resolution and preprocessing
//!
//! Assetry turns a logical asset reference (a file path in a design or
//! directory context) into a physical file: it finds the source through
//! theme/module/library fallback, runs the configured preprocessing steps,
//! materializes changed output under the var directory and memoizes the
//! result so repeated requests skip the work.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use config::{Config, ConfigError};
pub use domain::entities::{
    AssetContext, AssetReference, DirectContext, FallbackContext, RemoteContext, Theme,
    TransformationChain,
};
pub use domain::services::{SourceError, SourceResult, SourceService};
pub use domain::value_objects::{AppMode, CacheKey, CachedLocation, DirectoryCode};
pub use error::{AssetryError, AssetryResult};
pub use presentation::factory::create_source_service;
