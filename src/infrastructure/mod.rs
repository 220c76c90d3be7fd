//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Named local directories
//! - `cache/` - Preprocessing cache stores (file, memory)
//! - `theme/` - Theme discovery in the design directory
//! - `fallback/` - Static file fallback rules
//! - `transformers/` - Preprocessing steps and the configured pool

pub mod cache;
pub mod fallback;
pub mod fs;
pub mod theme;
pub mod transformers;

pub use cache::{FileCache, MemoryCache};
pub use fallback::RuleFallback;
pub use fs::{LocalDirectory, LocalFilesystem};
pub use theme::DesignThemeList;
pub use transformers::ConfiguredPool;
