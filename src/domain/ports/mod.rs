//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod cache;
pub mod directory;
pub mod fallback;
pub mod transformer;

pub use cache::{CacheError, PreprocessCache};
pub use directory::{DirectoryRead, DirectoryWrite, Filesystem, FsError, FsResult};
pub use fallback::{StaticFileFallback, ThemeList};
pub use transformer::{Transformer, TransformerPool};
