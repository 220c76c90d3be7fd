//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod app_mode;
mod asset_path;
mod cache_key;
mod cached_location;
mod content_type;
mod directory_code;

pub use app_mode::AppMode;
pub use asset_path::{assert_file_path_format, PathError};
pub use cache_key::CacheKey;
pub use cached_location::{CachedLocation, DecodeError, ENCODING_VERSION};
pub use content_type::{content_type_of, with_content_type};
pub use directory_code::DirectoryCode;
