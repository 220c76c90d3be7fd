//! Directory ports - access to named logical storage roots
//!
//! Paths handed to a directory are relative to its root and use `/`
//! separators. Implementations:
//! - `LocalDirectory` / `LocalFilesystem` - directories on local disk
//! - in-memory fakes in tests

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::value_objects::DirectoryCode;

/// Result type for directory operations
pub type FsResult<T> = Result<T, FsError>;

/// Directory operation errors
#[derive(Debug, Error)]
pub enum FsError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("path '{}' is outside of directory '{}'", .path.display(), .root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("directory '{0}' is not registered")]
    UnknownDirectory(DirectoryCode),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classify an I/O error raised while accessing `path`
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// Read access to one directory root
pub trait DirectoryRead: Send + Sync {
    /// Physical root of this directory
    fn root(&self) -> &Path;

    /// Absolute path of a relative path inside this directory
    fn absolute_path(&self, relative: &str) -> PathBuf;

    /// Path of `absolute` relative to this directory, with `/` separators
    fn relative_path(&self, absolute: &Path) -> FsResult<String>;

    /// Whether a regular file exists at `relative`
    fn is_file(&self, relative: &str) -> bool;

    fn read_file(&self, relative: &str) -> FsResult<Vec<u8>>;
}

/// Write access to one directory root
pub trait DirectoryWrite: DirectoryRead {
    /// Write `content`, creating parent directories as needed
    ///
    /// Writers of the same path must never observe a torn file.
    fn write_file(&self, relative: &str, content: &[u8]) -> FsResult<()>;
}

/// Registry of directories by code
pub trait Filesystem: Send + Sync {
    fn directory_read(&self, code: &DirectoryCode) -> FsResult<&dyn DirectoryRead>;

    fn directory_write(&self, code: &DirectoryCode) -> FsResult<&dyn DirectoryWrite>;
}
