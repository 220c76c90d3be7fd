//! Local Directory Implementation
//!
//! Implements the directory ports for a root on local disk.

use std::path::{Component, Path, PathBuf};

use crate::domain::ports::directory::{DirectoryRead, DirectoryWrite, FsError, FsResult};

use super::atomic::atomic_write;

/// A directory root on local disk
///
/// Paths are not canonicalized: absolute paths handed to
/// [`DirectoryRead::relative_path`] must be built from the same root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalDirectory {
    root: PathBuf,
}

impl LocalDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DirectoryRead for LocalDirectory {
    fn root(&self) -> &Path {
        &self.root
    }

    fn absolute_path(&self, relative: &str) -> PathBuf {
        if relative.is_empty() {
            return self.root.clone();
        }
        self.root.join(relative)
    }

    fn relative_path(&self, absolute: &Path) -> FsResult<String> {
        let rest = absolute
            .strip_prefix(&self.root)
            .map_err(|_| FsError::OutsideRoot {
                path: absolute.to_path_buf(),
                root: self.root.clone(),
            })?;

        let mut segments = Vec::new();
        for component in rest.components() {
            match component {
                Component::Normal(part) => segments.push(part.to_string_lossy().into_owned()),
                Component::CurDir => {}
                _ => {
                    return Err(FsError::OutsideRoot {
                        path: absolute.to_path_buf(),
                        root: self.root.clone(),
                    })
                }
            }
        }
        Ok(segments.join("/"))
    }

    fn is_file(&self, relative: &str) -> bool {
        self.absolute_path(relative).is_file()
    }

    fn read_file(&self, relative: &str) -> FsResult<Vec<u8>> {
        let path = self.absolute_path(relative);
        std::fs::read(&path).map_err(|e| FsError::from_io(&path, e))
    }
}

impl DirectoryWrite for LocalDirectory {
    fn write_file(&self, relative: &str, content: &[u8]) -> FsResult<()> {
        let path = self.absolute_path(relative);
        atomic_write(&path, content).map_err(|e| FsError::from_io(&path, e))
    }
}
