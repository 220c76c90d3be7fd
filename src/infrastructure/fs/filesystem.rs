//! Local Filesystem
//!
//! Maps directory codes to [`LocalDirectory`] roots.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::ports::directory::{
    DirectoryRead, DirectoryWrite, Filesystem, FsError, FsResult,
};
use crate::domain::value_objects::DirectoryCode;

use super::LocalDirectory;

#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    directories: BTreeMap<DirectoryCode, LocalDirectory>,
}

impl LocalFilesystem {
    /// Register the root and var directories
    pub fn new(root: impl Into<PathBuf>, var: impl Into<PathBuf>) -> Self {
        let mut directories = BTreeMap::new();
        directories.insert(DirectoryCode::root(), LocalDirectory::new(root));
        directories.insert(DirectoryCode::var(), LocalDirectory::new(var));
        Self { directories }
    }

    /// Register (or replace) another named directory
    pub fn with_directory(mut self, code: DirectoryCode, path: impl Into<PathBuf>) -> Self {
        self.directories.insert(code, LocalDirectory::new(path));
        self
    }

    fn directory(&self, code: &DirectoryCode) -> FsResult<&LocalDirectory> {
        self.directories
            .get(code)
            .ok_or_else(|| FsError::UnknownDirectory(code.clone()))
    }
}

impl Filesystem for LocalFilesystem {
    fn directory_read(&self, code: &DirectoryCode) -> FsResult<&dyn DirectoryRead> {
        Ok(self.directory(code)?)
    }

    fn directory_write(&self, code: &DirectoryCode) -> FsResult<&dyn DirectoryWrite> {
        Ok(self.directory(code)?)
    }
}
