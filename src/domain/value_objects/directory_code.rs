//! Directory Code Value Object
//!
//! Names a logical storage root (the application root, the variable data
//! directory, a library web directory, ...). Codes are resolved to physical
//! directories by the `Filesystem` port.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a logical directory root
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectoryCode(String);

impl DirectoryCode {
    /// Code of the application root, where source files live
    pub const ROOT: &'static str = "base";
    /// Code of the variable data directory, where materialized files go
    pub const VAR_DIR: &'static str = "var";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn root() -> Self {
        Self::new(Self::ROOT)
    }

    pub fn var() -> Self {
        Self::new(Self::VAR_DIR)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DirectoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DirectoryCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for DirectoryCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for DirectoryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
