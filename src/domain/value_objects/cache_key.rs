//! Preprocessing cache key
//!
//! Keys are `<relative source path>:<logical asset path>`. The format is
//! shared with other processes reading the same cache store, so it must stay
//! byte-stable.

use std::fmt;

/// Deterministic key of one preprocessing result
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    pub const SEPARATOR: char = ':';

    pub fn new(relative_source_path: &str, logical_path: &str) -> Self {
        Self(format!(
            "{}{}{}",
            relative_source_path,
            Self::SEPARATOR,
            logical_path
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
