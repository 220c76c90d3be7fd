//! Theme entity
//!
//! A design theme with its inheritance chain. Fallback resolution walks the
//! chain from the theme itself up to the root ancestor.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    area: String,
    code: String,
    dir: PathBuf,
    parent: Option<Box<Theme>>,
}

impl Theme {
    /// `code` is the theme path within its area, e.g. `Vendor/blank`
    pub fn new(area: impl Into<String>, code: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            area: area.into(),
            code: code.into(),
            dir: dir.into(),
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: Theme) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// `<area>/<code>`
    pub fn full_path(&self) -> String {
        format!("{}/{}", self.area, self.code)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn parent(&self) -> Option<&Theme> {
        self.parent.as_deref()
    }

    /// The theme followed by its ancestors, nearest first
    pub fn inheritance(&self) -> impl Iterator<Item = &Theme> {
        std::iter::successors(Some(self), |theme| theme.parent())
    }
}
