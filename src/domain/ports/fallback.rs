//! Fallback ports - theme lookup and static file search
//!
//! The search itself lives in infrastructure; the domain only relies on it
//! being deterministic and returning the first match.

use std::path::PathBuf;

use crate::domain::entities::Theme;

pub trait ThemeList: Send + Sync {
    /// Look up a theme by `<area>/<theme path>`
    fn theme_by_full_path(&self, full_path: &str) -> Option<Theme>;
}

pub trait StaticFileFallback: Send + Sync {
    /// Absolute path of the best-matching physical file, if any
    fn get_file(
        &self,
        area: &str,
        theme: Option<&Theme>,
        locale: &str,
        file_path: &str,
        module: Option<&str>,
    ) -> Option<PathBuf>;
}
