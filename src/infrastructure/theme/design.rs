//! Design directory theme list
//!
//! Themes live at `<design dir>/<area>/<Vendor>/<name>/`. A theme may declare
//! its parent in `theme.toml`:
//!
//! ```toml
//! parent = "Vendor/blank"
//! ```
//!
//! Parents are resolved within the same area.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::Theme;
use crate::domain::ports::ThemeList;

pub const THEME_MANIFEST: &str = "theme.toml";

#[derive(Debug, Default, Deserialize)]
struct ThemeManifest {
    #[serde(default)]
    parent: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DesignThemeList {
    design_dir: PathBuf,
}

impl DesignThemeList {
    pub fn new(design_dir: impl Into<PathBuf>) -> Self {
        Self {
            design_dir: design_dir.into(),
        }
    }

    fn load(&self, area: &str, code: &str, visited: &mut HashSet<String>) -> Option<Theme> {
        if code.is_empty() || code.split('/').any(|s| s.is_empty() || s == "." || s == "..") {
            return None;
        }

        let dir = self.design_dir.join(area).join(code);
        if !dir.is_dir() {
            return None;
        }

        let full_path = format!("{}/{}", area, code);
        if !visited.insert(full_path.clone()) {
            tracing::warn!(theme = %full_path, "circular theme inheritance, ignoring parent");
            return None;
        }

        let theme = Theme::new(area, code, &dir);
        let Some(parent_code) = read_manifest(&dir).parent else {
            return Some(theme);
        };

        match self.load(area, &parent_code, visited) {
            Some(parent) => Some(theme.with_parent(parent)),
            None => {
                tracing::warn!(theme = %full_path, parent = %parent_code, "parent theme not found");
                Some(theme)
            }
        }
    }
}

fn read_manifest(dir: &Path) -> ThemeManifest {
    let path = dir.join(THEME_MANIFEST);
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return ThemeManifest::default(),
    };
    toml::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "invalid theme manifest");
        ThemeManifest::default()
    })
}

impl ThemeList for DesignThemeList {
    fn theme_by_full_path(&self, full_path: &str) -> Option<Theme> {
        let (area, code) = full_path.split_once('/')?;
        if area.is_empty() {
            return None;
        }
        self.load(area, code, &mut HashSet::new())
    }
}
