//! Rule-based static file fallback
//!
//! Candidates are tried in a fixed order and the first existing file wins.
//! For each location the locale-specific `i18n/<locale>` directory is tried
//! before the plain one.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::entities::Theme;
use crate::domain::ports::StaticFileFallback;
use crate::domain::value_objects::assert_file_path_format;

/// Area whose module `view/` files are shared by every other area
pub const BASE_AREA: &str = "base";

#[derive(Debug, Clone, Default)]
pub struct RuleFallback {
    modules: BTreeMap<String, PathBuf>,
    lib_web: Option<PathBuf>,
}

impl RuleFallback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module's source directory (the one holding `view/`)
    pub fn with_module(mut self, name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        self.modules.insert(name.into(), dir.into());
        self
    }

    pub fn with_modules(mut self, modules: BTreeMap<String, PathBuf>) -> Self {
        self.modules.extend(modules);
        self
    }

    pub fn with_lib_web(mut self, dir: impl Into<PathBuf>) -> Self {
        self.lib_web = Some(dir.into());
        self
    }

    /// All candidate paths, in lookup order
    pub fn candidates(
        &self,
        area: &str,
        theme: Option<&Theme>,
        locale: &str,
        file_path: &str,
        module: Option<&str>,
    ) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        let mut themes = theme.into_iter().flat_map(|t| t.inheritance());

        if let Some(current) = themes.next() {
            push_web(&mut candidates, &theme_web_dir(current, module), locale, file_path);
        }

        if let Some(module) = module {
            if let Some(module_dir) = self.modules.get(module) {
                let mut areas = vec![area];
                if area != BASE_AREA {
                    areas.push(BASE_AREA);
                }
                for area in areas {
                    let web = module_dir.join("view").join(area).join("web");
                    push_web(&mut candidates, &web, locale, file_path);
                }
            }
        }

        for ancestor in themes {
            push_web(&mut candidates, &theme_web_dir(ancestor, module), locale, file_path);
        }

        if module.is_none() {
            if let Some(lib_web) = &self.lib_web {
                candidates.push(lib_web.join(file_path));
            }
        }

        candidates
    }
}

fn theme_web_dir(theme: &Theme, module: Option<&str>) -> PathBuf {
    match module {
        Some(module) => theme.dir().join(module).join("web"),
        None => theme.dir().join("web"),
    }
}

fn push_web(candidates: &mut Vec<PathBuf>, web: &Path, locale: &str, file_path: &str) {
    if !locale.is_empty() {
        candidates.push(web.join("i18n").join(locale).join(file_path));
    }
    candidates.push(web.join(file_path));
}

fn is_plain_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(&['/', '\\'][..])
}

impl StaticFileFallback for RuleFallback {
    fn get_file(
        &self,
        area: &str,
        theme: Option<&Theme>,
        locale: &str,
        file_path: &str,
        module: Option<&str>,
    ) -> Option<PathBuf> {
        if let Err(e) = assert_file_path_format(file_path) {
            tracing::warn!(file = %file_path, error = %e, "rejecting fallback lookup");
            return None;
        }
        let locale_ok = locale.is_empty() || is_plain_segment(locale);
        if !is_plain_segment(area) || !locale_ok || !module.map_or(true, is_plain_segment) {
            tracing::warn!(area, locale, module, "rejecting fallback lookup with invalid segment");
            return None;
        }

        self.candidates(area, theme, locale, file_path, module)
            .into_iter()
            .find(|candidate| candidate.is_file())
    }
}
