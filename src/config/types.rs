//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::DEFAULT_MATERIALIZATION_DIR;
use crate::domain::value_objects::{AppMode, DirectoryCode};

use super::loader::{self, ConfigWarning};
use super::ConfigError;

/// Named directories
///
/// Relative paths are resolved against the project directory (the one
/// holding `assetry.toml`); `var` and `extra` entries against `root`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoriesConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,

    #[serde(default = "default_var")]
    pub var: PathBuf,

    /// Additional directory codes usable as a direct context base
    #[serde(default)]
    pub extra: BTreeMap<String, PathBuf>,
}

impl Default for DirectoriesConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            var: default_var(),
            extra: BTreeMap::new(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_var() -> PathBuf {
    PathBuf::from("var")
}

/// Theme and module layout used by fallback resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignConfig {
    #[serde(default = "default_themes")]
    pub themes: PathBuf,

    #[serde(default)]
    pub lib_web: Option<PathBuf>,

    /// Module name (e.g. `Acme_Cart`) to its source directory
    #[serde(default)]
    pub modules: BTreeMap<String, PathBuf>,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            themes: default_themes(),
            lib_web: None,
            modules: BTreeMap::new(),
        }
    }
}

fn default_themes() -> PathBuf {
    PathBuf::from("app/design")
}

/// One preprocessing pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub source_type: String,

    /// Matches any target type when absent
    #[serde(default)]
    pub target_type: Option<String>,

    #[serde(default)]
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessConfig {
    #[serde(default)]
    pub mode: AppMode,

    #[serde(default = "default_materialization_dir")]
    pub materialization_dir: String,

    /// Content type changes allowed in developer mode, source -> target
    #[serde(default)]
    pub compatible_types: BTreeMap<String, String>,

    /// Values for `{{name}}` placeholders
    #[serde(default)]
    pub variables: BTreeMap<String, String>,

    #[serde(default)]
    pub pipelines: Vec<PipelineConfig>,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            mode: AppMode::default(),
            materialization_dir: default_materialization_dir(),
            compatible_types: BTreeMap::new(),
            variables: BTreeMap::new(),
            pipelines: Vec::new(),
        }
    }
}

fn default_materialization_dir() -> String {
    DEFAULT_MATERIALIZATION_DIR.to_string()
}

/// Preprocess cache store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    #[default]
    File,
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default)]
    pub backend: CacheBackend,

    /// File cache location, relative to the var directory
    #[serde(default = "default_cache_dir")]
    pub dir: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            dir: default_cache_dir(),
        }
    }
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from("cache/preprocess")
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub directories: DirectoriesConfig,

    #[serde(default)]
    pub design: DesignConfig,

    #[serde(default)]
    pub preprocess: PreprocessConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Like [`Config::load_or_default`], also returning the file that was used
    pub fn load_discovered(project_root: Option<&Path>) -> (Self, Option<PathBuf>) {
        loader::load_discovered(project_root)
    }

    /// Apply environment variable overrides (ASSETRY_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Absolute root directory, given the directory paths are relative to
    pub fn root_dir(&self, base: &Path) -> PathBuf {
        base.join(&self.directories.root)
    }

    pub fn var_dir(&self, base: &Path) -> PathBuf {
        self.root_dir(base).join(&self.directories.var)
    }

    pub fn themes_dir(&self, base: &Path) -> PathBuf {
        self.root_dir(base).join(&self.design.themes)
    }

    pub fn cache_dir(&self, base: &Path) -> PathBuf {
        self.var_dir(base).join(&self.cache.dir)
    }

    /// Check cross-field constraints serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mat = self.preprocess.materialization_dir.trim_matches('/');
        if mat.is_empty() || mat.split('/').any(|s| s.is_empty() || s == "." || s == "..") {
            return Err(ConfigError::Invalid {
                message: format!(
                    "preprocess.materialization_dir '{}' must be a plain relative path",
                    self.preprocess.materialization_dir
                ),
            });
        }

        for code in self.directories.extra.keys() {
            if code == DirectoryCode::ROOT || code == DirectoryCode::VAR_DIR {
                return Err(ConfigError::Invalid {
                    message: format!("directories.extra cannot redefine '{}'", code),
                });
            }
        }

        Ok(())
    }
}
