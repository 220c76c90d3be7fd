//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::AppMode;

use super::types::Config;
use super::ConfigError;

/// Project configuration file name
pub const PROJECT_CONFIG_FILE: &str = "assetry.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    config.validate()?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
///
/// A config file that exists but fails to load is skipped with a warning.
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    load_discovered(project_root).0
}

/// Same lookup as [`load_or_default`], also returning the file that was used
pub fn load_discovered(project_root: Option<&Path>) -> (Config, Option<PathBuf>) {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                for warning in &warnings {
                    tracing::warn!(
                        key = %warning.key,
                        file = %warning.file.display(),
                        line = warning.line,
                        suggestion = warning.suggestion.as_deref(),
                        "unknown configuration key"
                    );
                }
                return (with_env_overrides(config), Some(path));
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "skipping unreadable config");
            }
        }
    }

    (with_env_overrides(Config::default()), None)
}

/// `~/.config/assetry/config.toml` (platform equivalent)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("assetry").join("config.toml"))
}

/// Apply environment variable overrides (ASSETRY_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

pub(crate) fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // ASSETRY_MODE
    if let Some(mode) = var("ASSETRY_MODE") {
        match mode.parse::<AppMode>() {
            Ok(mode) => config.preprocess.mode = mode,
            Err(e) => tracing::warn!(error = %e, "ignoring ASSETRY_MODE"),
        }
    }

    // ASSETRY_ROOT
    if let Some(root) = var("ASSETRY_ROOT").filter(|v| !v.is_empty()) {
        config.directories.root = PathBuf::from(root);
    }

    // ASSETRY_VAR_DIR
    if let Some(var_dir) = var("ASSETRY_VAR_DIR").filter(|v| !v.is_empty()) {
        config.directories.var = PathBuf::from(var_dir);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "directories",
        "root",
        "var",
        "extra",
        "design",
        "themes",
        "lib_web",
        "modules",
        "preprocess",
        "mode",
        "materialization_dir",
        "compatible_types",
        "variables",
        "pipelines",
        "source_type",
        "target_type",
        "steps",
        "cache",
        "backend",
        "dir",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
