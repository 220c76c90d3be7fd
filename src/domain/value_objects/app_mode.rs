//! Application Mode Value Object
//!
//! The deployment mode the host application runs in. Preprocessing uses it
//! to decide how strictly a finished transformation chain is validated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Deployment mode of the host application
///
/// - `Default`: lenient validation (default)
/// - `Developer`: strict validation, content type changes must be declared
/// - `Production`: lenient validation, assets are expected to be prebuilt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    #[default]
    Default,
    Developer,
    Production,
}

impl AppMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppMode::Default => "default",
            AppMode::Developer => "developer",
            AppMode::Production => "production",
        }
    }

    /// Whether finished chains are validated strictly
    pub fn is_strict(&self) -> bool {
        matches!(self, AppMode::Developer)
    }
}

impl fmt::Display for AppMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(AppMode::Default),
            "developer" | "dev" => Ok(AppMode::Developer),
            "production" | "prod" => Ok(AppMode::Production),
            other => Err(format!(
                "unknown application mode '{}' (expected default, developer or production)",
                other
            )),
        }
    }
}
