//! Test environment builder for isolated Assetry testing.
//!
//! `TestEnv` owns a temporary project directory laid out like a real
//! install (themes under `app/design`, modules under `app/code`, library
//! files under `lib/web`) and runs the `assetry` binary against it.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use assetry::config::{Config, PROJECT_CONFIG_FILE};
use assetry::SourceService;

use super::fixtures::{BLANK_THEME, PROJECT_CONFIG, SHOP_THEME};

/// Result of running an Assetry CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated project tree
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    /// Empty project with only `assetry.toml`
    pub fn new() -> Self {
        assetry::logging::init_test_logging(None);
        let env = Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
        };
        env.write(PROJECT_CONFIG_FILE, PROJECT_CONFIG);
        env
    }

    /// Project with `Acme/shop` inheriting from `Vendor/blank`
    pub fn with_themes() -> Self {
        let env = Self::new();
        env.write(
            &format!("app/design/frontend/{}/theme.toml", BLANK_THEME),
            "",
        );
        env.write(
            &format!("app/design/frontend/{}/theme.toml", SHOP_THEME),
            &format!("parent = \"{}\"\n", BLANK_THEME),
        );
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file, creating parent directories
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn config(&self) -> Config {
        Config::load(&self.path(PROJECT_CONFIG_FILE)).expect("Failed to load project config")
    }

    /// Service built the same way the CLI builds it
    pub fn service(&self) -> SourceService {
        self.service_with(self.config())
    }

    pub fn service_with(&self, config: Config) -> SourceService {
        assetry::create_source_service(&config, self.project_root.path())
            .expect("Failed to create source service")
    }

    /// Run the assetry binary from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_assetry"))
            .current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("RUST_LOG")
            .env_remove("ASSETRY_MODE")
            .env_remove("ASSETRY_ROOT")
            .env_remove("ASSETRY_VAR_DIR")
            .output()
            .expect("Failed to execute assetry");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Every file under `relative`, as sorted `/`-joined paths
    pub fn list_files(&self, relative: &str) -> Vec<String> {
        fn walk(dir: &Path, base: &Path, out: &mut Vec<String>) {
            let Ok(entries) = std::fs::read_dir(dir) else {
                return;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    walk(&path, base, out);
                } else if let Ok(rel) = path.strip_prefix(base) {
                    let parts: Vec<_> = rel
                        .components()
                        .map(|c| c.as_os_str().to_string_lossy().into_owned())
                        .collect();
                    out.push(parts.join("/"));
                }
            }
        }

        let base = self.path(relative);
        let mut files = Vec::new();
        walk(&base, &base, &mut files);
        files.sort();
        files
    }
}
