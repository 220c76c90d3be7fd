//! Assetry CLI - static asset resolution and preprocessing
//!
//! Usage: assetry [OPTIONS] <COMMAND>
//!
//! Commands:
//!   file     Print the absolute path of the (preprocessed) asset file
//!   content  Write the (preprocessed) asset content to stdout
//!   source   Print the source file path relative to the root

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use assetry::config::Config;
use assetry::presentation::cli::{Cli, Commands};
use assetry::presentation::factory::create_source_service;
use assetry::presentation::output::{render, OutputFormat, Resolved};

fn main() -> ExitCode {
    let cli = Cli::parse();
    assetry::logging::init(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns whether the asset was found
fn run(cli: &Cli) -> Result<bool> {
    let (config, base) = load_config(cli)?;
    let service = create_source_service(&config, &base)?;

    let asset = cli.command.asset_args().reference();
    let logical_path = asset.path();
    tracing::debug!(command = cli.command.name(), asset = %logical_path, "resolving asset");

    let resolved = match &cli.command {
        Commands::File(_) => service
            .get_file(&asset)?
            .map(|path| Resolved::Path(path.display().to_string())),
        Commands::Content(_) => service.get_content(&asset)?.map(Resolved::Content),
        Commands::Source(_) => service
            .find_relative_source_file_path(&asset)?
            .map(Resolved::Path),
    }
    .unwrap_or(Resolved::NotFound);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    render(
        OutputFormat::from_json_flag(cli.json),
        cli.command.name(),
        &logical_path,
        &resolved,
        &mut out,
        &mut err,
    )?;
    out.flush()?;

    Ok(resolved.is_found())
}

/// Explicit `--config` wins; otherwise project then user config
///
/// Relative directories resolve against the config file's directory, or
/// the working directory when no project file is used.
fn load_config(cli: &Cli) -> Result<(Config, PathBuf)> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;

    let (config, base, file) = match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            for warning in &warnings {
                tracing::warn!(
                    key = %warning.key,
                    line = warning.line,
                    suggestion = warning.suggestion.as_deref(),
                    "unknown configuration key"
                );
            }
            let base = config_base(path, &cwd);
            (config.with_env_overrides(), base, Some(path.clone()))
        }
        None => {
            let (config, file) = Config::load_discovered(Some(&cwd));
            (config, cwd.clone(), file)
        }
    };

    let mut config = config;
    if let Some(mode) = cli.mode {
        config.preprocess.mode = mode;
    }
    match &file {
        Some(file) => tracing::debug!(
            base = %base.display(),
            file = %file.display(),
            "configuration loaded"
        ),
        None => tracing::debug!(base = %base.display(), "no configuration file, using defaults"),
    }
    Ok((config, base))
}

fn config_base(path: &Path, cwd: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => cwd.join(parent),
        _ => cwd.to_path_buf(),
    }
}
