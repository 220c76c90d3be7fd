//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Every command takes the same asset selector: a file path, an optional
//! module, and either a design context (`--area`, `--theme`, `--locale`) or
//! a directory context (`--base`, `--context-path`).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::entities::{AssetReference, DirectContext, FallbackContext};
use crate::domain::value_objects::{AppMode, DirectoryCode};

/// Assetry - static asset resolution and preprocessing
#[derive(Parser, Debug)]
#[command(name = "assetry")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./assetry.toml, then the user config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the application mode (default, developer, production)
    #[arg(long, global = true, value_name = "MODE")]
    pub mode: Option<AppMode>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the absolute path of the (preprocessed) asset file
    File(AssetArgs),

    /// Write the (preprocessed) asset content to stdout
    Content(AssetArgs),

    /// Print the source file path relative to the root, without preprocessing
    Source(AssetArgs),
}

impl Commands {
    pub fn asset_args(&self) -> &AssetArgs {
        match self {
            Commands::File(args) | Commands::Content(args) | Commands::Source(args) => args,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Commands::File(_) => "file",
            Commands::Content(_) => "content",
            Commands::Source(_) => "source",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct AssetArgs {
    /// Asset file path, e.g. `css/styles.css`
    pub file_path: String,

    /// Owning module, e.g. `Acme_Cart`
    #[arg(long)]
    pub module: Option<String>,

    /// Design area, e.g. `frontend`
    #[arg(long, required_unless_present = "base", conflicts_with = "base")]
    pub area: Option<String>,

    /// Theme path within the area, e.g. `Vendor/luma`
    #[arg(long, conflicts_with = "base")]
    pub theme: Option<String>,

    /// Locale, e.g. `en_US`
    #[arg(long, required_unless_present = "base", conflicts_with = "base")]
    pub locale: Option<String>,

    /// Directory code for a direct lookup, e.g. `base` or `var`
    #[arg(long)]
    pub base: Option<String>,

    /// Path inside the `--base` directory
    #[arg(long, requires = "base")]
    pub context_path: Option<String>,
}

impl AssetArgs {
    /// The asset reference these arguments select
    pub fn reference(&self) -> AssetReference {
        let asset = match &self.base {
            Some(base) => AssetReference::new(
                self.file_path.as_str(),
                DirectContext::new(DirectoryCode::new(base.as_str()))
                    .with_context_path(self.context_path.clone().unwrap_or_default()),
            ),
            None => AssetReference::new(
                self.file_path.as_str(),
                FallbackContext::new(
                    self.area.clone().unwrap_or_default(),
                    self.theme.clone().unwrap_or_default(),
                    self.locale.clone().unwrap_or_default(),
                ),
            ),
        };
        match &self.module {
            Some(module) => asset.with_module(module.as_str()),
            None => asset,
        }
    }
}
