//! Output Rendering
//!
//! Text output prints the bare result so it can be piped; JSON output wraps
//! it in an object that also reports misses.

use std::io::{self, Write};

use serde::Serialize;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// What a command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Path(String),
    Content(Vec<u8>),
    NotFound,
}

impl Resolved {
    pub fn is_found(&self) -> bool {
        !matches!(self, Resolved::NotFound)
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    command: &'a str,
    asset: &'a str,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

/// Render `resolved` to `out`; a text-mode miss goes to `err`
pub fn render(
    format: OutputFormat,
    command: &str,
    asset: &str,
    resolved: &Resolved,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => match resolved {
            Resolved::Path(path) => writeln!(out, "{}", path),
            Resolved::Content(content) => out.write_all(content),
            Resolved::NotFound => writeln!(err, "asset not found: {}", asset),
        },
        OutputFormat::Json => {
            let report = JsonReport {
                command,
                asset,
                found: resolved.is_found(),
                path: match resolved {
                    Resolved::Path(path) => Some(path.as_str()),
                    _ => None,
                },
                content: match resolved {
                    Resolved::Content(content) => {
                        Some(String::from_utf8_lossy(content).into_owned())
                    }
                    _ => None,
                },
            };
            serde_json::to_writer(&mut *out, &report).map_err(io::Error::other)?;
            writeln!(out)
        }
    }
}
