//! Asset path validation
//!
//! A well-formed asset file path is:
//! - relative (no leading `/`, no drive prefix)
//! - `/` separators only
//! - no empty, `.` or `..` segments

use std::path::Path;

use thiserror::Error;

/// Error when an asset file path is not well-formed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("file path is empty")]
    Empty,

    #[error("file path '{path}' is absolute, a relative path is required")]
    AbsoluteNotAllowed { path: String },

    #[error("file path '{path}' uses '\\' separators, only '/' is allowed")]
    Backslash { path: String },

    #[error("file path '{path}' contains traversal components (..)")]
    ContainsTraversal { path: String },

    #[error("file path '{path}' is not normalized (empty or '.' segment)")]
    NotNormalized { path: String },
}

/// Check that `path` is a well-formed relative asset file path
///
/// Runs before a path is joined to any directory, so a malformed path is
/// rejected up front rather than surfacing later as an I/O error.
pub fn assert_file_path_format(path: &str) -> Result<(), PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }

    if path.contains('\\') {
        return Err(PathError::Backslash {
            path: path.to_string(),
        });
    }

    if path.starts_with('/') || Path::new(path).is_absolute() || has_drive_prefix(path) {
        return Err(PathError::AbsoluteNotAllowed {
            path: path.to_string(),
        });
    }

    for segment in path.split('/') {
        match segment {
            ".." => {
                return Err(PathError::ContainsTraversal {
                    path: path.to_string(),
                })
            }
            "" | "." => {
                return Err(PathError::NotNormalized {
                    path: path.to_string(),
                })
            }
            _ => {}
        }
    }

    Ok(())
}

fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
