//! Atomic file writes
//!
//! Content is written to a temporary file in the destination directory and
//! renamed over the target, so readers see either the old or the new file.
//! Two writers racing on the same path end with one complete file.

use std::io::Write;
use std::path::Path;

pub fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
