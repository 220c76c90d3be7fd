//! Content type inference from file paths

/// Infer a content type from a path: its lower-cased extension
///
/// Returns an empty string when the last segment has no extension.
pub fn content_type_of(path: &str) -> String {
    let name = path.rsplit(&['/', '\\'][..]).next().unwrap_or(path);
    match name.rfind('.') {
        Some(idx) => name[idx + 1..].to_lowercase(),
        None => String::new(),
    }
}

/// Replace the extension of the last segment of `path` with `content_type`
///
/// A path without an extension gets one appended.
pub fn with_content_type(path: &str, content_type: &str) -> String {
    let name_start = path.rfind('/').map(|i| i + 1).unwrap_or(0);
    let stem_end = match path[name_start..].rfind('.') {
        Some(0) | None => path.len(),
        Some(idx) => name_start + idx,
    };
    format!("{}.{}", &path[..stem_end], content_type)
}
