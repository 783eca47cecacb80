/// Placeholder used when a call carries no usable path
pub const FALLBACK_FILE_NAME: &str = "file";

/// Last `/`-separated segment of `path`.
///
/// Missing or empty paths yield `"file"`; a path whose last segment is empty
/// (a trailing slash) is returned whole.
pub fn file_name(path: Option<&str>) -> &str {
    match path {
        None | Some("") => FALLBACK_FILE_NAME,
        Some(path) => match path.rsplit('/').next() {
            Some(last) if !last.is_empty() => last,
            _ => path,
        },
    }
}
