use std::path::Path;

/// Album name for a library path: its last segment, or the whole path when
/// it has none (e.g. `/`).
///
/// ```
/// use musicat::foundation::utils::album_name_from_path;
///
/// assert_eq!(album_name_from_path("/music/Abbey Road"), "Abbey Road");
/// assert_eq!(album_name_from_path("/music/Abbey Road/"), "Abbey Road");
/// ```
pub fn album_name_from_path(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

/// Whether the file name ends in one of `extensions` (leading dot, exact case).
pub fn has_extension(path: &Path, extensions: &[impl AsRef<str>]) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| {
            extensions.iter().any(|ext| {
                let ext = ext.as_ref();
                name.len() > ext.len() && name.ends_with(ext)
            })
        })
        .unwrap_or(false)
}
