//! File system utilities.

use crate::Result;
use std::path::Path;

/// Check if a path exists and is a directory.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(crate::Error::PathNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return Err(crate::Error::NotADirectory(path.display().to_string()));
    }
    Ok(())
}

/// Split a file name at its last `.` into stem and extension.
///
/// The extension keeps its leading dot. A name without a dot has no
/// extension, while a dotfile such as `.hidden` is all extension.
pub fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(idx) => (&name[..idx], Some(&name[idx..])),
        None => (name, None),
    }
}

/// Get a file name's extension (with its leading dot) in lowercase.
pub fn get_extension(name: &str) -> Option<String> {
    split_extension(name).1.map(|e| e.to_lowercase())
}
