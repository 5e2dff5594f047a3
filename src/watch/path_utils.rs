// src/watch/path_utils.rs

//! Utility functions for path handling in the watcher.

use std::path::{Path, PathBuf};

use crate::fs::FileSystem;

/// Whether an event `path` refers to the watched file `target`.
///
/// `target` is expected to be canonical already.
/// - First we compare directly.
/// - If that fails (e.g. symlinks, or /private/var vs /var on macOS) we
///   canonicalize the event path and compare again.
/// - A path that no longer exists can only match directly.
pub fn is_same_file(fs: &dyn FileSystem, target: &Path, path: &Path) -> bool {
    if path == target {
        return true;
    }

    match fs.canonicalize(path) {
        Ok(canon) => canon == target,
        Err(_) => false,
    }
}

/// Stable absolute form of a watch target, comparable with notify event paths.
///
/// An existing file is canonicalized. A file that does not exist yet keeps its
/// name under the canonical parent directory; if the parent is missing too,
/// the path is only made absolute against the working directory.
pub fn resolve_watch_path(fs: &dyn FileSystem, path: &Path) -> PathBuf {
    if let Ok(canon) = fs.canonicalize(path) {
        return canon;
    }

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if let (Ok(dir), Some(name)) = (fs.canonicalize(parent), path.file_name()) {
        return dir.join(name);
    }

    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
