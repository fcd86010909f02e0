//! Recursive discovery of content files by name.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Find every file named `file_name` under `root`, recursively.
///
/// Hidden directories and the entries in `skip_dirs` are never descended
/// into. A missing or non-directory root yields an empty result rather
/// than an error, so the auditor stays usable in partial checkouts.
/// Results are sorted so a fixed tree always produces the same order.
pub fn find_content_files(root: &Path, file_name: &str, skip_dirs: &[String]) -> Vec<PathBuf> {
    if !root.is_dir() {
        return Vec::new();
    }

    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| descend(e, skip_dirs))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && e.file_name() == file_name)
        .map(|e| e.path().to_path_buf())
        .collect();

    found.sort();
    found
}

fn descend(entry: &DirEntry, skip_dirs: &[String]) -> bool {
    if !entry.file_type().is_dir() {
        return true;
    }
    // The root itself is depth 0 and is always entered, even when hidden
    // (e.g. auditing from inside a dot-directory checkout).
    if entry.depth() == 0 {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    !name.starts_with('.') && !skip_dirs.iter().any(|s| s.as_str() == name)
}
