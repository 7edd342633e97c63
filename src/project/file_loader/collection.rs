use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::parsing::{get_extension, validate_extension};
use crate::project::LoadError;

/// Recursively collect the source files under `root`.
///
/// Only files whose extension is in `extensions` are returned. Paths are
/// sorted so that enumeration order does not depend on the filesystem.
/// Unreadable directory entries are logged and skipped.
pub fn collect_file_paths(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, LoadError> {
    if !root.exists() {
        return Err(LoadError::RootNotFound(root.to_path_buf()));
    }

    let mut paths: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", root.display(), err);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| {
            get_extension(path)
                .and_then(|ext| validate_extension(ext, extensions))
                .is_ok()
        })
        .collect();
    paths.sort();

    tracing::debug!("Found {} source files under {}", paths.len(), root.display());
    Ok(paths)
}
