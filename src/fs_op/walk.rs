use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::filter::PathFilter;
use crate::fs_op::error::NormalizeError;

/// Recursively list the files under `root` that `filter` does not exclude.
///
/// Symlinked directories are not descended into. A symlink whose target is a
/// regular file is listed under its link path; opening it reaches the target.
/// Entries within a directory are visited in file-name order. Excluded directories are still
/// descended into since the filter is evaluated per file path.
pub fn collect_files(root: &Path, filter: &dyn PathFilter) -> Result<Vec<PathBuf>, NormalizeError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry?;
        let is_file = entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }
        let path = entry.into_path();
        if filter.is_excluded(&path) {
            tracing::trace!("excluded {}", path.display());
            continue;
        }
        files.push(path);
    }
    Ok(files)
}
