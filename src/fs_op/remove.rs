use std::fs;
use std::path::Path;
use std::io;
use thiserror::Error;

/// Error from [`remove_path`]; wraps the underlying I/O failure.
#[derive(Debug, Error)]
#[error("failed to remove stale output: {0}")]
pub struct RemoveError(#[from] pub io::Error);

/// Remove whatever sits at `path` so fresh output can be written there.
///
/// Directories are removed recursively, anything else is unlinked. A missing
/// path is a no-op.
///
/// # Examples
///
/// ```no_run
/// use styleguide::fs_op::remove::remove_path;
/// remove_path("build/generated").expect("remove failed");
/// ```
pub fn remove_path(path: impl AsRef<Path>) -> Result<(), RemoveError> {
    let p = path.as_ref();

    let meta = match fs::symlink_metadata(p) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    if meta.is_dir() {
        fs::remove_dir_all(p)?;
    } else {
        fs::remove_file(p)?;
    }
    tracing::debug!("removed {}", p.display());

    Ok(())
}
