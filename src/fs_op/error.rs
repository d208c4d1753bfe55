use thiserror::Error;
use std::path::PathBuf;

/// Errors produced while normalizing a file tree.
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// Nothing survived the exclusion filter; raised before any file is touched.
    #[error("no files found to format under `{}`", root.display())]
    NoFiles { root: PathBuf },

    /// I/O failure on a specific file.
    #[error("I/O error on `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a `Processing` line failed; no file was involved.
    #[error("failed to write progress output: {0}")]
    Progress(#[source] std::io::Error),

    /// Failure while walking the directory tree.
    #[error("failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),
}

impl NormalizeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NormalizeError::Io {
            path: path.into(),
            source,
        }
    }
}
