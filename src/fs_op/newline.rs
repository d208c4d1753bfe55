//! Trailing-newline normalization.
//!
//! Every included, non-empty file is rewritten in place so that it ends in
//! exactly one `\n`. Only the trailing newline run is ever read or changed.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::filter::PathFilter;
use crate::fs_op::error::NormalizeError;
use crate::fs_op::tail::count_trailing;
use crate::fs_op::walk::collect_files;

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// Already ended in exactly one newline.
    Unchanged,
    /// Zero-byte file; left alone.
    SkippedEmpty,
    /// A missing newline was appended.
    Appended,
    /// Surplus newlines were cut off.
    Truncated { removed: u64 },
}

/// Per-run tally, logged once the walk completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub unchanged: usize,
    pub skipped_empty: usize,
    pub appended: usize,
    pub truncated: usize,
}

impl Summary {
    fn record(&mut self, c: Correction) {
        self.files += 1;
        match c {
            Correction::Unchanged => self.unchanged += 1,
            Correction::SkippedEmpty => self.skipped_empty += 1,
            Correction::Appended => self.appended += 1,
            Correction::Truncated { .. } => self.truncated += 1,
        }
    }

    /// Number of files whose length changed.
    pub fn modified(&self) -> usize {
        self.appended + self.truncated
    }
}

/// Decide the correction for data of `size` bytes ending in `newlines`
/// consecutive `\n` bytes.
pub fn plan(size: u64, newlines: u64) -> Correction {
    if size == 0 {
        Correction::SkippedEmpty
    } else if newlines == 0 {
        Correction::Appended
    } else if newlines == 1 {
        Correction::Unchanged
    } else {
        Correction::Truncated {
            removed: newlines - 1,
        }
    }
}

/// Apply the trailing-newline rule to an already open read/write handle.
///
/// Generic over the handle so it can be driven by anything that reads,
/// writes, seeks and can be cut to length.
pub fn normalize_handle<F>(file: &mut F) -> io::Result<Correction>
where
    F: Read + Write + Seek + SetLen,
{
    let size = file.seek(SeekFrom::End(0))?;
    if size == 0 {
        return Ok(Correction::SkippedEmpty);
    }
    let newlines = count_trailing(file, size, b'\n')?;
    let correction = plan(size, newlines);
    match correction {
        Correction::Appended => {
            file.seek(SeekFrom::Start(size))?;
            file.write_all(b"\n")?;
            file.flush()?;
        }
        Correction::Truncated { removed } => {
            file.set_len(size - removed)?;
        }
        Correction::Unchanged | Correction::SkippedEmpty => {}
    }
    Ok(correction)
}

/// Truncation capability needed by [`normalize_handle`].
pub trait SetLen {
    fn set_len(&mut self, len: u64) -> io::Result<()>;
}

impl SetLen for File {
    fn set_len(&mut self, len: u64) -> io::Result<()> {
        File::set_len(self, len)
    }
}

#[cfg(test)]
impl SetLen for io::Cursor<Vec<u8>> {
    fn set_len(&mut self, len: u64) -> io::Result<()> {
        self.get_mut().truncate(len as usize);
        Ok(())
    }
}

/// Normalize one file on disk.
pub fn normalize_file(path: &Path) -> Result<Correction, NormalizeError> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|e| NormalizeError::io(path, e))?;
    let correction = normalize_handle(&mut file).map_err(|e| NormalizeError::io(path, e))?;
    tracing::debug!(path = %path.display(), ?correction, "normalized");
    Ok(correction)
}

/// Walk `root`, skip everything `filter` excludes, and normalize the rest.
///
/// Fails with [`NormalizeError::NoFiles`] before touching anything when the
/// filter leaves nothing to process. When `progress` is given, a
/// `Processing <path>` line is written to it ahead of each file. The first
/// I/O error aborts the run; files already handled stay handled.
pub fn normalize_tree(
    root: &Path,
    filter: &dyn PathFilter,
    mut progress: Option<&mut dyn Write>,
) -> Result<Summary, NormalizeError> {
    let files: Vec<PathBuf> = collect_files(root, filter)?;
    if files.is_empty() {
        return Err(NormalizeError::NoFiles {
            root: root.to_path_buf(),
        });
    }

    let mut summary = Summary::default();
    for path in &files {
        if let Some(out) = progress.as_mut() {
            writeln!(out, "Processing {}", path.display()).map_err(NormalizeError::Progress)?;
        }
        summary.record(normalize_file(path)?);
    }

    tracing::info!(
        files = summary.files,
        appended = summary.appended,
        truncated = summary.truncated,
        unchanged = summary.unchanged,
        skipped_empty = summary.skipped_empty,
        "newline normalization finished"
    );
    Ok(summary)
}
