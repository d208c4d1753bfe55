use std::path::{Path, PathBuf};

/// Pick the directory a tree-wide run should start from.
///
/// When the final segment of `cwd` equals `sentinel` the run targets the
/// parent (`..`), otherwise the current directory (`.`). Both are returned
/// relative so discovered paths read `./src/...` or `../src/...`, which is
/// what exclusion patterns are written against.
pub fn resolve_root(cwd: &Path, sentinel: &str) -> PathBuf {
    let in_sentinel = cwd
        .file_name()
        .map(|name| name == sentinel)
        .unwrap_or(false);
    if in_sentinel {
        PathBuf::from("..")
    } else {
        PathBuf::from(".")
    }
}

/// Directory next to the running executable, joined with `rel`.
///
/// Falls back to `rel` as-is when the executable path cannot be determined.
pub fn beside_executable(rel: &Path) -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => match exe.parent() {
            Some(dir) => dir.join(rel),
            None => rel.to_path_buf(),
        },
        Err(_) => rel.to_path_buf(),
    }
}
