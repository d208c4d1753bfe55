use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::Path;

use crate::fs_op::newline::{normalize_tree, Summary};
use crate::fs_op::path::resolve_root;
use crate::settings::{load_settings, SENTINEL_DIR};

/// Ensure every file in the tree ends with exactly one newline.
///
/// Walks the repository root (the parent directory when run from inside
/// `styleguide/`) and fixes trailing newlines in place. Pass `-v` as the
/// first argument to list files as they are processed; every other argument
/// is ignored.
#[derive(Parser, Debug, Default)]
#[command(name = "newline")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct NewlineArgs {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub args: Vec<String>,
}

impl NewlineArgs {
    /// Exactly `-v` in first position; `-vv`, `--verbose` or a later `-v` do not count.
    pub fn verbose(&self) -> bool {
        self.args.first().map(String::as_str) == Some("-v")
    }
}

/// Resolve the root from the process working directory, load its settings
/// and normalize the tree.
///
/// Progress lines go to `out` when [`NewlineArgs::verbose`] holds.
pub fn run(args: &NewlineArgs, out: &mut dyn Write) -> Result<Summary> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    run_at(args, &resolve_root(&cwd, SENTINEL_DIR), out)
}

/// Like [`run`] but with an explicit root.
///
/// Relative roots are walked as given, so discovered paths keep the same
/// prefix the exclusion patterns see.
pub fn run_at(args: &NewlineArgs, root: &Path, out: &mut dyn Write) -> Result<Summary> {
    let settings = load_settings(root).context("failed to load settings")?;
    let filter = settings.exclude_filter().context("failed to build exclude filter")?;
    tracing::debug!(root = %root.display(), pattern = filter.as_str(), "starting newline run");

    let progress: Option<&mut dyn Write> = if args.verbose() { Some(out) } else { None };
    let summary = normalize_tree(root, &filter, progress)?;
    Ok(summary)
}
