use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::codegen::{generate_all, Layout};
use crate::fs_op::path::beside_executable;

/// Template directory used when `--template-dir` is not given, relative to
/// the directory holding the executable.
pub const DEFAULT_TEMPLATE_DIR: &str = "src/generate";

/// Generate the numbered type sources from their `.in` templates.
#[derive(Parser, Debug)]
#[command(name = "generate_numbers")]
#[command(version)]
pub struct NumbersArgs {
    /// Output base directory (generated sources land under `generated/`)
    pub output_base: PathBuf,

    /// Directory holding `GenericNumber.java.in`, `Nat.java.in` and `NatGetter.java.in`
    #[arg(long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,
}

impl NumbersArgs {
    pub fn template_dir(&self) -> PathBuf {
        match &self.template_dir {
            Some(dir) => dir.clone(),
            None => beside_executable(Path::new(DEFAULT_TEMPLATE_DIR)),
        }
    }
}

pub fn run(args: &NumbersArgs) -> Result<()> {
    let templates = args.template_dir();
    tracing::debug!(
        templates = %templates.display(),
        output = %args.output_base.display(),
        "generating numbered sources"
    );
    generate_all(&templates, &args.output_base, &Layout::default()).with_context(|| {
        format!(
            "failed to generate sources into {}",
            args.output_base.display()
        )
    })
}
