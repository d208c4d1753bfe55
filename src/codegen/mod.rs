//! Numbered source file generation from `.in` templates.
//!
//! Two outputs are produced for the inclusive range `0..=MAX_NUM`:
//! one `N<i>.java` file per integer, and a single combined `Nat.java` built
//! from a header template, one getter expansion per integer and a closing
//! brace line.

pub mod template;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::fs_op::remove::{remove_path, RemoveError};
pub use template::{Template, PLACEHOLDER};

/// Highest integer expanded (inclusive).
pub const MAX_NUM: u32 = 20;

/// Line appended after the last getter to close the combined file.
pub const CLOSING_LINE: &str = "}\n";

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("failed to read template `{}`: {source}", path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Remove(#[from] RemoveError),
}

/// Template file names and output locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub number_template: PathBuf,
    pub combined_template: PathBuf,
    pub getter_template: PathBuf,
    /// Directory receiving `N<i>.java`, relative to the output base.
    pub numbers_dir: PathBuf,
    /// Combined file, relative to the output base.
    pub combined_file: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        let math = Path::new("generated/main/java/edu/wpi/first/wpiutil/math");
        Self {
            number_template: PathBuf::from("GenericNumber.java.in"),
            combined_template: PathBuf::from("Nat.java.in"),
            getter_template: PathBuf::from("NatGetter.java.in"),
            numbers_dir: math.join("numbers"),
            combined_file: math.join("Nat.java"),
        }
    }
}

/// File name for the output of integer `n`.
pub fn number_file_name(n: u32) -> String {
    format!("N{}.java", n)
}

fn write_file(path: &Path, contents: &str) -> Result<(), CodegenError> {
    fs::write(path, contents).map_err(|source| CodegenError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn create_dir_all(path: &Path) -> Result<(), CodegenError> {
    fs::create_dir_all(path).map_err(|source| CodegenError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Recreate `out_dir` from scratch and write one rendered file per integer
/// in `0..=max`. Returns the written paths in order.
pub fn generate_numbers(template: &Template, out_dir: &Path, max: u32) -> Result<Vec<PathBuf>, CodegenError> {
    remove_path(out_dir)?;
    create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(max as usize + 1);
    for n in 0..=max {
        let path = out_dir.join(number_file_name(n));
        write_file(&path, &template.render(n))?;
        written.push(path);
    }
    tracing::info!("wrote {} number files to {}", written.len(), out_dir.display());
    Ok(written)
}

/// Concatenate `base`, the getter rendered for each integer in `0..=max`,
/// and [`CLOSING_LINE`].
pub fn render_combined(base: &Template, getter: &Template, max: u32) -> String {
    let mut text = base.as_str().to_string();
    for n in 0..=max {
        text.push_str(&getter.render(n));
    }
    text.push_str(CLOSING_LINE);
    text
}

/// Replace `out_file` with the combined expansion.
pub fn generate_combined(base: &Template, getter: &Template, out_file: &Path, max: u32) -> Result<(), CodegenError> {
    remove_path(out_file)?;
    if let Some(parent) = out_file.parent() {
        create_dir_all(parent)?;
    }
    write_file(out_file, &render_combined(base, getter, max))?;
    tracing::info!("wrote {}", out_file.display());
    Ok(())
}

/// Run both generators: templates come from `template_dir`, outputs land
/// under `out_base` according to `layout`.
pub fn generate_all(template_dir: &Path, out_base: &Path, layout: &Layout) -> Result<(), CodegenError> {
    let number = Template::load(&template_dir.join(&layout.number_template))?;
    generate_numbers(&number, &out_base.join(&layout.numbers_dir), MAX_NUM)?;

    let base = Template::load(&template_dir.join(&layout.combined_template))?;
    let getter = Template::load(&template_dir.join(&layout.getter_template))?;
    generate_combined(&base, &getter, &out_base.join(&layout.combined_file), MAX_NUM)
}
