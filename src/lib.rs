pub mod codegen;
pub mod filter;
pub mod fs_op;
#[path = "runner/mod.rs"]
pub mod runner;
pub mod settings;

pub use crate::filter::{ExcludeFilter, PathFilter};
pub use crate::fs_op::{normalize_file, normalize_tree, Correction, NormalizeError, Summary};
