//! Filesystem helpers: tree walking, tail reads, in-place newline fixes and
//! output cleanup for the generators.

pub mod error;
pub mod newline;
pub mod path;
pub mod remove;
pub mod tail;
pub mod walk;

pub use error::NormalizeError;
pub use newline::{normalize_file, normalize_tree, Correction, Summary};
