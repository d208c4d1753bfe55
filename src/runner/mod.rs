//! Command-line entry points shared by the binaries.
//!
//! The binaries stay thin; argument parsing, root resolution, logging setup
//! and error reporting live here so they can be exercised from tests.

pub mod logging;
pub mod newline;
pub mod numbers;
