//! Exclusion predicates applied to paths discovered during a tree walk.
//!
//! The normalizer only sees the [`PathFilter`] trait; how the predicate was
//! authored (compiled regex from settings, closure in a test) is opaque to it.

use regex::Regex;
use std::path::Path;

/// Decide whether a discovered path should be skipped entirely.
pub trait PathFilter {
    fn is_excluded(&self, path: &Path) -> bool;
}

impl<F> PathFilter for F
where
    F: Fn(&Path) -> bool,
{
    fn is_excluded(&self, path: &Path) -> bool {
        self(path)
    }
}

/// A single compiled pattern searched for anywhere in a path's text.
#[derive(Debug, Clone)]
pub struct ExcludeFilter {
    regex: Option<Regex>,
}

impl ExcludeFilter {
    /// Compile one filter from several patterns joined by alternation.
    ///
    /// An empty pattern list yields a filter that excludes nothing.
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Self, regex::Error> {
        if patterns.is_empty() {
            return Ok(Self { regex: None });
        }
        let joined = patterns
            .iter()
            .map(|p| format!("(?:{})", p.as_ref()))
            .collect::<Vec<_>>()
            .join("|");
        Ok(Self {
            regex: Some(Regex::new(&joined)?),
        })
    }

    /// The combined pattern, or an empty string when nothing is excluded.
    pub fn as_str(&self) -> &str {
        self.regex.as_ref().map(Regex::as_str).unwrap_or("")
    }
}

impl PathFilter for ExcludeFilter {
    fn is_excluded(&self, path: &Path) -> bool {
        let Some(regex) = &self.regex else {
            return false;
        };
        // Patterns are written with `/` separators.
        let text = path.to_string_lossy();
        if std::path::MAIN_SEPARATOR == '/' {
            regex.is_match(&text)
        } else {
            regex.is_match(&text.replace(std::path::MAIN_SEPARATOR, "/"))
        }
    }
}
