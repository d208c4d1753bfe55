use std::path::Path;

use crate::codegen::CodegenError;

/// Token replaced by the decimal integer during expansion.
pub const PLACEHOLDER: &str = "${num}";

/// A text template containing zero or more [`PLACEHOLDER`] tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Read a template from disk. A missing template is fatal; there is no
    /// fallback text.
    pub fn load(path: &Path) -> Result<Self, CodegenError> {
        let text = std::fs::read_to_string(path).map_err(|source| CodegenError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { text })
    }

    /// Replace every placeholder with `n`.
    pub fn render(&self, n: u32) -> String {
        self.text.replace(PLACEHOLDER, &n.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}
