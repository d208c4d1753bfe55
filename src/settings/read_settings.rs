// Shared tooling settings.
//
// Settings come from an optional `.styleguide.toml` at the root of the tree
// being processed. Every field has a built-in default so the file can be
// absent or empty.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::filter::ExcludeFilter;

/// Name of the settings file looked up at the walk root.
pub const SETTINGS_FILE: &str = ".styleguide.toml";

/// Paths matching any of these are never touched by the normalizer.
pub const DEFAULT_EXCLUDE: &[&str] = &[
    r"\.git/",
    r"\.gradle/",
    r"/build/",
    r"/target/",
    r"/bin/",
    r"\.(png|jpe?g|gif|ico|bmp|so|dylib|dll|a|lib|o|obj|exe|jar|class|zip|gz|tgz|xz|pdf)$",
];

/// Running from a directory with this name targets its parent instead.
pub const SENTINEL_DIR: &str = "styleguide";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file `{}`: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid exclude pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Exclusion patterns. Replaces the defaults when set.
    pub exclude: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            exclude: DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Compile the exclusion patterns into the predicate handed to the normalizer.
    pub fn exclude_filter(&self) -> Result<ExcludeFilter, ConfigError> {
        Ok(ExcludeFilter::from_patterns(self.exclude.as_slice())?)
    }
}

/// Load settings from `dir/.styleguide.toml`, or defaults when it is absent.
pub fn load_settings(dir: &Path) -> Result<Settings, ConfigError> {
    let path = dir.join(SETTINGS_FILE);
    let text = match std::fs::read_to_string(&path) {
        Ok(t) => t,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no {} under {}, using defaults", SETTINGS_FILE, dir.display());
            return Ok(Settings::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };
    let settings = Settings::from_toml_str(&text, &path)?;
    tracing::debug!(?settings, "loaded {}", path.display());
    Ok(settings)
}
