pub mod read_settings;

pub use read_settings::{load_settings, ConfigError, Settings, SENTINEL_DIR, SETTINGS_FILE};
