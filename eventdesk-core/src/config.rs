//! eventdesk configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{EventDeskError, EventDeskResult};

static DEFAULT_STORE_URL: &str = "http://127.0.0.1:3000/events";

fn default_store_url() -> String {
    DEFAULT_STORE_URL.to_string()
}

/// Configuration at ~/.config/eventdesk/config.toml, overridable with
/// `EVENTDESK_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct EventDeskConfig {
    /// Collection endpoint of the event store.
    #[serde(default = "default_store_url")]
    pub store_url: String,
}

impl Default for EventDeskConfig {
    fn default() -> Self {
        EventDeskConfig {
            store_url: default_store_url(),
        }
    }
}

impl EventDeskConfig {
    pub fn config_path() -> EventDeskResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventDeskError::Config("Could not determine config directory".into()))?
            .join("eventdesk");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented config file on
    /// first use.
    pub fn load() -> EventDeskResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (optional) with the environment layered on top.
    pub fn load_from(path: &Path) -> EventDeskResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("EVENTDESK"))
            .build()
            .map_err(|e| EventDeskError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventDeskError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EventDeskResult<()> {
        let contents = format!(
            "\
# eventdesk configuration

# Collection endpoint of the event store:
# store_url = \"{}\"
",
            DEFAULT_STORE_URL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventDeskError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EventDeskError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_uses_default_url() {
        let dir = tempfile::tempdir().unwrap();
        let config = EventDeskConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.store_url, DEFAULT_STORE_URL);
    }

    #[test]
    fn commented_default_file_still_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        EventDeskConfig::create_default_config(&path).unwrap();
        assert!(path.exists());

        let config = EventDeskConfig::load_from(&path).unwrap();
        assert_eq!(config.store_url, DEFAULT_STORE_URL);
    }

    #[test]
    fn file_value_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "store_url = \"http://example.test/events\"\n").unwrap();

        let config = EventDeskConfig::load_from(&path).unwrap();
        assert_eq!(config.store_url, "http://example.test/events");
    }
}
