//! Global uniplan configuration.

use std::path::PathBuf;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{UniplanError, UniplanResult};

static DEFAULT_PLANNER_PATH: &str = "~/planner";

fn default_planner_path() -> PathBuf {
    PathBuf::from(DEFAULT_PLANNER_PATH)
}

fn is_default_planner_path(p: &PathBuf) -> bool {
    *p == default_planner_path()
}

/// Global configuration at ~/.config/uniplan/config.toml
///
/// The planner directory holds the stored event list (events.json) and the
/// user-profile snapshot (profile.json).
#[derive(Serialize, Deserialize, Clone)]
pub struct UniplanConfig {
    #[serde(
        default = "default_planner_path",
        skip_serializing_if = "is_default_planner_path"
    )]
    pub planner_dir: PathBuf,

    /// Fallback display color for events without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_color: Option<String>,
}

impl UniplanConfig {
    pub fn load() -> UniplanResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: UniplanConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| UniplanError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| UniplanError::Config(e.to_string()))?;

        Ok(config)
    }

    pub fn config_path() -> UniplanResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| UniplanError::Config("Could not determine config directory".into()))?
            .join("uniplan");

        Ok(config_dir.join("config.toml"))
    }

    /// Planner data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.planner_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Save the current config to ~/.config/uniplan/config.toml
    pub fn save(&self) -> UniplanResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| UniplanError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| UniplanError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> UniplanResult<()> {
        let contents = format!(
            "\
# uniplan configuration

# Where your planner data lives:
# planner_dir = \"{}\"

# Fallback color for events without one:
# default_color = \"#4a90d9\"
",
            DEFAULT_PLANNER_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                UniplanError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| UniplanError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
