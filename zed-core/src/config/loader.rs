//! Loading and validation of the ZED core configuration.

use super::types::CoreConfig;
use crate::error::{ConfigError, CoreError};

use directories_next::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Loads and validates the [`CoreConfig`].
///
/// The loader reads `config.toml` from the application configuration
/// directory (or from an explicit path), falling back to the default
/// configuration when the file does not exist. The parsed configuration is
/// always validated before being returned.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the configuration from the default location.
    ///
    /// The default location is `config.toml` inside the user's
    /// configuration directory for the `zed` application.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Config` if the configuration directory cannot be
    /// determined, the file cannot be read or parsed, or validation fails.
    pub fn load() -> Result<CoreConfig, CoreError> {
        let path = Self::default_config_path()?;
        Self::load_from(&path)
    }

    /// Loads the configuration from an explicit path.
    ///
    /// A missing file is not an error: the default configuration is
    /// returned instead, after validation.
    pub fn load_from(path: &Path) -> Result<CoreConfig, CoreError> {
        let config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
                path: path.to_path_buf(),
                source,
            })?;
            toml::from_str::<CoreConfig>(&content).map_err(ConfigError::ParseError)?
        } else {
            CoreConfig::default()
        };

        let config = Self::validate(config)?;
        Ok(config)
    }

    /// Resolves the default configuration file path.
    fn default_config_path() -> Result<PathBuf, CoreError> {
        let dirs = ProjectDirs::from("", "", "zed").ok_or(ConfigError::DirectoryUnavailable {
            dir_type: "user configuration directory".to_string(),
        })?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Validates a parsed configuration, normalizing string fields.
    fn validate(mut config: CoreConfig) -> Result<CoreConfig, ConfigError> {
        config.logging.level = config.logging.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                config.logging.level
            )));
        }

        config.logging.format = config.logging.format.to_lowercase();
        if !VALID_LOG_FORMATS.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid log format: {}",
                config.logging.format
            )));
        }

        let feed = &config.notifications;
        if feed.refresh_interval_secs == 0 {
            return Err(ConfigError::ValidationError(
                "notifications.refresh_interval_secs must be non-zero".to_string(),
            ));
        }
        if feed.event_limit == 0
            || feed.task_limit == 0
            || feed.expense_limit == 0
            || feed.goal_limit == 0
        {
            return Err(ConfigError::ValidationError(
                "notification query limits must be non-zero".to_string(),
            ));
        }

        Ok(config)
    }
}
