//! Settings for the snippet editing tool.
//!
//! Settings are stored as TOML in `<config_dir>/snipyaml/config.toml`. Every
//! field is optional; an absent file yields the defaults, so a fresh
//! installation works without any configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// File name of the settings file
const CONFIG_FILE: &str = "config.toml";

/// Directory under the platform configuration directory
const CONFIG_DIR: &str = "snipyaml";

/// Persisted tool settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Override for the per-language snippets directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippets_dir: Option<PathBuf>,

    /// Override for the per-project snippets directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_snippets_dir: Option<PathBuf>,

    /// Language identifiers offered when the host does not supply a list
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
}

impl Settings {
    /// Loads settings from the default location.
    ///
    /// An absent file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or the file exists but does not parse.
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Loads settings from `path`; an absent file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read {}: {e}", path.display())))?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Saves settings to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&Self::default_path()?)
    }

    /// Saves settings to `path`, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Write(format!(
                    "Failed to create config directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        fs::write(path, content)
            .map_err(|e| ConfigError::Write(format!("Failed to write {}: {e}", path.display())))
    }

    /// The default settings file path: `<config_dir>/snipyaml/config.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if the platform configuration directory cannot be
    /// determined.
    pub fn default_path() -> ConfigResult<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::NotFound(PathBuf::from("~/.config")))?;
        Ok(dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// The effective per-language snippets directory: the configured
    /// override, or the host editor's default location.
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the platform configuration
    /// directory cannot be determined.
    pub fn snippets_dir(&self) -> ConfigResult<PathBuf> {
        if let Some(dir) = &self.snippets_dir {
            return Ok(dir.clone());
        }
        default_snippets_dir()
    }
}

/// The host editor's per-user snippets directory
/// (`<config_dir>/Code/User/snippets`).
///
/// # Errors
///
/// Returns an error if the platform configuration directory cannot be
/// determined.
pub fn default_snippets_dir() -> ConfigResult<PathBuf> {
    let dir = dirs::config_dir().ok_or_else(|| ConfigError::NotFound(PathBuf::from("~/.config")))?;
    Ok(dir.join("Code").join("User").join("snippets"))
}
