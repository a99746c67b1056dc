//! Configuration types and loading

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ConfigError;

/// Name of the configuration file searched for in the working directory
pub const CONFIG_FILE_NAME: &str = "relog.toml";

/// Main configuration for relog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project name
    pub name: Option<String>,

    /// Changelog configuration
    pub changelog: ChangelogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: None,
            changelog: ChangelogConfig::default(),
        }
    }
}

/// Changelog pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file path
    pub file: PathBuf,

    /// Document title emitted in the header block
    pub title: String,

    /// Label of the fallback category for unclassified commits
    pub misc_category: String,

    /// Commits containing any of these phrases are skipped outright
    pub noise_phrases: Vec<String>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("CHANGELOG"),
            title: "ChangeLog".to_string(),
            misc_category: "Misc".to_string(),
            noise_phrases: default_noise_phrases(),
        }
    }
}

/// The built-in noise markers: release tagging, branch merges, remote
/// merges and stash commits.
pub fn default_noise_phrases() -> Vec<String> {
    ["Tagging release", "Merge branch", "Merge remote", "WIP on"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Load configuration from a directory.
///
/// Looks for `relog.toml` in `dir`; a missing file yields `NotFound`.
pub fn load_config(dir: &Path) -> Result<Config, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Err(ConfigError::NotFound(path));
    }

    let content = std::fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&content)?;
    debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Load configuration, falling back to defaults if no file exists.
///
/// Returns the config and the path it was loaded from, if any.
pub fn load_config_or_default(dir: &Path) -> (Config, Option<PathBuf>) {
    match load_config(dir) {
        Ok(config) => (config, Some(dir.join(CONFIG_FILE_NAME))),
        Err(_) => (Config::default(), None),
    }
}
