//! Config file (`tccgrant/config.yaml`) data structures
//!
//! ```yaml
//! applications_dir: /Applications
//! tool: ~/Downloads/tccplus
//! osascript: /usr/bin/osascript
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::error::config::{not_found, parse_failed, read_failed};

/// Config file name inside the `tccgrant` config directory
pub const CONFIG_FILE: &str = "config.yaml";

/// Location of the config file under the platform config directory
pub fn default_path(config_dir: &Path) -> PathBuf {
    config_dir.join(env!("CARGO_PKG_NAME")).join(CONFIG_FILE)
}

/// Settings read from the config file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub applications_dir: Option<PathBuf>,
    pub tool: Option<PathBuf>,
    pub osascript: Option<PathBuf>,
}

impl ConfigFile {
    /// Parse config from YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty or comment-only document is null, not an empty map
        match serde_yaml::from_str::<serde_yaml::Value>(yaml)? {
            serde_yaml::Value::Null => Ok(Self::default()),
            value => serde_yaml::from_value(value),
        }
    }

    /// Read and parse the config file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        log::debug!("Reading config file {display}");

        if !path.exists() {
            return Err(not_found(display));
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| read_failed(&display, e.to_string()))?;

        Self::from_yaml(&content).map_err(|e| parse_failed(display, e.to_string()))
    }
}
