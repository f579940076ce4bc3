//! Run configuration
//!
//! Settings are layered, lowest precedence first:
//! - built-in defaults
//! - the YAML config file ([`file`])
//! - environment variables and command-line flags (merged by clap)

pub mod file;

use std::path::{Path, PathBuf};

use crate::error::{Result, TccGrantError};
use crate::resolver::osascript::DEFAULT_OSASCRIPT;

pub use file::ConfigFile;

/// Default directory scanned for application bundles
pub const DEFAULT_APPLICATIONS_DIR: &str = "/Applications";

/// Default tool location, relative to the home directory
pub const DEFAULT_TOOL_RELATIVE: &str = "Downloads/tccplus";

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory whose `.app` entries are processed
    pub applications_dir: PathBuf,
    /// Privileged permission tool
    pub tool: PathBuf,
    /// Program answering bundle identifier queries
    pub osascript: PathBuf,
}

/// Values given on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Explicit config file; must exist when given
    pub config_file: Option<PathBuf>,
    pub applications_dir: Option<PathBuf>,
    pub tool: Option<PathBuf>,
    pub osascript: Option<PathBuf>,
}

impl Config {
    /// Load configuration using the user's home and config directories
    pub fn load(overrides: &ConfigOverrides) -> Result<Self> {
        Self::load_with(overrides, dirs::home_dir(), dirs::config_dir())
    }

    fn load_with(
        overrides: &ConfigOverrides,
        home: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let file_path = match &overrides.config_file {
            Some(path) => Some(path.clone()),
            None => config_dir
                .map(|dir| file::default_path(&dir))
                .filter(|path| path.is_file()),
        };
        let file = match &file_path {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };
        // Relative paths in the config file are relative to the file itself
        let file_dir = file_path.as_deref().and_then(Path::parent);

        let home = home.as_deref();

        let applications_dir = match (&overrides.applications_dir, &file.applications_dir) {
            (Some(path), _) => anchor(expand_home(path, home)?, None)?,
            (None, Some(path)) => anchor(expand_home(path, home)?, file_dir)?,
            (None, None) => PathBuf::from(DEFAULT_APPLICATIONS_DIR),
        };

        // The checked tool path must be the one that is run, so it never goes
        // through a `$PATH` lookup
        let tool = match (&overrides.tool, &file.tool) {
            (Some(path), _) => anchor(expand_home(path, home)?, None)?,
            (None, Some(path)) => anchor(expand_home(path, home)?, file_dir)?,
            (None, None) => home
                .ok_or(TccGrantError::HomeDirUnavailable)?
                .join(DEFAULT_TOOL_RELATIVE),
        };

        let osascript = match overrides.osascript.clone().or(file.osascript) {
            Some(path) => expand_home(&path, home)?,
            None => PathBuf::from(DEFAULT_OSASCRIPT),
        };

        let config = Self {
            applications_dir,
            tool,
            osascript,
        };
        log::debug!("Using configuration: {config:?}");
        Ok(config)
    }
}

/// Expand a leading `~` to the home directory
fn expand_home(path: &Path, home: Option<&Path>) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => Ok(home.ok_or(TccGrantError::HomeDirUnavailable)?.join(rest)),
        Err(_) => Ok(path.to_path_buf()),
    }
}

/// Make `path` absolute, resolving a relative path against `base` or else
/// the working directory
fn anchor(path: PathBuf, base: Option<&Path>) -> Result<PathBuf> {
    let path = match base {
        Some(base) if path.is_relative() => base.join(path),
        _ => path,
    };
    Ok(std::path::absolute(path)?)
}
