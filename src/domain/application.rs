//! Application domain types
//!
//! Contains the application bundle entry found on disk and the bundle
//! identifier it resolves to.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// An application bundle found in the applications directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationEntry {
    path: PathBuf,
}

impl ApplicationEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name of the bundle, e.g. `Safari.app`
    pub fn name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}

/// Reverse-DNS identifier of an application, e.g. `com.apple.Safari`
///
/// Always non-empty and free of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BundleId(String);

impl BundleId {
    /// Create a bundle identifier from raw query output.
    ///
    /// Returns `None` when nothing but whitespace is left after trimming.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BundleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
