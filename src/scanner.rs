//! Application discovery in the applications directory
//!
//! This module handles:
//! - Opening the applications directory (fails fast if it is missing or unreadable)
//! - Lazily yielding the immediate children that are application bundles
//!
//! Only the top level is scanned; bundles nested in sub-folders are not visited.

use std::ffi::OsStr;
use std::fs::ReadDir;
use std::path::Path;

use crate::domain::ApplicationEntry;
use crate::error::{Result, fs::applications_dir_unreadable};

/// File name suffix of an application bundle
pub const APP_BUNDLE_SUFFIX: &str = ".app";

/// Whether a directory entry name denotes an application bundle
pub fn is_app_bundle(name: &OsStr) -> bool {
    name.to_string_lossy().ends_with(APP_BUNDLE_SUFFIX)
}

/// Lazy iterator over the application bundles of one directory
///
/// Yields entries in the order the operating system lists them.
#[derive(Debug)]
pub struct Applications {
    entries: ReadDir,
}

impl Iterator for Applications {
    type Item = ApplicationEntry;

    fn next(&mut self) -> Option<Self::Item> {
        for entry in self.entries.by_ref() {
            match entry {
                Ok(entry) if is_app_bundle(&entry.file_name()) => {
                    return Some(ApplicationEntry::new(entry.path()));
                }
                Ok(entry) => {
                    log::trace!("Skipping non-application entry {}", entry.path().display());
                }
                Err(e) => {
                    log::warn!("Skipping unreadable directory entry: {e}");
                }
            }
        }
        None
    }
}

/// Start scanning `dir` for application bundles
///
/// The directory is opened immediately so that a missing or unreadable
/// directory is reported before any application is processed.
pub fn scan_applications(dir: &Path) -> Result<Applications> {
    log::debug!("Scanning {} for application bundles", dir.display());

    let entries = std::fs::read_dir(dir)
        .map_err(|e| applications_dir_unreadable(dir.display().to_string(), e.to_string()))?;

    Ok(Applications { entries })
}
