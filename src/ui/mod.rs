//! Progress presentation layer
//!
//! This module handles:
//! - Human-readable progress lines for every processed application
//! - A spinner while identifiers are being queried (interactive terminals only)
//! - Silent reporting for `--json` output and tests
//!
//! All reporting goes through the [`Reporter`] trait so the grant operation
//! never prints directly.

pub mod terminal;

use std::path::Path;

use crate::domain::{ApplicationEntry, BundleId, PermissionKind, RunSummary};
use crate::error::TccGrantError;

pub use terminal::ConsoleReporter;

/// Receives progress events from the grant operation
pub trait Reporter {
    /// Scanning of the applications directory is about to start
    fn started(&mut self, applications_dir: &Path);

    /// The bundle identifier of `app` is being queried
    fn resolving(&mut self, app: &ApplicationEntry);

    fn resolved(&mut self, app: &ApplicationEntry, bundle_id: &BundleId);

    fn unresolved(&mut self, app: &ApplicationEntry);

    fn granted(&mut self, kind: PermissionKind, bundle_id: &BundleId);

    fn grant_failed(&mut self, kind: PermissionKind, bundle_id: &BundleId, error: &TccGrantError);

    /// Every application has been processed
    fn finish(&mut self, summary: &RunSummary);
}

/// Reporter that displays nothing
#[derive(Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn started(&mut self, _applications_dir: &Path) {}

    fn resolving(&mut self, _app: &ApplicationEntry) {}

    fn resolved(&mut self, _app: &ApplicationEntry, _bundle_id: &BundleId) {}

    fn unresolved(&mut self, _app: &ApplicationEntry) {}

    fn granted(&mut self, _kind: PermissionKind, _bundle_id: &BundleId) {}

    fn grant_failed(
        &mut self,
        _kind: PermissionKind,
        _bundle_id: &BundleId,
        _error: &TccGrantError,
    ) {
    }

    fn finish(&mut self, _summary: &RunSummary) {}
}
