//! Bundle identifier resolution
//!
//! This module handles:
//! - The [`BundleIdResolver`] seam used by the grant operation
//! - Querying identifiers through the OS scripting utility ([`OsaScriptResolver`])

pub mod osascript;

use std::path::Path;

use crate::domain::BundleId;

pub use osascript::OsaScriptResolver;

/// Looks up the bundle identifier of an application on disk
pub trait BundleIdResolver {
    /// Returns `None` when the identifier cannot be determined.
    ///
    /// Failures are not propagated; the caller reports the application as
    /// unresolved and moves on.
    fn resolve(&self, app: &Path) -> Option<BundleId>;
}
