//! Permission granting
//!
//! This module handles:
//! - The [`PermissionGranter`] seam used by the grant operation
//! - Granting through the privileged `tccplus` tool ([`TccPlusGranter`])
//! - Reporting without granting ([`DryRunGranter`])

pub mod dry_run;
pub mod tccplus;

use crate::domain::{BundleId, PermissionKind};
use crate::error::Result;

pub use dry_run::DryRunGranter;
pub use tccplus::TccPlusGranter;

/// Grants permission kinds to applications
pub trait PermissionGranter {
    /// Check that grants can be attempted at all.
    ///
    /// Called once, before any application is scanned.
    fn ensure_available(&self) -> Result<()>;

    /// Grant one permission kind to one application.
    fn grant(&self, kind: PermissionKind, bundle_id: &BundleId) -> Result<()>;
}
