//! Dry-run granting: report what would be granted without changing anything

use super::PermissionGranter;
use crate::domain::{BundleId, PermissionKind};
use crate::error::Result;

/// Wraps a granter, keeping its availability check but skipping the grants
#[derive(Debug, Clone)]
pub struct DryRunGranter<G> {
    inner: G,
}

impl<G: PermissionGranter> DryRunGranter<G> {
    pub fn new(inner: G) -> Self {
        Self { inner }
    }
}

impl<G: PermissionGranter> PermissionGranter for DryRunGranter<G> {
    fn ensure_available(&self) -> Result<()> {
        self.inner.ensure_available()
    }

    fn grant(&self, kind: PermissionKind, bundle_id: &BundleId) -> Result<()> {
        log::info!("[dry run] Would grant {kind} access for: {bundle_id}");
        Ok(())
    }
}
