//! Grants through the `tccplus` command-line tool
//!
//! The tool edits the OS privacy database directly:
//! `tccplus add <Microphone|Camera> <bundle-id>`, exiting zero on success.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::PermissionGranter;
use crate::domain::{BundleId, PermissionKind};
use crate::error::Result;
use crate::error::tool::{grant_failed, not_executable, not_found};

/// Invokes the privileged permission tool once per grant
#[derive(Debug, Clone)]
pub struct TccPlusGranter {
    tool: PathBuf,
}

impl TccPlusGranter {
    pub fn new(tool: impl Into<PathBuf>) -> Self {
        Self { tool: tool.into() }
    }
}

#[cfg(unix)]
fn is_executable(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.is_file() && metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(metadata: &std::fs::Metadata) -> bool {
    metadata.is_file()
}

impl PermissionGranter for TccPlusGranter {
    fn ensure_available(&self) -> Result<()> {
        let path = self.tool.display().to_string();
        let metadata = std::fs::metadata(&self.tool).map_err(|_| not_found(&path))?;

        if !is_executable(&metadata) {
            return Err(not_executable(path));
        }

        Ok(())
    }

    fn grant(&self, kind: PermissionKind, bundle_id: &BundleId) -> Result<()> {
        log::debug!(
            "Running {} add {} {}",
            self.tool.display(),
            kind.service_name(),
            bundle_id
        );

        let output = Command::new(&self.tool)
            .args(["add", kind.service_name(), bundle_id.as_str()])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                grant_failed(
                    kind,
                    bundle_id,
                    format!("failed to run {}: {e}", self.tool.display()),
                )
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            log::debug!("{}: {}", self.tool.display(), stdout.trim());
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = if stderr.trim().is_empty() {
                output.status.to_string()
            } else {
                format!("{}: {}", output.status, stderr.trim())
            };
            return Err(grant_failed(kind, bundle_id, reason));
        }

        Ok(())
    }
}
