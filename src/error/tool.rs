//! Permission tool errors

use super::TccGrantError;
use crate::domain::{BundleId, PermissionKind};

/// Creates a tool not found error
pub fn not_found(path: impl Into<String>) -> TccGrantError {
    TccGrantError::ToolNotFound { path: path.into() }
}

/// Creates a tool not executable error
pub fn not_executable(path: impl Into<String>) -> TccGrantError {
    TccGrantError::ToolNotExecutable { path: path.into() }
}

/// Creates a grant failed error for one permission kind
pub fn grant_failed(
    kind: PermissionKind,
    bundle_id: &BundleId,
    reason: impl Into<String>,
) -> TccGrantError {
    TccGrantError::GrantFailed {
        kind,
        bundle_id: bundle_id.to_string(),
        reason: reason.into(),
    }
}
