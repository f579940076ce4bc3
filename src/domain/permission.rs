//! Permission kinds granted to every application

use std::fmt;

use serde::Serialize;

/// A capability the OS privacy database can grant to an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PermissionKind {
    /// Audio capture
    Microphone,
    /// Video capture
    Camera,
}

impl PermissionKind {
    /// Every kind, in the order grants are attempted
    pub const ALL: [PermissionKind; 2] = [PermissionKind::Microphone, PermissionKind::Camera];

    /// Service name understood by the permission tool's `add` subcommand
    pub fn service_name(self) -> &'static str {
        match self {
            PermissionKind::Microphone => "Microphone",
            PermissionKind::Camera => "Camera",
        }
    }
}

impl fmt::Display for PermissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.service_name())
    }
}
