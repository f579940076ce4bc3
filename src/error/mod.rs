//! Error types and handling for tccgrant
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`tool`]: Permission tool errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;
pub mod tool;


use miette::Diagnostic;
use thiserror::Error;

use crate::domain::PermissionKind;

/// Main error type for tccgrant operations
#[derive(Error, Diagnostic, Debug)]
pub enum TccGrantError {
    // Permission tool errors
    #[error("TCC Plus not found at {path}. Please download and set it up first.")]
    #[diagnostic(
        code(tccgrant::tool::not_found),
        help("Download tccplus and place it at the configured path, or pass --tool <PATH>")
    )]
    ToolNotFound { path: String },

    #[error("TCC Plus at {path} is not executable")]
    #[diagnostic(
        code(tccgrant::tool::not_executable),
        help("Make the tool executable, e.g. with `chmod +x`")
    )]
    ToolNotExecutable { path: String },

    #[error("Failed to grant {kind} access for: {bundle_id}: {reason}")]
    #[diagnostic(code(tccgrant::tool::grant_failed))]
    GrantFailed {
        kind: PermissionKind,
        bundle_id: String,
        reason: String,
    },

    #[error("{failed} of {attempted} grants failed")]
    #[diagnostic(
        code(tccgrant::tool::grants_incomplete),
        help("Run with --verbose to see the tool's output for each failure")
    )]
    GrantsIncomplete { failed: usize, attempted: usize },

    // Applications directory errors
    #[error("Cannot read applications directory: {path}: {reason}")]
    #[diagnostic(
        code(tccgrant::fs::applications_dir_unreadable),
        help("Check that the directory exists, or pass --applications-dir <DIR>")
    )]
    ApplicationsDirUnreadable { path: String, reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(tccgrant::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(tccgrant::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(tccgrant::config::parse_failed),
        help("Valid keys: applications_dir, tool, osascript")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Could not determine home directory")]
    #[diagnostic(
        code(tccgrant::config::no_home),
        help("Pass the tool location explicitly with --tool <PATH>")
    )]
    HomeDirUnavailable,

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(tccgrant::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(tccgrant::fs::io_error))]
    IoError { message: String },
}

impl TccGrantError {
    /// Whether this error means the permission tool cannot be used at all.
    ///
    /// These errors end the run before any application is scanned and, unless
    /// `--strict` is given, do not produce a failing exit status.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            TccGrantError::ToolNotFound { .. } | TccGrantError::ToolNotExecutable { .. }
        )
    }
}

impl From<std::io::Error> for TccGrantError {
    fn from(err: std::io::Error) -> Self {
        TccGrantError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TccGrantError {
    fn from(err: serde_json::Error) -> Self {
        TccGrantError::IoError {
            message: format!("Failed to serialize summary: {err}"),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, TccGrantError>;
