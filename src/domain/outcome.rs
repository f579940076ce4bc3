//! Per-application outcomes of a grant run
//!
//! Every processed application produces one [`AppOutcome`]. The collected
//! [`RunSummary`] lets callers aggregate results (exit status, JSON output)
//! instead of relying on console text.

use std::path::PathBuf;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::{ApplicationEntry, BundleId, PermissionKind};

/// Result of a single grant invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrantOutcome {
    pub kind: PermissionKind,
    /// Failure detail, `None` when the grant succeeded
    pub error: Option<String>,
}

impl GrantOutcome {
    pub fn granted(kind: PermissionKind) -> Self {
        Self { kind, error: None }
    }

    pub fn failed(kind: PermissionKind, error: impl Into<String>) -> Self {
        Self {
            kind,
            error: Some(error.into()),
        }
    }

    pub fn is_granted(&self) -> bool {
        self.error.is_none()
    }
}

/// What happened after querying an application's bundle identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    /// The identifier query failed; no grant was attempted
    Unresolved,
    Resolved {
        bundle_id: BundleId,
        grants: Vec<GrantOutcome>,
    },
}

/// Outcome for one application bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppOutcome {
    pub name: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub resolution: Resolution,
}

impl AppOutcome {
    pub fn unresolved(entry: &ApplicationEntry) -> Self {
        Self {
            name: entry.name(),
            path: entry.path().to_path_buf(),
            resolution: Resolution::Unresolved,
        }
    }

    pub fn resolved(entry: &ApplicationEntry, bundle_id: BundleId, grants: Vec<GrantOutcome>) -> Self {
        Self {
            name: entry.name(),
            path: entry.path().to_path_buf(),
            resolution: Resolution::Resolved { bundle_id, grants },
        }
    }

    pub fn grants(&self) -> &[GrantOutcome] {
        match &self.resolution {
            Resolution::Resolved { grants, .. } => grants,
            Resolution::Unresolved => &[],
        }
    }

    fn granted_count(&self) -> usize {
        self.grants().iter().filter(|g| g.is_granted()).count()
    }
}

/// All outcomes of one run, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub applications: Vec<AppOutcome>,
}

impl RunSummary {
    pub fn push(&mut self, outcome: AppOutcome) {
        self.applications.push(outcome);
    }

    pub fn total(&self) -> usize {
        self.applications.len()
    }

    /// Applications whose every grant succeeded
    pub fn granted(&self) -> usize {
        self.resolved()
            .filter(|app| app.granted_count() == app.grants().len())
            .count()
    }

    /// Applications with at least one successful and one failed grant
    pub fn partial(&self) -> usize {
        self.resolved()
            .filter(|app| {
                let granted = app.granted_count();
                granted > 0 && granted < app.grants().len()
            })
            .count()
    }

    /// Applications where no grant succeeded
    pub fn failed(&self) -> usize {
        self.resolved()
            .filter(|app| !app.grants().is_empty() && app.granted_count() == 0)
            .count()
    }

    pub fn unresolved(&self) -> usize {
        self.applications
            .iter()
            .filter(|app| app.resolution == Resolution::Unresolved)
            .count()
    }

    /// Number of grant invocations attempted
    pub fn attempted_grants(&self) -> usize {
        self.applications.iter().map(|app| app.grants().len()).sum()
    }

    /// Number of grant invocations that failed
    pub fn failed_grants(&self) -> usize {
        self.applications
            .iter()
            .flat_map(AppOutcome::grants)
            .filter(|g| !g.is_granted())
            .count()
    }

    /// Whether any grant invocation failed
    pub fn has_failures(&self) -> bool {
        self.failed_grants() > 0
    }

    fn resolved(&self) -> impl Iterator<Item = &AppOutcome> {
        self.applications
            .iter()
            .filter(|app| matches!(app.resolution, Resolution::Resolved { .. }))
    }
}

impl Serialize for RunSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RunSummary", 5)?;
        state.serialize_field("applications", &self.applications)?;
        state.serialize_field("granted", &self.granted())?;
        state.serialize_field("partial", &self.partial())?;
        state.serialize_field("failed", &self.failed())?;
        state.serialize_field("unresolved", &self.unresolved())?;
        state.end()
    }
}
