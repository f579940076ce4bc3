//! Domain models for tccgrant
//!
//! This module contains pure domain objects: the applications being processed,
//! their bundle identifiers, the permission kinds granted to them, and the
//! per-run outcome records.

pub mod application;
pub mod outcome;
pub mod permission;

pub use application::{ApplicationEntry, BundleId};
pub use outcome::{AppOutcome, GrantOutcome, Resolution, RunSummary};
pub use permission::PermissionKind;
