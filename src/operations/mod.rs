//! Operations module
//!
//! This module provides high-level operations that coordinate:
//! - GrantOperation: Scan, resolve and grant workflow
//!
//! The operations coordinate with:
//! - Scanner: Application discovery (from scanner module)
//! - Resolver: Bundle identifier lookup (from resolver module)
//! - Granter: Permission grants (from granter module)
//! - UI: Progress reporting (from ui module)

pub mod grant;

pub use grant::GrantOperation;
