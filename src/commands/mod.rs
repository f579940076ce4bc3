//! Command implementations for tccgrant CLI

pub mod completions;
pub mod grant;
pub mod version;
