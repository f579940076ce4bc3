//! Version command implementation

use crate::config::{DEFAULT_APPLICATIONS_DIR, DEFAULT_TOOL_RELATIVE, file};
use crate::error::Result;
use crate::resolver::osascript::DEFAULT_OSASCRIPT;

/// Run version command
pub fn run() -> Result<()> {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!();
    println!("Defaults:");
    println!("  Applications: {DEFAULT_APPLICATIONS_DIR}");
    println!("  Tool: ~/{DEFAULT_TOOL_RELATIVE}");
    println!("  Query program: {DEFAULT_OSASCRIPT}");
    println!("  Config file: {}", config_file_location());

    Ok(())
}

fn config_file_location() -> String {
    dirs::config_dir().map_or_else(
        || "unavailable (no config directory)".to_string(),
        |dir| file::default_path(&dir).display().to_string(),
    )
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) { "debug" } else { "release" }
}
