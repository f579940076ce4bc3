//! Test fixtures for exercising the subprocess edge.
//!
//! Unit tests of the resolver and granter run real processes: small shell
//! scripts written into a temp directory stand in for `osascript` and
//! `tccplus`.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, write_script};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_temp_dir();
//!     let tool = write_script(temp.path(), "tccplus", "exit 0");
//! }
//! ```

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Create a temp directory in the system temp location.
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write an executable `/bin/sh` script named `name` into `dir`.
///
/// `body` is the script without the shebang line.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to make script executable");
    path
}

/// Script body that appends its arguments, space separated, to `log`
/// and then exits with `code`.
#[cfg(unix)]
pub fn recording_body(log: &Path, code: i32) -> String {
    format!("echo \"$*\" >> '{}'\nexit {code}", log.display())
}

/// Read the lines recorded by a [`recording_body`] script.
pub fn recorded_lines(log: &Path) -> Vec<String> {
    std::fs::read_to_string(log)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}
