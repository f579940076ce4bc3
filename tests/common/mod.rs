//! Common test utilities for tccgrant integration tests
//!
//! Every test gets its own sandbox: a fake home directory (which holds the
//! default tool location and config directory), an applications directory,
//! and shell scripts standing in for `osascript` and `tccplus` that record
//! how they were invoked.

#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// An isolated environment for one tccgrant run
pub struct TestEnv {
    /// Temporary directory
    pub temp: TempDir,
    /// Stand-in for the user's home directory
    pub home: PathBuf,
    /// Directory scanned for application bundles
    pub apps: PathBuf,
    /// Directory holding the fake query program
    pub bin: PathBuf,
}

impl TestEnv {
    /// Create a new environment with empty home and applications directories
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let home = temp.path().join("home");
        let apps = temp.path().join("Applications");
        let bin = temp.path().join("bin");
        for dir in [&home, &apps, &bin] {
            std::fs::create_dir_all(dir).expect("Failed to create directory");
        }
        Self {
            temp,
            home,
            apps,
            bin,
        }
    }

    /// Create an application bundle directory
    pub fn create_app(&self, name: &str) -> PathBuf {
        let path = self.apps.join(name);
        std::fs::create_dir_all(path.join("Contents")).expect("Failed to create app bundle");
        path
    }

    /// Create a plain file in the applications directory
    pub fn create_file(&self, name: &str) {
        std::fs::write(self.apps.join(name), "").expect("Failed to write file");
    }

    /// Default tool location under the fake home directory
    pub fn default_tool_path(&self) -> PathBuf {
        self.home.join("Downloads").join("tccplus")
    }

    /// File where the fake tool records its arguments
    pub fn tool_log(&self) -> PathBuf {
        self.temp.path().join("tccplus.log")
    }

    /// File where the fake query program records its arguments
    pub fn osascript_log(&self) -> PathBuf {
        self.temp.path().join("osascript.log")
    }

    /// Install a fake tccplus at the default location.
    ///
    /// Invocations whose arguments equal one of `failing` (e.g.
    /// `"add Microphone com.example.foo"`) exit with status 1.
    pub fn install_tool(&self, failing: &[&str]) -> PathBuf {
        let path = self.default_tool_path();
        self.write_tool(&path, failing);
        path
    }

    /// Write a fake tccplus at an arbitrary location
    pub fn write_tool(&self, path: &Path, failing: &[&str]) {
        let mut body = format!("echo \"$*\" >> '{}'\ncase \"$*\" in\n", self.tool_log().display());
        for args in failing {
            body.push_str(&format!(
                "  \"{args}\") echo 'permission database is locked' >&2; exit 1 ;;\n"
            ));
        }
        body.push_str("esac\nexit 0");
        write_script(path, &body);
    }

    /// Install a fake osascript answering with the given `(bundle name, identifier)` pairs.
    ///
    /// Bundles not listed make the query exit with status 1.
    pub fn install_osascript(&self, ids: &[(&str, &str)]) -> PathBuf {
        let path = self.bin.join("osascript");
        let mut body = format!(
            "echo \"$2\" >> '{}'\ncase \"$2\" in\n",
            self.osascript_log().display()
        );
        for (name, id) in ids {
            body.push_str(&format!("  */{name}*) echo '{id}' ;;\n"));
        }
        body.push_str("  *) echo 'execution error: app not found' >&2; exit 1 ;;\nesac");
        write_script(&path, &body);
        path
    }

    /// Lines recorded by the fake tool
    pub fn tool_calls(&self) -> Vec<String> {
        read_lines(&self.tool_log())
    }

    /// Lines recorded by the fake query program
    pub fn osascript_calls(&self) -> Vec<String> {
        read_lines(&self.osascript_log())
    }

    /// Location of the config file read when `--config` is not given
    pub fn default_config_path(&self) -> PathBuf {
        let config_dir = if cfg!(target_os = "macos") {
            self.home.join("Library").join("Application Support")
        } else {
            self.home.join(".config")
        };
        config_dir.join("tccgrant").join("config.yaml")
    }

    /// Command for the tccgrant binary, isolated from the real user setup
    pub fn base_cmd(&self) -> Command {
        let mut cmd = tccgrant_cmd();
        cmd.env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env_remove("TCCGRANT_APPLICATIONS_DIR")
            .env_remove("TCCGRANT_TOOL")
            .env_remove("TCCGRANT_CONFIG")
            .env_remove("TCCGRANT_LOG")
            .env("TCCGRANT_OSASCRIPT", self.bin.join("osascript"));
        cmd
    }

    /// [`Self::base_cmd`] scanning the sandbox applications directory
    pub fn cmd(&self) -> Command {
        let mut cmd = self.base_cmd();
        cmd.arg("--applications-dir").arg(&self.apps);
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the tccgrant binary without any sandboxing
#[allow(deprecated)]
pub fn tccgrant_cmd() -> Command {
    Command::cargo_bin("tccgrant").expect("Failed to find tccgrant binary")
}

/// Write a file, creating parent directories
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Write an executable `/bin/sh` script
pub fn write_script(path: &Path, body: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to make script executable");
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}
