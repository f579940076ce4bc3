//! Identifier queries through `osascript`
//!
//! Runs `osascript -e 'id of app "<path>"'` and reads the identifier from
//! standard output.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::BundleIdResolver;
use crate::domain::BundleId;

/// Default program used for identifier queries
pub const DEFAULT_OSASCRIPT: &str = "osascript";

/// Resolves bundle identifiers by shelling out to the OS scripting utility
#[derive(Debug, Clone)]
pub struct OsaScriptResolver {
    program: PathBuf,
}

impl OsaScriptResolver {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

/// Build the AppleScript that asks for the identifier of the app at `app`
pub fn id_query_script(app: &Path) -> String {
    format!("id of app \"{}\"", escape_applescript(&app.to_string_lossy()))
}

/// Escape a value for use inside an AppleScript string literal
fn escape_applescript(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

impl BundleIdResolver for OsaScriptResolver {
    fn resolve(&self, app: &Path) -> Option<BundleId> {
        let script = id_query_script(app);
        log::debug!("Running {} -e {script:?}", self.program.display());

        let output = match Command::new(&self.program)
            .arg("-e")
            .arg(&script)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                log::debug!("Failed to run {}: {e}", self.program.display());
                return None;
            }
        };

        if !output.status.success() {
            log::debug!(
                "Identifier query for {} exited with {}",
                app.display(),
                output.status
            );
            return None;
        }

        BundleId::new(String::from_utf8_lossy(&output.stdout))
    }
}
