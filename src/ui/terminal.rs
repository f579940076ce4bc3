//! Console reporter with styled output

use std::path::Path;
use std::time::Duration;

use console::{Style, Term};
use indicatif::{ProgressBar, ProgressStyle};

use super::Reporter;
use crate::domain::{ApplicationEntry, BundleId, PermissionKind, RunSummary};
use crate::error::TccGrantError;

/// Prints one line per event to stdout
///
/// On an interactive terminal a spinner shows which application is being
/// queried; lines are printed above it.
pub struct ConsoleReporter {
    spinner: Option<ProgressBar>,
    dry_run: bool,
}

impl ConsoleReporter {
    pub fn new(dry_run: bool) -> Self {
        Self {
            spinner: None,
            dry_run,
        }
    }

    fn start_spinner() -> Option<ProgressBar> {
        if !Term::stdout().is_term() {
            return None;
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }

    fn line(&self, text: String) {
        match &self.spinner {
            Some(spinner) => spinner.suspend(|| println!("{text}")),
            None => println!("{text}"),
        }
    }
}

/// Format the end-of-run summary line
pub fn summary_line(summary: &RunSummary) -> String {
    let total = summary.total();
    let apps_label = if total == 1 {
        "application"
    } else {
        "applications"
    };
    format!(
        "Processed {total} {apps_label}: {} granted, {} partial, {} failed, {} unresolved",
        summary.granted(),
        summary.partial(),
        summary.failed(),
        summary.unresolved()
    )
}

impl Reporter for ConsoleReporter {
    fn started(&mut self, applications_dir: &Path) {
        let prefix = if self.dry_run { "[dry run] " } else { "" };
        self.line(format!(
            "{prefix}{} {}",
            Style::new().bold().apply_to("Scanning"),
            applications_dir.display()
        ));
        self.spinner = Self::start_spinner();
    }

    fn resolving(&mut self, app: &ApplicationEntry) {
        if let Some(spinner) = &self.spinner {
            spinner.set_message(format!("Resolving {}", app.name()));
        }
    }

    fn resolved(&mut self, app: &ApplicationEntry, bundle_id: &BundleId) {
        self.line(format!(
            "Processing {} with bundle ID: {}",
            Style::new().bold().yellow().apply_to(app.name()),
            Style::new().cyan().apply_to(bundle_id)
        ));
    }

    fn unresolved(&mut self, app: &ApplicationEntry) {
        self.line(format!(
            "{} {}",
            Style::new().yellow().apply_to("Could not retrieve bundle ID for:"),
            app.name()
        ));
    }

    fn granted(&mut self, kind: PermissionKind, bundle_id: &BundleId) {
        let text = if self.dry_run {
            format!("Would grant {kind} access for: {bundle_id}")
        } else {
            format!("{kind} access granted for: {bundle_id}")
        };
        self.line(format!("  {}", Style::new().green().apply_to(text)));
    }

    fn grant_failed(&mut self, kind: PermissionKind, bundle_id: &BundleId, error: &TccGrantError) {
        let detail = match error {
            TccGrantError::GrantFailed { reason, .. } => reason.clone(),
            other => other.to_string(),
        };
        self.line(format!(
            "  {}\n  {} {detail}",
            Style::new()
                .red()
                .apply_to(format!("Failed to grant {kind} access for: {bundle_id}")),
            Style::new().red().bold().apply_to("Error:")
        ));
    }

    fn finish(&mut self, summary: &RunSummary) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
        println!();
        println!("{}", Style::new().bold().apply_to(summary_line(summary)));
    }
}
