//! Grant operation
//!
//! Coordinates the whole run: check that the permission tool is usable,
//! scan the applications directory, resolve each bundle identifier and grant
//! every [`PermissionKind`] to it. Per-application failures are reported and
//! recorded in the returned [`RunSummary`]; only the up-front checks abort.

use std::path::Path;

use crate::domain::{AppOutcome, ApplicationEntry, GrantOutcome, PermissionKind, RunSummary};
use crate::error::Result;
use crate::granter::PermissionGranter;
use crate::resolver::BundleIdResolver;
use crate::scanner::scan_applications;
use crate::ui::Reporter;

/// Orchestrator for the grant workflow
pub struct GrantOperation<'a, R, G> {
    resolver: &'a R,
    granter: &'a G,
}

impl<'a, R: BundleIdResolver, G: PermissionGranter> GrantOperation<'a, R, G> {
    pub fn new(resolver: &'a R, granter: &'a G) -> Self {
        Self { resolver, granter }
    }

    /// Process every application bundle in `applications_dir`
    pub fn run(&self, applications_dir: &Path, reporter: &mut dyn Reporter) -> Result<RunSummary> {
        self.granter.ensure_available()?;

        let applications = scan_applications(applications_dir)?;
        reporter.started(applications_dir);

        let mut summary = RunSummary::default();
        for app in applications {
            summary.push(self.process(&app, reporter));
        }

        reporter.finish(&summary);
        Ok(summary)
    }

    fn process(&self, app: &ApplicationEntry, reporter: &mut dyn Reporter) -> AppOutcome {
        reporter.resolving(app);

        let Some(bundle_id) = self.resolver.resolve(app.path()) else {
            reporter.unresolved(app);
            return AppOutcome::unresolved(app);
        };

        reporter.resolved(app, &bundle_id);

        let grants = PermissionKind::ALL
            .iter()
            .map(|&kind| match self.granter.grant(kind, &bundle_id) {
                Ok(()) => {
                    reporter.granted(kind, &bundle_id);
                    GrantOutcome::granted(kind)
                }
                Err(e) => {
                    log::debug!("{e:?}");
                    reporter.grant_failed(kind, &bundle_id, &e);
                    GrantOutcome::failed(kind, e.to_string())
                }
            })
            .collect();

        AppOutcome::resolved(app, bundle_id, grants)
    }
}
