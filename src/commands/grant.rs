//! Grant command implementation
//!
//! This is the default command: it grants Microphone and Camera access to
//! every application bundle in the applications directory.

use console::Style;

use crate::cli::GrantArgs;
use crate::config::{Config, ConfigOverrides};
use crate::domain::RunSummary;
use crate::error::{Result, TccGrantError};
use crate::granter::{DryRunGranter, PermissionGranter, TccPlusGranter};
use crate::operations::GrantOperation;
use crate::resolver::OsaScriptResolver;
use crate::ui::{ConsoleReporter, Reporter, SilentReporter};

/// Run grant command
pub fn run(args: &GrantArgs) -> Result<()> {
    let config = Config::load(&ConfigOverrides::from(args))?;

    let result = execute(&config, args);
    finish(result, args)
}

fn execute(config: &Config, args: &GrantArgs) -> Result<RunSummary> {
    let resolver = OsaScriptResolver::new(&config.osascript);
    let granter = TccPlusGranter::new(&config.tool);

    let mut reporter: Box<dyn Reporter> = if args.json {
        Box::new(SilentReporter)
    } else {
        Box::new(ConsoleReporter::new(args.dry_run))
    };

    if args.dry_run {
        grant_with(&resolver, &DryRunGranter::new(granter), config, reporter.as_mut())
    } else {
        grant_with(&resolver, &granter, config, reporter.as_mut())
    }
}

fn grant_with<G: PermissionGranter>(
    resolver: &OsaScriptResolver,
    granter: &G,
    config: &Config,
    reporter: &mut dyn Reporter,
) -> Result<RunSummary> {
    GrantOperation::new(resolver, granter).run(&config.applications_dir, reporter)
}

/// Turn the run result into the command's result.
///
/// A missing tool ends the run early but, like a run with failed grants,
/// only fails the command under `--strict`.
fn finish(result: Result<RunSummary>, args: &GrantArgs) -> Result<()> {
    let summary = match result {
        Ok(summary) => summary,
        Err(e) if e.is_precondition() && !args.strict => {
            eprintln!("{}", Style::new().yellow().apply_to(&e));
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    if args.strict && summary.has_failures() {
        return Err(TccGrantError::GrantsIncomplete {
            failed: summary.failed_grants(),
            attempted: summary.attempted_grants(),
        });
    }

    Ok(())
}
