//! CLI definitions using clap derive API
//!
//! Running without a subcommand performs the grant run. Argument types for
//! the remaining subcommands live in submodules:
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;

pub use completions::CompletionsArgs;

use crate::config::ConfigOverrides;

/// tccgrant - grant microphone and camera access to installed applications
#[derive(Parser, Debug)]
#[command(
    name = "tccgrant",
    author,
    version,
    args_conflicts_with_subcommands = true,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Grant microphone and camera access to every installed application",
    long_about = "tccgrant resolves the bundle identifier of every application bundle in the \
                  applications directory and grants it Microphone and Camera access through \
                  the tccplus tool.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  tccgrant                               \x1b[90m# Grant to everything in /Applications\x1b[0m\n   \
                  tccgrant --dry-run                     \x1b[90m# Show what would be granted\x1b[0m\n   \
                  tccgrant --tool /opt/bin/tccplus       \x1b[90m# Use tccplus from another location\x1b[0m\n   \
                  tccgrant -a ~/Applications --strict    \x1b[90m# Exit non-zero if any grant fails\x1b[0m\n   \
                  tccgrant --json > summary.json         \x1b[90m# Machine-readable outcome\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    #[command(flatten)]
    pub grant: GrantArgs,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the grant run
#[derive(Args, Debug, Default)]
pub struct GrantArgs {
    /// Directory scanned for application bundles (default: /Applications)
    #[arg(long, short = 'a', value_name = "DIR", env = "TCCGRANT_APPLICATIONS_DIR")]
    pub applications_dir: Option<PathBuf>,

    /// Path of the tccplus executable (default: ~/Downloads/tccplus)
    #[arg(long, short = 't', value_name = "PATH", env = "TCCGRANT_TOOL")]
    pub tool: Option<PathBuf>,

    /// Program used to query bundle identifiers
    #[arg(long, value_name = "PATH", env = "TCCGRANT_OSASCRIPT", hide = true)]
    pub osascript: Option<PathBuf>,

    /// Config file (default: <config dir>/tccgrant/config.yaml)
    #[arg(long, short = 'c', value_name = "PATH", env = "TCCGRANT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show what would be granted without running the tool
    #[arg(long)]
    pub dry_run: bool,

    /// Print the outcome of every application as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with a failure status if the tool is missing or any grant fails
    #[arg(long)]
    pub strict: bool,
}

impl From<&GrantArgs> for ConfigOverrides {
    fn from(args: &GrantArgs) -> Self {
        Self {
            config_file: args.config.clone(),
            applications_dir: args.applications_dir.clone(),
            tool: args.tool.clone(),
            osascript: args.osascript.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_no_arguments() {
        let cli = Cli::try_parse_from(["tccgrant"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.grant.dry_run);
        assert!(!cli.grant.strict);
        assert!(!cli.grant.json);
    }

    #[test]
    fn test_cli_parsing_paths() {
        let cli = Cli::try_parse_from([
            "tccgrant",
            "-a",
            "/tmp/apps",
            "--tool",
            "/tmp/tccplus",
            "--osascript",
            "/tmp/osascript",
            "-c",
            "/tmp/config.yaml",
        ])
        .unwrap();

        assert_eq!(cli.grant.applications_dir, Some(PathBuf::from("/tmp/apps")));
        assert_eq!(cli.grant.tool, Some(PathBuf::from("/tmp/tccplus")));
        assert_eq!(cli.grant.osascript, Some(PathBuf::from("/tmp/osascript")));
        assert_eq!(cli.grant.config, Some(PathBuf::from("/tmp/config.yaml")));
    }

    #[test]
    fn test_cli_parsing_flags() {
        let cli = Cli::try_parse_from(["tccgrant", "--dry-run", "--json", "--strict", "-v"]).unwrap();
        assert!(cli.grant.dry_run);
        assert!(cli.grant.json);
        assert!(cli.grant.strict);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["tccgrant", "version"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Version)));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["tccgrant", "completions", "zsh"]).unwrap();
        match cli.command {
            Some(Commands::Completions(args)) => assert_eq!(args.shell, "zsh"),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_grant_flags_conflict_with_subcommands() {
        assert!(Cli::try_parse_from(["tccgrant", "--dry-run", "completions", "zsh"]).is_err());
        assert!(Cli::try_parse_from(["tccgrant", "--tool", "/tmp/tccplus", "version"]).is_err());
    }

    #[test]
    fn test_cli_verbose_after_subcommand() {
        let cli = Cli::try_parse_from(["tccgrant", "completions", "zsh", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Completions(_))));
    }

    #[test]
    fn test_cli_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["tccgrant", "/Applications"]).is_err());
    }

    #[test]
    fn test_grant_args_into_overrides() {
        let args = GrantArgs {
            tool: Some(PathBuf::from("/tmp/tccplus")),
            ..GrantArgs::default()
        };
        let overrides = ConfigOverrides::from(&args);
        assert_eq!(overrides.tool, Some(PathBuf::from("/tmp/tccplus")));
        assert!(overrides.applications_dir.is_none());
        assert!(overrides.config_file.is_none());
    }
}
