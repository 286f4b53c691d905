//! CLI argument structures

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Upgrade a Beego application in place
#[derive(Parser)]
#[command(name = "fixup")]
#[command(about = "fixup - Upgrade a Beego application to the 1.6+ API in place", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite obsolete API calls, accessors and configuration keys
    #[command(name = "fix")]
    Fix(FixArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct FixArgs {
    /// Directory to fix (defaults to current directory)
    #[arg(short = 'p', long)]
    pub path: Option<PathBuf>,

    /// Configuration file (defaults to fixup.toml in the fixed directory)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Report what would change without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Keep a .bak copy of every rewritten file
    #[arg(long)]
    pub backup: bool,

    /// Exit with an error when any file could not be fixed
    #[arg(long)]
    pub strict: bool,

    /// Print the run report as JSON instead of progress lines
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_fix_flags() {
        let cli = Cli::parse_from([
            "fixup", "-vv", "fix", "--path", "app", "--dry-run", "--backup", "--json",
        ]);
        assert_eq!(cli.verbose, 2);
        let Some(Commands::Fix(args)) = cli.command else {
            panic!("expected fix command");
        };
        assert_eq!(args.path, Some(PathBuf::from("app")));
        assert!(args.dry_run);
        assert!(args.backup);
        assert!(args.json);
        assert!(!args.strict);
        assert!(args.config.is_none());
    }
}
