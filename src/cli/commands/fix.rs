//! `fix` command: upgrade every eligible file under a directory

use anyhow::{bail, Context, Result};
use tracing::{error, info};

use crate::cli::args::FixArgs;
use crate::config::FixConfig;
use crate::report::FixReport;
use crate::transform::FileTransformer;
use crate::walker;

/// Short version line printed before the progress lines
pub fn banner() -> String {
    format!("fixup v{}", env!("CARGO_PKG_VERSION"))
}

/// Execute the fix command
pub fn run_fix_command(args: FixArgs) -> Result<FixReport> {
    let root = match args.path {
        Some(path) => path,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    if !root.is_dir() {
        bail!("{} is not a directory", root.display());
    }

    let mut config = FixConfig::discover(&root, args.config.as_deref())
        .context("Failed to load configuration")?;
    if args.backup {
        config.backup = true;
    }

    info!("Upgrading the application in {}", root.display());
    if args.dry_run {
        info!("Dry run: no files will be written");
    }

    let transformer = FileTransformer::new(config).dry_run(args.dry_run);
    let show_progress = !args.json;
    if show_progress {
        println!("{}", banner());
    }
    let report = walker::fix_tree(&root, &transformer, |outcome| {
        if show_progress {
            println!("\tfix\t{}", outcome.path.display());
        }
    });

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        println!("{}", report.summary());
    }

    for failure in report.failures() {
        error!("Failed: {}", failure.path.display());
    }

    if args.strict && report.failed() > 0 {
        bail!("{} file(s) could not be fixed", report.failed());
    }

    info!("Upgrade done");
    Ok(report)
}
