//! Command routing and execution

use crate::cli::args::{Cli, Commands};
use crate::cli::commands::run_fix_command;
use anyhow::Result;
use clap::CommandFactory;

/// Execute a CLI command based on the parsed arguments
pub fn execute_command(command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Fix(args)) => run_fix_command(args).map(|_| ()),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
