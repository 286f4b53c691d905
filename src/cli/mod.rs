//! CLI command handlers
//!
//! Argument parsing structures, command implementations and routing.

pub mod args;
pub mod commands;
pub mod help;
pub mod router;

pub use args::{Cli, Commands, FixArgs};
pub use help::get_log_level;
pub use router::execute_command;
