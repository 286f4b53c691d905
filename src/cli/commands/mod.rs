//! Command implementation modules

pub mod fix;

pub use fix::run_fix_command;
