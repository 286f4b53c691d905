//! # fixup
//!
//! Upgrades an existing Beego code base in place so it builds against the
//! 1.6+ API: renamed globals and methods, map-style accessors turned into
//! method calls, cache TTLs given a duration unit, and deprecated `.conf`
//! keys renamed.
//!
//! ## Usage
//!
//! ```bash
//! fixup fix [--path DIR] [--dry-run] [--backup] [--json]
//! ```
//!
//! ## Modules
//!
//! - `rules` - Compiled-in literal rule tables
//! - `rewrite` - Pure rewrite stages (literal, pattern, imports, dispatch)
//! - `transform` - Per-file pipeline and in-place persistence
//! - `walker` - Directory traversal
//! - `report` - Per-file outcomes and run summary
//! - `config` - `fixup.toml` settings
//! - `cli` - Command-line interface
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod rewrite;
pub mod rules;
pub mod transform;
pub mod walker;

pub use config::FixConfig;
pub use error::{FixError, Result};
pub use report::{FileOutcome, FileStatus, FixReport};
pub use transform::{FileContext, FileTransformer};
