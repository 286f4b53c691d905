//! Rewrite stages
//!
//! Each stage is a pure text-to-text function over a whole file:
//!
//! - [`literal`] - ordered exact-substring rule tables
//! - [`pattern`] - regex passes with capture templates or computed replacements
//! - [`imports`] - import section scanning and injection
//! - [`dispatch`] - extra tables chosen by file name

pub mod dispatch;
pub mod imports;
pub mod literal;
pub mod pattern;

pub use dispatch::FileKind;
pub use imports::{ensure_import, GoImportScanner, ImportScanError, ImportScanner};
pub use pattern::{PassKind, PatternOutcome};
