//! File-type dispatch
//!
//! Extra literal tables selected from the file name: generated swagger
//! docs get [`DOCS_RULES`], application configuration files get
//! [`CONFIG_KEY_RULES`].

use super::literal;
use crate::config::FixConfig;
use crate::rules::{RuleTable, CONFIG_KEY_RULES, DOCS_RULES};
use serde::Serialize;
use std::borrow::Cow;

/// Base-name marker of generated documentation files
pub const DOCS_MARKER: &str = "docs.go";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// Compilable source
    Source,
    /// Application configuration
    Config,
    Other,
}

impl FileKind {
    pub fn classify(extension: Option<&str>, config: &FixConfig) -> Self {
        match extension {
            Some(ext) if config.is_source_extension(ext) => FileKind::Source,
            Some(ext) if config.is_config_extension(ext) => FileKind::Config,
            _ => FileKind::Other,
        }
    }
}

pub fn is_docs_file(base_name: &str) -> bool {
    base_name.contains(DOCS_MARKER)
}

/// Tables that apply to a file, in application order
pub fn tables_for(base_name: &str, kind: FileKind) -> Vec<RuleTable> {
    let mut tables = Vec::new();
    if is_docs_file(base_name) {
        tables.push(DOCS_RULES);
    }
    if kind == FileKind::Config {
        tables.push(CONFIG_KEY_RULES);
    }
    tables
}

pub fn dispatch<'a>(text: &'a str, base_name: &str, kind: FileKind) -> Cow<'a, str> {
    let tables = tables_for(base_name, kind);
    if tables.is_empty() {
        return Cow::Borrowed(text);
    }
    literal::apply_all(&tables, text)
}
