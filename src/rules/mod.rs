//! Literal rewrite rules
//!
//! A [`RuleTable`] is a named, ordered list of exact substring replacements.
//! Priority is defined only by position: when several rules could match at
//! the same offset, the one listed first wins, whatever the lengths of the
//! competing patterns. Identity and duplicate rules are legal and never
//! change the text.
//!
//! The tables themselves are fixed data compiled into the binary:
//!
//! - [`SOURCE_RULES`] and [`SOURCE_FOLLOW_UP_RULES`] for every visited file
//! - [`DOCS_RULES`] for generated `docs.go` files
//! - [`CONFIG_KEY_RULES`] for `.conf` files

mod config_keys;
mod source;

pub use config_keys::CONFIG_KEY_RULES;
pub use source::{DOCS_RULES, SOURCE_FOLLOW_UP_RULES, SOURCE_RULES};

/// One exact `old` -> `new` replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralRule {
    pub old: &'static str,
    pub new: &'static str,
}

impl LiteralRule {
    pub const fn new(old: &'static str, new: &'static str) -> Self {
        Self { old, new }
    }

    /// Rules that can never change the text they match
    pub fn is_identity(&self) -> bool {
        self.old == self.new
    }
}

/// Named, ordered sequence of literal rules
#[derive(Debug, Clone, Copy)]
pub struct RuleTable {
    pub name: &'static str,
    pub rules: &'static [LiteralRule],
}

impl RuleTable {
    pub const fn new(name: &'static str, rules: &'static [LiteralRule]) -> Self {
        Self { name, rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LiteralRule> {
        self.rules.iter()
    }
}
