//! Literal rule engine
//!
//! Applies a [`RuleTable`] to a whole text in one left-to-right pass. At
//! each position the rules are tried in table order and the first whose
//! `old` starts there is replaced; scanning resumes right after the
//! consumed match, so replacement text is never scanned again. Positions
//! where nothing matches are copied through unchanged.

use crate::rules::{LiteralRule, RuleTable};
use std::borrow::Cow;

/// Rules of one table grouped by the first byte of their pattern.
///
/// Table order is preserved inside every bucket, so the first candidate
/// that matches is also the first matching rule of the table.
struct FirstByteIndex<'t> {
    buckets: Vec<Vec<&'t LiteralRule>>,
}

impl<'t> FirstByteIndex<'t> {
    fn new(table: &'t RuleTable) -> Self {
        let mut buckets = vec![Vec::new(); 256];
        for rule in table.iter() {
            if let Some(&first) = rule.old.as_bytes().first() {
                buckets[first as usize].push(rule);
            }
        }
        Self { buckets }
    }

    fn candidates(&self, byte: u8) -> &[&'t LiteralRule] {
        &self.buckets[byte as usize]
    }
}

/// Apply `table` to `text` in a single non-recursive pass.
///
/// Returns the input borrowed when no rule matched anywhere.
pub fn apply<'a>(table: &RuleTable, text: &'a str) -> Cow<'a, str> {
    let index = FirstByteIndex::new(table);
    let bytes = text.as_bytes();

    let mut out: Option<String> = None;
    // Start of the pending span of unmatched input
    let mut copied = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        let rest = &text[pos..];
        let hit = index
            .candidates(bytes[pos])
            .iter()
            .find(|rule| rest.starts_with(rule.old));

        match hit {
            Some(rule) => {
                let buf = out.get_or_insert_with(|| String::with_capacity(text.len()));
                buf.push_str(&text[copied..pos]);
                buf.push_str(rule.new);
                pos += rule.old.len();
                copied = pos;
            }
            None => {
                // Patterns are valid UTF-8 so they can only start on a char boundary
                pos += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&text[copied..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(text),
    }
}

/// Apply several tables one after the other, each over the previous output.
pub fn apply_all<'a>(tables: &[RuleTable], text: &'a str) -> Cow<'a, str> {
    let mut current = Cow::Borrowed(text);
    for table in tables {
        let changed = match apply(table, &current) {
            Cow::Owned(next) => Some(next),
            Cow::Borrowed(_) => None,
        };
        if let Some(next) = changed {
            tracing::trace!(table = table.name, "literal rules changed text");
            current = Cow::Owned(next);
        }
    }
    current
}
