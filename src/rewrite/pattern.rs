//! Pattern rewrite passes
//!
//! A fixed, ordered list of regex passes. Each pass is a total substitution
//! over the whole text produced by the previous one: spans that do not
//! match are copied verbatim and every non-overlapping match is rewritten
//! independently, left to right.
//!
//! Matching is line oriented. The assignment pass assumes one statement per
//! line: anything after the value on the same line, other than a `//`
//! comment outside string and rune literals, becomes part of the rewritten
//! value. Cache-put values may nest parentheses two levels deep.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Which rewrite a pass performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassKind {
    /// `Input.Params["id"]` -> `Input.Param("id")`
    ParamAccess,
    /// `Input.Data["k"] = v` -> `Input.SetData("k", v)`
    DataAssign,
    /// `Input.Data["k"]` -> `Input.Data("k")`
    DataRead,
    /// `.Put("k", v, 60)` -> `.Put("k", v, 60*time.Second)`
    CachePut,
}

impl PassKind {
    /// Passes that only make sense on compilable source
    pub fn source_only(self) -> bool {
        matches!(self, PassKind::CachePut)
    }
}

impl fmt::Display for PassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PassKind::ParamAccess => "param-access",
            PassKind::DataAssign => "data-assign",
            PassKind::DataRead => "data-read",
            PassKind::CachePut => "cache-put",
        };
        f.write_str(name)
    }
}

/// How a match is turned into its replacement
#[derive(Clone, Copy)]
pub enum Replacement {
    /// Template with `${name}` capture references
    Template(&'static str),
    /// Replacement computed from the captures
    Computed(fn(&Captures<'_>) -> String),
}

impl fmt::Debug for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Replacement::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Replacement::Computed(_) => f.write_str("Computed"),
        }
    }
}

/// One regex pass: pattern plus its replacement
#[derive(Debug)]
pub struct PatternPass {
    pub kind: PassKind,
    pub regex: Regex,
    pub replacement: Replacement,
}

impl PatternPass {
    fn new(kind: PassKind, pattern: &str, replacement: Replacement) -> Self {
        Self {
            kind,
            regex: Regex::new(pattern).expect("Valid regex pattern"),
            replacement,
        }
    }

    /// Pure: rewrite every match in `text`
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.replacement {
            Replacement::Template(template) => self.regex.replace_all(text, template),
            Replacement::Computed(build) => {
                self.regex.replace_all(text, |caps: &Captures<'_>| build(caps))
            }
        }
    }
}

/// Byte offset where a trailing `//` comment starts in `value`, including
/// the whitespace before it. Slashes inside interpreted strings, raw
/// strings and rune literals are not comments.
fn trailing_comment_start(value: &str) -> Option<usize> {
    let bytes = value.as_bytes();
    let mut quote = None;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) => {
                if b == b'\\' && q != b'`' {
                    i += 1;
                } else if b == q {
                    quote = None;
                }
            }
            None => match b {
                b'"' | b'\'' | b'`' => quote = Some(b),
                b'/' if bytes.get(i + 1) == Some(&b'/') => {
                    return Some(value[..i].trim_end().len());
                }
                _ => {}
            },
        }
        i += 1;
    }
    None
}

fn set_data(caps: &Captures<'_>) -> String {
    let value = &caps["value"];
    let (value, comment) = match trailing_comment_start(value) {
        Some(at) if at > 0 => value.split_at(at),
        _ => (value, ""),
    };
    format!(
        "Input.SetData(\"{}\", {value}){comment}{}",
        &caps["key"], &caps["eol"]
    )
}

/// The passes in execution order. `DataAssign` must run before `DataRead`
/// so that assignments are not turned into reads.
static PASSES: Lazy<Vec<PatternPass>> = Lazy::new(|| {
    vec![
        PatternPass::new(
            PassKind::ParamAccess,
            r#"Input\.Params\["(?P<key>[^"\n]*)"\]"#,
            Replacement::Template(r#"Input.Param("${key}")"#),
        ),
        PatternPass::new(
            PassKind::DataAssign,
            r#"(?m)Input\.Data\["(?P<key>[^"\n]*)"\][ \t]*=[ \t]*(?P<value>[^=\s][^\n]*?)(?P<eol>[ \t]*\r?)$"#,
            Replacement::Computed(set_data),
        ),
        PatternPass::new(
            PassKind::DataRead,
            r#"Input\.Data\["(?P<key>[^"\n]*)"\]"#,
            Replacement::Template(r#"Input.Data("${key}")"#),
        ),
        PatternPass::new(
            PassKind::CachePut,
            r#"\.Put\("(?P<key>[^"\n]*)",[ \t]*(?P<value>(?:[^()\n]|\((?:[^()\n]|\([^()\n]*\))*\))*?),[ \t]*(?P<ttl>[^*.()\n]*)\)"#,
            Replacement::Template(r#".Put("${key}", ${value}, ${ttl}*time.Second)"#),
        ),
    ]
});

/// All passes in execution order
pub fn passes() -> &'static [PatternPass] {
    &PASSES
}

/// Look up a single pass, mostly for testing passes in isolation
pub fn pass(kind: PassKind) -> &'static PatternPass {
    PASSES
        .iter()
        .find(|p| p.kind == kind)
        .expect("every pass kind is registered")
}

/// Result of running the pattern passes over one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternOutcome {
    pub text: String,
    pub fired: Vec<PassKind>,
}

impl PatternOutcome {
    pub fn cache_put_matched(&self) -> bool {
        self.fired.contains(&PassKind::CachePut)
    }
}

/// Run every pass in order over `text`.
///
/// Source-only passes are evaluated only when `source_file` is set.
pub fn rewrite(text: &str, source_file: bool) -> PatternOutcome {
    let mut current = text.to_string();
    let mut fired = Vec::new();

    for pass in passes() {
        if pass.kind.source_only() && !source_file {
            continue;
        }
        let next = match pass.apply(&current) {
            Cow::Owned(next) => Some(next),
            Cow::Borrowed(_) => None,
        };
        if let Some(next) = next {
            tracing::debug!(pass = %pass.kind, "pattern pass fired");
            fired.push(pass.kind);
            current = next;
        }
    }

    PatternOutcome {
        text: current,
        fired,
    }
}
