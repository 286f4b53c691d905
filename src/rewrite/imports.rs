//! Import section scanning and augmentation
//!
//! Only the head of a file is inspected: the package clause followed by the
//! import declarations. Nothing past the last import is read, so the rest of
//! the file does not need to be valid for a scan to succeed.

use std::collections::HashSet;
use thiserror::Error;

/// Import paths declared by one file
pub type ImportSet = HashSet<String>;

/// Where a new import line can be inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPoint {
    /// Byte offset just after the opening `(` of the first grouped import
    Group(usize),
    /// Byte offset just after the package clause
    AfterPackage(usize),
}

impl InsertPoint {
    pub fn offset(self) -> usize {
        match self {
            InsertPoint::Group(at) | InsertPoint::AfterPackage(at) => at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSection {
    pub paths: ImportSet,
    pub insert_point: InsertPoint,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct ImportScanError {
    pub line: usize,
    pub message: String,
}

/// Lightweight declaration scanner for one language.
pub trait ImportScanner {
    /// Collect the imported paths and locate an insertion point
    fn scan(&self, content: &str) -> Result<ImportSection, ImportScanError>;

    /// Text to insert at `point` to import `path`
    fn render(&self, path: &str, point: InsertPoint) -> String;
}

/// Make sure `rewritten` imports `path`.
///
/// The existing imports are taken from `original`, the content as it was
/// on disk. When `path` is missing, one import line is inserted into
/// `rewritten` and the new text is returned; otherwise `None`.
pub fn ensure_import<S: ImportScanner + ?Sized>(
    scanner: &S,
    original: &str,
    rewritten: &str,
    path: &str,
) -> Result<Option<String>, ImportScanError> {
    let existing = scanner.scan(original)?;
    if existing.paths.contains(path) {
        return Ok(None);
    }

    let target = scanner.scan(rewritten)?;
    if target.paths.contains(path) {
        return Ok(None);
    }

    let at = target.insert_point.offset();
    let line = scanner.render(path, target.insert_point);
    let mut out = String::with_capacity(rewritten.len() + line.len());
    out.push_str(&rewritten[..at]);
    out.push_str(&line);
    out.push_str(&rewritten[at..]);
    Ok(Some(out))
}

/// Scanner for Go package clauses and import declarations
#[derive(Debug, Default, Clone, Copy)]
pub struct GoImportScanner;

impl ImportScanner for GoImportScanner {
    fn scan(&self, content: &str) -> Result<ImportSection, ImportScanError> {
        let mut cursor = Cursor::new(content);

        cursor.skip_trivia()?;
        if !cursor.eat_keyword("package") {
            return Err(cursor.error("expected package clause"));
        }
        cursor.skip_trivia()?;
        if cursor.ident().is_none() {
            return Err(cursor.error("expected package name"));
        }
        let after_package = cursor.pos;

        let mut paths = ImportSet::new();
        let mut group = None;

        loop {
            cursor.skip_trivia_and_semicolons()?;
            if !cursor.eat_keyword("import") {
                break;
            }
            cursor.skip_trivia()?;

            if cursor.eat('(') {
                group.get_or_insert(cursor.pos);
                loop {
                    cursor.skip_trivia_and_semicolons()?;
                    if cursor.eat(')') {
                        break;
                    }
                    if cursor.at_end() {
                        return Err(cursor.error("unterminated import group"));
                    }
                    paths.insert(cursor.import_spec()?);
                }
            } else {
                paths.insert(cursor.import_spec()?);
            }
        }

        let insert_point = match group {
            Some(at) => InsertPoint::Group(at),
            None => InsertPoint::AfterPackage(after_package),
        };
        Ok(ImportSection {
            paths,
            insert_point,
        })
    }

    fn render(&self, path: &str, point: InsertPoint) -> String {
        match point {
            InsertPoint::Group(_) => format!("\n\t\"{path}\""),
            InsertPoint::AfterPackage(_) => format!("\n\nimport \"{path}\""),
        }
    }
}

const BOM: char = '\u{feff}';

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// A leading byte order mark is skipped, as the Go toolchain does.
    fn new(src: &'a str) -> Self {
        let pos = if src.starts_with(BOM) { BOM.len_utf8() } else { 0 };
        Self { src, pos }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn error(&self, message: &str) -> ImportScanError {
        ImportScanError {
            line: self.src[..self.pos].matches('\n').count() + 1,
            message: message.to_string(),
        }
    }

    fn skip_trivia(&mut self) -> Result<(), ImportScanError> {
        loop {
            let rest = self.rest();
            let trimmed = rest.trim_start();
            self.pos += rest.len() - trimmed.len();

            if trimmed.starts_with("//") {
                self.pos += trimmed.find('\n').unwrap_or(trimmed.len());
            } else if trimmed.starts_with("/*") {
                match trimmed[2..].find("*/") {
                    Some(end) => self.pos += end + 4,
                    None => return Err(self.error("unterminated block comment")),
                }
            } else {
                return Ok(());
            }
        }
    }

    fn skip_trivia_and_semicolons(&mut self) -> Result<(), ImportScanError> {
        loop {
            self.skip_trivia()?;
            if !self.eat(';') {
                return Ok(());
            }
        }
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        let rest = self.rest();
        if !rest.starts_with(keyword) {
            return false;
        }
        match rest[keyword.len()..].chars().next() {
            Some(c) if is_ident_char(c) => false,
            _ => {
                self.pos += keyword.len();
                true
            }
        }
    }

    fn ident(&mut self) -> Option<&'a str> {
        let rest = self.rest();
        let first = rest.chars().next()?;
        if !(first == '_' || first.is_alphabetic()) {
            return None;
        }
        let len = rest
            .char_indices()
            .find(|&(_, c)| !is_ident_char(c))
            .map_or(rest.len(), |(i, _)| i);
        self.pos += len;
        Some(&rest[..len])
    }

    /// `[name | . | _] "path"`
    fn import_spec(&mut self) -> Result<String, ImportScanError> {
        if !self.eat('.') {
            self.ident();
        }
        self.skip_trivia()?;
        match self.string() {
            Some(path) => path,
            None => Err(self.error("expected import path")),
        }
    }

    fn string(&mut self) -> Option<Result<String, ImportScanError>> {
        let quote = self.peek().filter(|c| *c == '"' || *c == '`')?;
        let start = self.pos;
        self.pos += 1;

        let body = self.rest();
        let mut escaped = false;
        for (i, c) in body.char_indices() {
            if quote == '"' {
                if c == '\n' {
                    break;
                }
                if escaped {
                    escaped = false;
                    continue;
                }
                if c == '\\' {
                    escaped = true;
                    continue;
                }
            }
            if c == quote {
                self.pos += i + 1;
                return Some(Ok(body[..i].to_string()));
            }
        }

        self.pos = start;
        Some(Err(self.error("unterminated import path")))
    }
}

fn is_ident_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(content: &str) -> ImportSection {
        GoImportScanner.scan(content).unwrap()
    }

    fn paths(content: &str) -> Vec<String> {
        let mut paths: Vec<_> = scan(content).paths.into_iter().collect();
        paths.sort();
        paths
    }

    #[test]
    fn test_grouped_imports() {
        let src = "package main\n\nimport (\n\t\"fmt\"\n\tcache \"github.com/astaxie/beego/cache\"\n\t_ \"github.com/lib/pq\"\n\t. \"strings\"\n)\n\nfunc main() {}\n";
        assert_eq!(
            paths(src),
            vec![
                "fmt",
                "github.com/astaxie/beego/cache",
                "github.com/lib/pq",
                "strings"
            ]
        );
        let at = src.find("import (").unwrap() + "import (".len();
        assert_eq!(scan(src).insert_point, InsertPoint::Group(at));
    }

    #[test]
    fn test_single_imports_and_comments() {
        let src = "// Package app does things.\n/* license\n   block */\npackage app // trailing\n\nimport \"fmt\"\nimport `os`; import log \"log\"\n\nvar x = 1\n";
        assert_eq!(paths(src), vec!["fmt", "log", "os"]);
        let at = src.find("package app").unwrap() + "package app".len();
        assert_eq!(scan(src).insert_point, InsertPoint::AfterPackage(at));
    }

    #[test]
    fn test_no_imports() {
        let src = "package main\n\nfunc main() {}\n";
        let section = scan(src);
        assert!(section.paths.is_empty());
        assert_eq!(section.insert_point, InsertPoint::AfterPackage(12));
    }

    #[test]
    fn test_leading_byte_order_mark() {
        let src = "\u{feff}package main\nimport \"fmt\"\n";
        let section = scan(src);
        assert_eq!(paths(src), vec!["fmt"]);
        assert_eq!(section.insert_point, InsertPoint::AfterPackage(3 + 12));

        let out = ensure_import(&GoImportScanner, src, src, "time")
            .unwrap()
            .unwrap();
        assert_eq!(
            out,
            "\u{feff}package main\n\nimport \"time\"\nimport \"fmt\"\n"
        );
    }

    #[test]
    fn test_body_after_imports_is_not_read() {
        let src = "package main\nimport \"fmt\"\nfunc main() { \"unterminated\n";
        assert_eq!(paths(src), vec!["fmt"]);
    }

    #[test]
    fn test_identifier_starting_with_import_is_not_a_declaration() {
        let src = "package main\nimportant := 1\n";
        assert!(scan(src).paths.is_empty());
    }

    #[test]
    fn test_missing_package_clause() {
        let err = GoImportScanner.scan("\n\nimport \"fmt\"\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert!(err.message.contains("package"));
    }

    #[test]
    fn test_unterminated_group() {
        let err = GoImportScanner
            .scan("package main\nimport (\n\t\"fmt\"\n")
            .unwrap_err();
        assert!(err.message.contains("unterminated import group"));
    }

    #[test]
    fn test_unterminated_path() {
        let err = GoImportScanner
            .scan("package main\nimport (\n\t\"fmt\n)\n")
            .unwrap_err();
        assert_eq!(err.line, 3);
    }

    #[test]
    fn test_unterminated_comment() {
        let err = GoImportScanner.scan("/* never closed\npackage main\n").unwrap_err();
        assert!(err.message.contains("block comment"));
    }

    #[test]
    fn test_spec_without_path() {
        let err = GoImportScanner.scan("package main\nimport fmt\n").unwrap_err();
        assert!(err.message.contains("expected import path"));
    }

    #[test]
    fn test_ensure_import_into_group() {
        let src = "package main\n\nimport (\n\t\"fmt\"\n)\n";
        let out = ensure_import(&GoImportScanner, src, src, "time")
            .unwrap()
            .unwrap();
        assert_eq!(out, "package main\n\nimport (\n\t\"time\"\n\t\"fmt\"\n)\n");
    }

    #[test]
    fn test_ensure_import_after_package() {
        let src = "package main\n\nimport \"fmt\"\n";
        let out = ensure_import(&GoImportScanner, src, src, "time")
            .unwrap()
            .unwrap();
        assert_eq!(out, "package main\n\nimport \"time\"\n\nimport \"fmt\"\n");
    }

    #[test]
    fn test_ensure_import_present() {
        let src = "package main\n\nimport (\n\t\"time\"\n)\n";
        assert_eq!(ensure_import(&GoImportScanner, src, src, "time").unwrap(), None);
    }

    #[test]
    fn test_ensure_import_uses_original_for_presence() {
        let original = "package main\nimport \"time\"\n";
        let rewritten = "package main\nimport \"fmt\"\n";
        assert_eq!(
            ensure_import(&GoImportScanner, original, rewritten, "time").unwrap(),
            None
        );
    }

    #[test]
    fn test_ensure_import_locates_point_in_rewritten_text() {
        let original = "// beego.AppName\npackage main\n\nimport (\n\t\"fmt\"\n)\n";
        let rewritten = "// beego.BConfig.AppName\npackage main\n\nimport (\n\t\"fmt\"\n)\n";
        let out = ensure_import(&GoImportScanner, original, rewritten, "time")
            .unwrap()
            .unwrap();
        assert_eq!(
            out,
            "// beego.BConfig.AppName\npackage main\n\nimport (\n\t\"time\"\n\t\"fmt\"\n)\n"
        );
    }
}
