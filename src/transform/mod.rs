//! Per-file transformation pipeline
//!
//! ```text
//! read -> literal rules -> pattern passes -> [import augment] -> dispatch -> persist
//! ```
//!
//! Every stage consumes the full output of the previous one. The import
//! stage only runs when the cache-put pass fired on a compilable source
//! file. Failures are reported per file and never stop other files from
//! being processed.

pub mod persist;

use crate::config::FixConfig;
use crate::error::{FixError, Result};
use crate::report::{FileOutcome, FileStatus};
use crate::rewrite::{dispatch, ensure_import, literal, pattern};
use crate::rewrite::{FileKind, GoImportScanner, ImportScanner, PassKind};
use crate::rules::{SOURCE_FOLLOW_UP_RULES, SOURCE_RULES};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Import required by the rewritten cache-put calls
pub const DURATION_IMPORT: &str = "time";

/// Working state for one file, discarded after write-back
#[derive(Debug, Clone)]
pub struct FileContext {
    pub path: PathBuf,
    pub base_name: String,
    pub extension: Option<String>,
    pub kind: FileKind,
    /// Content as read from disk
    pub raw_content: String,
    pub working_content: String,
    pub matched_cache_rule: bool,
    pub passes: Vec<PassKind>,
    pub import_added: bool,
}

impl FileContext {
    pub fn new(path: &Path, raw_content: String, config: &FixConfig) -> Self {
        let base_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned());
        let kind = FileKind::classify(extension.as_deref(), config);

        Self {
            path: path.to_path_buf(),
            base_name,
            extension,
            kind,
            working_content: raw_content.clone(),
            raw_content,
            matched_cache_rule: false,
            passes: Vec::new(),
            import_added: false,
        }
    }

    pub fn changed(&self) -> bool {
        self.working_content != self.raw_content
    }

    fn outcome(&self, status: FileStatus) -> FileOutcome {
        FileOutcome {
            path: self.path.clone(),
            status,
            kind: Some(self.kind),
            passes: self.passes.clone(),
            import_added: self.import_added,
        }
    }
}

pub struct FileTransformer {
    config: FixConfig,
    scanner: Box<dyn ImportScanner>,
    dry_run: bool,
}

impl FileTransformer {
    pub fn new(config: FixConfig) -> Self {
        Self::with_scanner(config, Box::new(GoImportScanner))
    }

    pub fn with_scanner(config: FixConfig, scanner: Box<dyn ImportScanner>) -> Self {
        Self {
            config,
            scanner,
            dry_run: false,
        }
    }

    /// Compute outcomes without writing anything
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn config(&self) -> &FixConfig {
        &self.config
    }

    /// Run the rewrite stages over `raw` without touching the filesystem.
    pub fn transform(&self, path: &Path, raw: String) -> Result<FileContext> {
        let mut ctx = FileContext::new(path, raw, &self.config);
        trace!("Transforming {} as {:?}", ctx.path.display(), ctx.kind);

        let renamed =
            literal::apply_all(&[SOURCE_RULES, SOURCE_FOLLOW_UP_RULES], &ctx.working_content)
                .into_owned();
        ctx.working_content = renamed;

        let source_file = ctx.kind == FileKind::Source;
        let rewritten = pattern::rewrite(&ctx.working_content, source_file);
        ctx.matched_cache_rule = rewritten.cache_put_matched();
        ctx.passes = rewritten.fired;
        ctx.working_content = rewritten.text;

        if ctx.matched_cache_rule {
            self.augment_imports(&mut ctx)?;
        }

        let dispatched =
            dispatch::dispatch(&ctx.working_content, &ctx.base_name, ctx.kind).into_owned();
        ctx.working_content = dispatched;

        Ok(ctx)
    }

    fn augment_imports(&self, ctx: &mut FileContext) -> Result<()> {
        let added = ensure_import(
            self.scanner.as_ref(),
            &ctx.raw_content,
            &ctx.working_content,
            DURATION_IMPORT,
        )
        .map_err(|source| FixError::ImportScan {
            path: ctx.path.clone(),
            source,
        })?;

        if let Some(text) = added {
            debug!("Added {DURATION_IMPORT:?} import to {}", ctx.path.display());
            ctx.working_content = text;
            ctx.import_added = true;
        }
        Ok(())
    }

    /// Read, transform and write back one file.
    ///
    /// Errors are folded into the returned outcome.
    pub fn fix_file(&self, path: &Path) -> FileOutcome {
        match self.try_fix_file(path) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Could not fix file: {e}");
                FileOutcome::failed(path, e)
            }
        }
    }

    fn try_fix_file(&self, path: &Path) -> Result<FileOutcome> {
        let bytes = fs::read(path).map_err(|source| FixError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let raw = match String::from_utf8(bytes) {
            Ok(raw) => raw,
            Err(_) => {
                debug!("Skipping {}: not valid UTF-8", path.display());
                return Ok(FileOutcome::skipped(path, "not valid UTF-8"));
            }
        };

        let ctx = self.transform(path, raw)?;
        if !ctx.changed() {
            return Ok(ctx.outcome(FileStatus::Unchanged));
        }

        if !self.dry_run {
            if self.config.backup {
                persist::backup(path)?;
            }
            persist::write_atomic(path, ctx.working_content.as_bytes())?;
            debug!("Rewrote {} ({:?})", path.display(), ctx.passes);
        }
        Ok(ctx.outcome(FileStatus::Rewritten))
    }
}
