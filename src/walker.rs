//! Directory traversal
//!
//! Visits every regular file under a root, one at a time and in file-name
//! order. Dot-directories are not descended into, dotfiles and files with a
//! skipped suffix are left alone, and symlinks are not followed.

use crate::error::FixError;
use crate::report::{FileOutcome, FileStatus, FixReport};
use crate::transform::persist::BACKUP_SUFFIX;
use crate::transform::FileTransformer;
use std::path::Path;
use tracing::{debug, error, warn};
use walkdir::{DirEntry, WalkDir};

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

/// Fix every eligible file under `root`.
///
/// `on_file` is called once for every file handed to the pipeline, right
/// after it has been processed. The walk always runs to completion; errors
/// end up in the report.
pub fn fix_tree<F>(root: &Path, transformer: &FileTransformer, mut on_file: F) -> FixReport
where
    F: FnMut(&FileOutcome),
{
    let config = transformer.config();
    let mut report = FixReport::new(root, transformer.is_dry_run());

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !(config.skip_hidden && e.depth() > 0 && is_hidden(e)));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                let e = FixError::from(e);
                error!("Could not visit {}: {e}", path.display());
                report.push(FileOutcome::failed(path, e));
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let name = entry.file_name().to_string_lossy();
        if config.is_skipped_name(&name) {
            debug!("Skipping {}", path.display());
            report.push(FileOutcome::skipped(path, "skipped suffix"));
            continue;
        }
        if config.backup && name.ends_with(BACKUP_SUFFIX) {
            debug!("Skipping backup {}", path.display());
            report.push(FileOutcome::skipped(path, "backup file"));
            continue;
        }

        let outcome = transformer.fix_file(path);
        if let FileStatus::Skipped { reason } = &outcome.status {
            warn!("Skipped {}: {reason}", path.display());
        }
        on_file(&outcome);
        report.push(outcome);
    }

    report
}
