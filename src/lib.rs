//! Batch driver that rewrites the `<style>` blocks of HTML files in place.
//!
//! Each target file is read whole, every non-blank `<style>` block is expanded
//! from nested CSS to flat CSS with [`nestcss`], and the file is written back
//! to the same path. Failures are logged and contained: a block that cannot be
//! expanded keeps its original text, and a file that cannot be read or written
//! does not stop the rest of the batch.

pub mod config;
pub mod error;
pub mod log_init;

use std::fs;
use std::path::Path;

pub use config::Config;
pub use error::{ExpandError, Result};

/// What happened to a single file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FileReport {
    /// Style blocks replaced with flat CSS.
    pub expanded_blocks: usize,
    /// Style blocks left untouched because they could not be expanded.
    pub failed_blocks: usize,
}

/// Totals for a whole batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub files_rewritten: usize,
    pub files_failed: usize,
    pub blocks_failed: usize,
}

/// Rewrites the style blocks of one file in place.
///
/// The file is always written back, even when no block changed.
pub fn process_file(path: &Path) -> Result<FileReport> {
    let bytes = fs::read(path).map_err(|source| ExpandError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|source| ExpandError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let substitution = nestcss::substitute_style_blocks(&content);
    for failure in &substitution.failures {
        log::error!("error parsing CSS in {}: {}", path.display(), failure.error);
    }

    fs::write(path, &substitution.output).map_err(|source| ExpandError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(FileReport {
        expanded_blocks: substitution.expanded,
        failed_blocks: substitution.failures.len(),
    })
}

/// Processes every configured target, in order, logging per-file failures.
pub fn run(config: &Config) -> BatchSummary {
    let mut summary = BatchSummary::default();

    if config.targets.is_empty() {
        log::warn!("no target files found. usage: expand-css [FILE...]");
        return summary;
    }

    log::info!("found {} file(s) to process", config.targets.len());
    for target in &config.targets {
        log::info!("Processing {}...", target.display());
        match process_file(target) {
            Ok(report) => {
                log::debug!(
                    "{}: {} block(s) expanded, {} left as is",
                    target.display(),
                    report.expanded_blocks,
                    report.failed_blocks
                );
                summary.files_rewritten += 1;
                summary.blocks_failed += report.failed_blocks;
            }
            Err(e) => {
                log::error!("failed to process {}: {}", target.display(), e);
                summary.files_failed += 1;
            }
        }
    }

    log::info!(
        "done: {} file(s) rewritten, {} failed, {} style block(s) left unexpanded",
        summary.files_rewritten,
        summary.files_failed,
        summary.blocks_failed
    );
    summary
}
