//! Runs the walk, sequencing and copy steps for every source directory.

use crate::error::CollectError;
use crate::scanner;
use crate::sequence;
use crate::summary::Summary;
use crate::transfer;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Options {
    /// Processed in this order.
    pub sources: Vec<PathBuf>,
    pub dest: PathBuf,
    pub dry_run: bool,
}

/// A fatal error together with what was accumulated before it.
#[derive(Debug, Error)]
#[error("{cause}")]
pub struct Aborted {
    pub summary: Summary,
    #[source]
    pub cause: CollectError,
}

/// Run without any visible progress output.
pub fn run(options: &Options) -> Result<Summary, Aborted> {
    run_with_progress(options, &ProgressBar::hidden())
}

/// Run, reporting per-file progress on `pb`.
///
/// The destination directory is created up front, in dry-run mode too.
/// Sequence counters start over for each source directory.
pub fn run_with_progress(options: &Options, pb: &ProgressBar) -> Result<Summary, Aborted> {
    let mut summary = Summary::new();

    if let Err(cause) = fs::create_dir_all(&options.dest) {
        return Err(Aborted {
            summary,
            cause: CollectError::CreateDest {
                path: options.dest.clone(),
                cause,
            },
        });
    }

    for source in &options.sources {
        log::info!("scanning {}", source.display());
        let files = match scanner::scan_images(source) {
            Ok(files) => files,
            Err(cause) => return Err(Aborted { summary, cause }),
        };

        let plan = sequence::plan(files);
        pb.set_length(plan.len() as u64);
        pb.set_position(0);
        pb.set_prefix(source.display().to_string());

        transfer::execute(&plan, &options.dest, options.dry_run, &mut summary, pb);
    }

    pb.finish_and_clear();
    Ok(summary)
}

/// Style for the per-source progress bar shown by the CLI.
pub fn progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{prefix} {pos}/{len} {wide_bar} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
}
