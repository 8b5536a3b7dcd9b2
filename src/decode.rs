//! Traversal driver: walks input paths, decodes each file and fans the
//! outcome out to every sink.
//!
//! Paths are visited depth-first in sorted order at every level, so repeated
//! runs over the same tree produce identical sink call sequences. A failure
//! while loading, decoding or reporting one file is logged and the walk
//! moves on to the next file.

use std::path::Path;

use walkdir::WalkDir;

use crate::engine::Engine;
use crate::error::GoudaError;
use crate::imaging::read_image;
use crate::ir::DecodeOutcome;
use crate::sink::Sink;
use crate::strategy::{run_chain, Strategy};

/// Options threaded through the driver and strategies.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecodeOptions {
    /// Load every image as 8-bit greyscale.
    pub greyscale: bool,
    /// Log each decoding step.
    pub debug: bool,
}

/// Counts from a finished run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeSummary {
    /// Files whose outcome reached the sinks.
    pub processed: usize,
    /// Files or directory entries that failed and were skipped.
    pub failed: usize,
}

/// Decodes every file under `paths`.
///
/// Each path may be a file or a directory; directories are walked
/// recursively with symlinks followed. Files that are not images produce
/// [`DecodeOutcome::none`] like any image without barcodes.
pub fn decode<P: AsRef<Path>>(
    paths: &[P],
    strategies: &[Box<dyn Strategy>],
    engine: &dyn Engine,
    sinks: &mut [&mut dyn Sink],
    options: &DecodeOptions,
) -> DecodeSummary {
    let mut roots: Vec<&Path> = paths.iter().map(AsRef::as_ref).collect();
    roots.sort();

    let mut summary = DecodeSummary::default();
    for root in roots {
        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    let path = source.path().unwrap_or(root).to_path_buf();
                    report_failure(&path, &GoudaError::Walk { path: path.clone(), source });
                    summary.failed += 1;
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                continue;
            }

            match decode_file(entry.path(), strategies, engine, sinks, options) {
                Ok(()) => summary.processed += 1,
                Err(err) => {
                    report_failure(entry.path(), &err);
                    summary.failed += 1;
                }
            }
        }
    }

    tracing::debug!(
        processed = summary.processed,
        failed = summary.failed,
        "decode finished"
    );
    summary
}

fn decode_file(
    path: &Path,
    strategies: &[Box<dyn Strategy>],
    engine: &dyn Engine,
    sinks: &mut [&mut dyn Sink],
    options: &DecodeOptions,
) -> Result<(), GoudaError> {
    if options.debug {
        tracing::debug!(path = %path.display(), "decoding");
    }

    let outcome = match read_image(path, options.greyscale)? {
        Some(image) => run_chain(strategies, &image, engine, options)?,
        None => DecodeOutcome::none(),
    };

    for sink in sinks.iter_mut() {
        sink.result(path, &outcome)?;
    }
    Ok(())
}

fn report_failure(path: &Path, err: &GoudaError) {
    tracing::error!(
        path = %path.display(),
        error = err as &(dyn std::error::Error + 'static),
        "Error processing file"
    );
}
