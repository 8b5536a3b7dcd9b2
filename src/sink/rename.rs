//! Renames files after the barcodes found in them.
//!
//! The first barcode names the file itself; each further barcode gets a copy
//! of the renamed file. With collision avoidance enabled, a destination that
//! already exists gets a `-<n>` suffix before the extension, where `n` counts
//! up per destination name for the lifetime of the sink. Without it, a taken
//! destination is reported and skipped.

use std::collections::HashMap;
use std::fs::{self, FileTimes, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::Sink;
use crate::error::GoudaError;
use crate::ir::DecodeOutcome;

/// Replaces every character outside `[A-Za-z0-9_-]` with `_`.
///
/// # Example
/// ```
/// assert_eq!(gouda::sink::sanitize("He@llo!"), "He_llo_");
/// ```
pub fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Copies `from` to `to`, carrying over permissions and file times.
fn copy_with_metadata(from: &Path, to: &Path) -> io::Result<()> {
    fs::copy(from, to)?;
    let metadata = fs::metadata(from)?;
    let mut times = FileTimes::new().set_modified(metadata.modified()?);
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    OpenOptions::new().write(true).open(to)?.set_times(times)
}

/// Sink that renames (and for extra barcodes, copies) files on disk.
pub struct Rename<W> {
    out: W,
    avoid_collisions: bool,
    // Next suffix per destination file name.
    suffixes: HashMap<String, u32>,
}

impl<W: Write> Rename<W> {
    pub fn new(avoid_collisions: bool, out: W) -> Self {
        Self {
            out,
            avoid_collisions,
            suffixes: HashMap::new(),
        }
    }

    /// Returns `candidate`, or when avoiding collisions the first suffixed
    /// variant of it that does not exist yet.
    fn destination(&mut self, candidate: &Path, stem: &str, extension: &str) -> PathBuf {
        let mut destination = candidate.to_path_buf();
        if !self.avoid_collisions {
            return destination;
        }

        let key = format!("{}{}", stem, extension);
        while destination.exists() {
            let counter = self.suffixes.entry(key.clone()).or_insert(1);
            let suffix = *counter;
            *counter += 1;
            destination = candidate.with_file_name(format!("{}-{}{}", stem, suffix, extension));
        }
        destination
    }
}

impl<W: Write> Sink for Rename<W> {
    fn result(&mut self, path: &Path, outcome: &DecodeOutcome) -> Result<(), GoudaError> {
        writeln!(self.out, "{}", path.display())?;
        if outcome.is_empty() {
            writeln!(self.out, "  No barcodes")?;
            return Ok(());
        }

        let extension = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        // Where the source file lives once the first barcode is handled.
        let mut current: Option<PathBuf> = None;
        for barcode in outcome.barcodes() {
            let stem = sanitize(&barcode.text());
            let candidate = path.with_file_name(format!("{}{}", stem, extension));
            let source = current.as_deref().unwrap_or(path);

            // The first value is compared before suffixing so a file that is
            // already named after it stays put. Later values are suffixed first.
            let destination = if current.is_none() && candidate == source {
                candidate
            } else {
                self.destination(&candidate, &stem, &extension)
            };

            if destination == source {
                writeln!(self.out, "  Already correctly named")?;
            } else if destination.exists() {
                writeln!(
                    self.out,
                    "  Cannot rename to [{}] because destination exists",
                    destination.display()
                )?;
            } else if current.is_none() {
                fs::rename(path, &destination)?;
                writeln!(self.out, "  Renamed to [{}]", destination.display())?;
                current = Some(destination);
                continue;
            } else {
                copy_with_metadata(source, &destination)?;
                writeln!(self.out, "  Copied to [{}]", destination.display())?;
            }

            if current.is_none() {
                current = Some(path.to_path_buf());
            }
        }

        Ok(())
    }
}
