//! Output sinks: consumers of per-file decode outcomes.
//!
//! Every processed file is passed to every registered sink, in registration
//! order, including files with no barcodes. Sinks report or act; the driver
//! ignores everything but errors, which it logs as failures of that file.

mod basic;
mod csv_report;
mod rename;
mod terse;

use std::path::Path;

use crate::error::GoudaError;
use crate::ir::DecodeOutcome;

pub use basic::BasicReport;
pub use csv_report::{CsvReport, CSV_HEADER};
pub use rename::{sanitize, Rename};
pub use terse::TerseReport;

/// A consumer of `(path, outcome)` pairs.
pub trait Sink {
    fn result(&mut self, path: &Path, outcome: &DecodeOutcome) -> Result<(), GoudaError>;
}
