use std::io::Write;
use std::path::Path;

use super::Sink;
use crate::error::GoudaError;
use crate::ir::DecodeOutcome;

/// Writes a line per file and a line per barcode.
///
/// ```text
/// scans/a.png
/// Found [1] barcodes:
/// [0] [QRCODE] [hello]
/// ```
pub struct BasicReport<W> {
    out: W,
}

impl<W: Write> BasicReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Sink for BasicReport<W> {
    fn result(&mut self, path: &Path, outcome: &DecodeOutcome) -> Result<(), GoudaError> {
        writeln!(self.out, "{}", path.display())?;
        writeln!(self.out, "Found [{}] barcodes:", outcome.barcodes().len())?;
        for (index, barcode) in outcome.barcodes().iter().enumerate() {
            writeln!(
                self.out,
                "[{}] [{}] [{}]",
                index,
                barcode.symbol_type(),
                barcode.text()
            )?;
        }
        Ok(())
    }
}
