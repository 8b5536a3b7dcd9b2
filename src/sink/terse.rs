use std::io::Write;
use std::path::Path;

use super::Sink;
use crate::error::GoudaError;
use crate::ir::DecodeOutcome;

/// Writes one line per file: the path followed by each payload in brackets.
pub struct TerseReport<W> {
    out: W,
}

impl<W: Write> TerseReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Sink for TerseReport<W> {
    fn result(&mut self, path: &Path, outcome: &DecodeOutcome) -> Result<(), GoudaError> {
        write!(self.out, "{}", path.display())?;
        for barcode in outcome.barcodes() {
            write!(self.out, " [{}]", barcode.text())?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}
