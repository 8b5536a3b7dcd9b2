//! CSV report sink.
//!
//! One header row is written when the sink is created, then one row per
//! processed file. Column order and header text are a stable contract.

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use super::Sink;
use crate::error::GoudaError;
use crate::ir::DecodeOutcome;

/// Header row, in column order.
pub const CSV_HEADER: [&str; 10] = [
    "OS",
    "Engine",
    "Directory",
    "File",
    "Image.conversion",
    "Elapsed",
    "N.found",
    "Types",
    "Values",
    "Strategy",
];

const GREYSCALE_LABEL: &str = "Greyscale";
const UNCHANGED_LABEL: &str = "Unchanged";

/// A single data row. Field order must match [`CSV_HEADER`].
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    os: &'a str,
    engine: &'a str,
    directory: String,
    file: String,
    image_conversion: &'a str,
    elapsed: f64,
    n_found: usize,
    types: String,
    values: String,
    strategy: &'a str,
}

/// Writes a CSV row per file, timing each row from sink construction.
pub struct CsvReport<W: Write> {
    writer: csv::Writer<W>,
    engine: String,
    image_conversion: &'static str,
    started: Instant,
}

impl<W: Write> CsvReport<W> {
    /// Creates the sink and writes the header row.
    ///
    /// `greyscale` selects the label written in the `Image.conversion` column.
    pub fn new(engine: impl Into<String>, greyscale: bool, out: W) -> Result<Self, GoudaError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(out);
        writer.write_record(CSV_HEADER)?;
        writer.flush()?;

        Ok(Self {
            writer,
            engine: engine.into(),
            image_conversion: if greyscale {
                GREYSCALE_LABEL
            } else {
                UNCHANGED_LABEL
            },
            started: Instant::now(),
        })
    }
}

fn name_of(path: Option<&Path>) -> String {
    path.and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl<W: Write> Sink for CsvReport<W> {
    fn result(&mut self, path: &Path, outcome: &DecodeOutcome) -> Result<(), GoudaError> {
        let barcodes = outcome.barcodes();
        let row = ReportRow {
            os: std::env::consts::OS,
            engine: &self.engine,
            directory: name_of(path.parent()),
            file: name_of(Some(path)),
            image_conversion: self.image_conversion,
            elapsed: self.started.elapsed().as_secs_f64(),
            n_found: barcodes.len(),
            types: barcodes
                .iter()
                .map(|b| b.symbol_type())
                .collect::<Vec<_>>()
                .join("|"),
            values: barcodes
                .iter()
                .map(|b| b.text())
                .collect::<Vec<_>>()
                .join("|"),
            strategy: outcome.strategy().unwrap_or(""),
        };

        self.writer.serialize(row)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Barcode;

    fn rows(buf: &[u8]) -> Vec<csv::StringRecord> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(buf)
            .records()
            .collect::<Result<_, _>>()
            .expect("parse csv")
    }

    #[test]
    fn header_is_written_on_construction() {
        let mut buf = Vec::new();
        drop(CsvReport::new("rqrr", false, &mut buf).expect("create sink"));

        let rows = rows(&buf);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), CSV_HEADER.to_vec());
    }

    #[test]
    fn row_fields_in_order() {
        let mut buf = Vec::new();
        {
            let mut sink = CsvReport::new("rqrr", false, &mut buf).expect("create sink");
            let outcome = DecodeOutcome::found(
                "roi",
                vec![
                    Barcode::new("QRCODE", b"one".to_vec()),
                    Barcode::new("CODE128", b"two".to_vec()),
                ],
            );
            sink.result(Path::new("scans/batch1/img.png"), &outcome)
                .expect("write row");
        }

        let rows = rows(&buf);
        let row = &rows[1];
        assert_eq!(&row[0], std::env::consts::OS);
        assert_eq!(&row[1], "rqrr");
        assert_eq!(&row[2], "batch1");
        assert_eq!(&row[3], "img.png");
        assert_eq!(&row[4], "Unchanged");
        assert!(row[5].parse::<f64>().expect("elapsed") >= 0.0);
        assert_eq!(&row[6], "2");
        assert_eq!(&row[7], "QRCODE|CODE128");
        assert_eq!(&row[8], "one|two");
        assert_eq!(&row[9], "roi");
    }

    #[test]
    fn greyscale_label_on_every_row() {
        let mut buf = Vec::new();
        {
            let mut sink = CsvReport::new("rqrr", true, &mut buf).expect("create sink");
            sink.result(Path::new("a.png"), &DecodeOutcome::none())
                .expect("write row");
            let outcome = DecodeOutcome::found("resize", vec![Barcode::new("QRCODE", b"x".to_vec())]);
            sink.result(Path::new("b.png"), &outcome).expect("write row");
        }

        let rows = rows(&buf);
        assert_eq!(rows.len(), 3);
        assert!(rows[1..].iter().all(|row| &row[4] == "Greyscale"));
        assert_eq!(&rows[1][9], "");
        assert_eq!(&rows[1][6], "0");
    }

    #[test]
    fn elapsed_is_monotonic() {
        let mut buf = Vec::new();
        {
            let mut sink = CsvReport::new("rqrr", false, &mut buf).expect("create sink");
            for name in ["a.png", "b.png", "c.png"] {
                sink.result(Path::new(name), &DecodeOutcome::none())
                    .expect("write row");
            }
        }

        let elapsed: Vec<f64> = rows(&buf)[1..]
            .iter()
            .map(|row| row[5].parse().expect("elapsed"))
            .collect();
        assert!(elapsed.windows(2).all(|w| w[0] <= w[1]));
    }
}
