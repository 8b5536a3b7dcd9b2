//! Gouda: finds and decodes barcodes in trees of images.
//!
//! Each file is loaded, passed through an ordered chain of detection
//! strategies until one of them finds barcodes, and the outcome is handed to
//! every registered output sink.
//!
//! # Modules
//!
//! - [`ir`]: Value types (Barcode, Rect, DecodeOutcome)
//! - [`engine`]: The decoding engine trait and the engines compiled in
//! - [`imaging`]: Image loading and crop enhancement
//! - [`strategy`]: Detection strategies and the strategy chain
//! - [`decode`]: The traversal driver
//! - [`sink`]: Output sinks (reports and renaming)
//! - [`error`]: Error types for gouda operations

pub mod decode;
pub mod engine;
pub mod error;
pub mod imaging;
pub mod ir;
pub mod logging;
pub mod sink;
pub mod strategy;

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub use error::GoudaError;

use decode::DecodeOptions;
use sink::{BasicReport, CsvReport, Rename, Sink, TerseReport};

/// The gouda CLI application.
#[derive(Parser)]
#[command(name = "gouda")]
#[command(version, about)]
struct Cli {
    /// Log each decoding step.
    #[arg(long, short)]
    debug: bool,

    /// What to do with the barcodes found in each file.
    #[arg(long, short, value_enum, default_value_t = Action::Basic, env = "GOUDA_ACTION")]
    action: Action,

    /// Load images as greyscale.
    #[arg(long, short)]
    greyscale: bool,

    /// If the action is "rename", append a suffix to renamed files to prevent collisions.
    #[arg(long)]
    avoid_collisions: bool,

    /// Decoding engine.
    engine: String,

    /// Paths to images or directories.
    #[arg(required = true)]
    image: Vec<PathBuf>,
}

/// Available output actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Action {
    /// A line per file and a line per barcode.
    Basic,
    /// A line per file.
    Terse,
    /// A CSV report.
    Csv,
    /// Rename files after their barcodes.
    Rename,
}

/// Run the gouda CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), GoudaError> {
    let cli = Cli::parse();
    logging::init_logging(cli.debug);

    let engine = engine::create_engine(&cli.engine)?;
    let options = DecodeOptions {
        greyscale: cli.greyscale,
        debug: cli.debug,
    };

    let mut sink: Box<dyn Sink> = match cli.action {
        Action::Basic => Box::new(BasicReport::new(io::stdout())),
        Action::Terse => Box::new(TerseReport::new(io::stdout())),
        Action::Csv => Box::new(CsvReport::new(engine.name(), cli.greyscale, io::stdout())?),
        Action::Rename => Box::new(Rename::new(cli.avoid_collisions, io::stdout())),
    };

    let sink: &mut dyn Sink = sink.as_mut();

    let strategies = strategy::default_strategies();
    let summary = decode::decode(&cli.image, &strategies, engine.as_ref(), &mut [sink], &options);
    tracing::debug!(
        processed = summary.processed,
        failed = summary.failed,
        "Finished"
    );

    Ok(())
}
