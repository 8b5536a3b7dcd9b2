//! Candidate-detection strategies and the ordered chain that runs them.
//!
//! A strategy either produces a [`DecodeOutcome`] or declines with `None`.
//! The chain tries strategies in order and stops at the first outcome that
//! contains at least one barcode; an outcome with no barcodes counts as a
//! decline even though it names a strategy.

pub mod resize;
pub mod roi;

use image::DynamicImage;

use crate::decode::DecodeOptions;
use crate::engine::Engine;
use crate::error::GoudaError;
use crate::ir::DecodeOutcome;

pub use resize::Resize;
pub use roi::{CandidateSource, Roi, TiledCandidates};

/// A way of finding and decoding barcodes in a whole image.
pub trait Strategy {
    /// Name reported in outcomes, e.g. `roi`.
    fn name(&self) -> &str;

    /// Attempt to decode `image` with `engine`.
    ///
    /// Returns `Ok(None)` to let the next strategy try.
    fn apply(
        &self,
        image: &DynamicImage,
        engine: &dyn Engine,
        options: &DecodeOptions,
    ) -> Result<Option<DecodeOutcome>, GoudaError>;
}

/// The strategies used by the command line, in the order they are tried.
pub fn default_strategies() -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(Resize::default()),
        Box::new(Roi::new(TiledCandidates::default())),
    ]
}

/// Runs `strategies` in order, returning the first non-empty outcome.
///
/// If every strategy declines the result is [`DecodeOutcome::none`].
///
/// # Errors
/// The first strategy error aborts the chain and is returned as-is.
pub fn run_chain(
    strategies: &[Box<dyn Strategy>],
    image: &DynamicImage,
    engine: &dyn Engine,
    options: &DecodeOptions,
) -> Result<DecodeOutcome, GoudaError> {
    for strategy in strategies {
        match strategy.apply(image, engine, options)? {
            Some(outcome) if !outcome.is_empty() => return Ok(outcome),
            _ => {
                if options.debug {
                    tracing::debug!(strategy = strategy.name(), "no barcodes");
                }
            }
        }
    }
    Ok(DecodeOutcome::none())
}
