//! Whole-image decoding at decreasing scales.

use image::imageops::{self, FilterType};
use image::DynamicImage;

use super::Strategy;
use crate::decode::DecodeOptions;
use crate::engine::Engine;
use crate::error::GoudaError;
use crate::imaging::as_grey;
use crate::ir::{Barcode, DecodeOutcome};

/// Runs the engine over the whole greyscale image, then over downscaled
/// copies, stopping at the first scale that yields barcodes.
#[derive(Clone, Debug)]
pub struct Resize {
    scales: Vec<f32>,
    min_side: u32,
}

impl Resize {
    /// Scales are tried in order; a scale whose shorter side would be below
    /// `min_side` pixels ends the search.
    pub fn new(scales: Vec<f32>, min_side: u32) -> Self {
        Self { scales, min_side }
    }
}

impl Default for Resize {
    fn default() -> Self {
        Self::new(vec![1.0, 0.5, 0.25], 64)
    }
}

impl Strategy for Resize {
    fn name(&self) -> &str {
        "resize"
    }

    fn apply(
        &self,
        image: &DynamicImage,
        engine: &dyn Engine,
        options: &DecodeOptions,
    ) -> Result<Option<DecodeOutcome>, GoudaError> {
        let grey = as_grey(image);
        let (width, height) = grey.dimensions();

        for &scale in &self.scales {
            let scaled_width = (width as f32 * scale).round() as u32;
            let scaled_height = (height as f32 * scale).round() as u32;
            if scaled_width.min(scaled_height) < self.min_side {
                break;
            }

            if options.debug {
                tracing::debug!(scale, scaled_width, scaled_height, "resize");
            }
            let symbols = if (scaled_width, scaled_height) == (width, height) {
                engine.decode(&grey)?
            } else {
                let scaled = imageops::resize(
                    &*grey,
                    scaled_width,
                    scaled_height,
                    FilterType::Triangle,
                );
                engine.decode(&scaled)?
            };

            if !symbols.is_empty() {
                let barcodes = symbols
                    .into_iter()
                    .map(|s| Barcode::new(s.symbol_type, s.data))
                    .collect();
                return Ok(Some(DecodeOutcome::found(self.name(), barcodes)));
            }
        }

        Ok(None)
    }
}
