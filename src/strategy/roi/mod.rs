//! Region-of-interest strategy: generate candidate rectangles, then decode
//! each with the [`RegionDecoder`].

pub mod decode;

use image::{DynamicImage, GenericImageView};

use super::Strategy;
use crate::decode::DecodeOptions;
use crate::engine::Engine;
use crate::error::GoudaError;
use crate::ir::{DecodeOutcome, Rect};

pub use decode::RegionDecoder;

/// Produces candidate rectangles for an image.
///
/// Implementations must only return rectangles that lie within the image.
pub trait CandidateSource {
    fn candidates(&self, image: &DynamicImage) -> Vec<Rect>;
}

/// Overlapping tiles covering the image.
///
/// The image is divided into `divisions + 1` steps along each axis and each
/// tile spans two steps, so neighbouring tiles overlap by half. Images too
/// small to divide yield a single candidate covering the whole image.
#[derive(Clone, Copy, Debug)]
pub struct TiledCandidates {
    divisions: u32,
}

impl TiledCandidates {
    pub fn new(divisions: u32) -> Self {
        Self {
            divisions: divisions.max(1),
        }
    }
}

impl Default for TiledCandidates {
    fn default() -> Self {
        Self::new(3)
    }
}

impl CandidateSource for TiledCandidates {
    fn candidates(&self, image: &DynamicImage) -> Vec<Rect> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Vec::new();
        }

        let step_x = width / (self.divisions + 1);
        let step_y = height / (self.divisions + 1);
        if step_x == 0 || step_y == 0 {
            return vec![Rect::new(0, 0, width, height)];
        }

        let mut rects = Vec::with_capacity((self.divisions * self.divisions) as usize);
        for row in 0..self.divisions {
            for col in 0..self.divisions {
                let left = col * step_x;
                let top = row * step_y;
                rects.push(Rect::new(left, top, left + 2 * step_x, top + 2 * step_y));
            }
        }
        rects
    }
}

/// Decodes candidate regions produced by a [`CandidateSource`].
#[derive(Clone, Debug, Default)]
pub struct Roi<C = TiledCandidates> {
    source: C,
}

impl<C: CandidateSource> Roi<C> {
    pub fn new(source: C) -> Self {
        Self { source }
    }
}

impl<C: CandidateSource> Strategy for Roi<C> {
    fn name(&self) -> &str {
        "roi"
    }

    fn apply(
        &self,
        image: &DynamicImage,
        engine: &dyn Engine,
        options: &DecodeOptions,
    ) -> Result<Option<DecodeOutcome>, GoudaError> {
        let candidates = self.source.candidates(image);
        if options.debug {
            tracing::debug!(count = candidates.len(), "roi candidates");
        }

        let mut decoder = RegionDecoder::new(image, candidates, engine, options.debug);
        let barcodes = decoder.barcodes()?.to_vec();
        Ok(Some(DecodeOutcome::found(self.name(), barcodes)))
    }
}
