//! Decodes barcodes within rectangular regions of an image.

use image::imageops;
use image::DynamicImage;

use crate::engine::Engine;
use crate::error::GoudaError;
use crate::imaging::{as_grey, contrast_remap, unsharp_mask};
use crate::ir::{Barcode, Rect};

/// Decodes each candidate region of an image, sharpening every crop and
/// falling back to a contrast remap when the sharpened crop yields nothing.
///
/// Barcodes are computed on the first call to [`barcodes`](Self::barcodes)
/// and cached for the lifetime of the decoder.
pub struct RegionDecoder<'a> {
    image: &'a DynamicImage,
    candidates: Vec<Rect>,
    engine: &'a dyn Engine,
    debug: bool,
    barcodes: Option<Vec<Barcode>>,
}

impl<'a> RegionDecoder<'a> {
    pub fn new(
        image: &'a DynamicImage,
        candidates: Vec<Rect>,
        engine: &'a dyn Engine,
        debug: bool,
    ) -> Self {
        Self {
            image,
            candidates,
            engine,
            debug,
            barcodes: None,
        }
    }

    /// Barcodes in candidate order, and within a candidate in engine order.
    ///
    /// # Errors
    /// Returns the engine's error. A failed computation is not cached.
    pub fn barcodes(&mut self) -> Result<&[Barcode], GoudaError> {
        if self.barcodes.is_none() {
            self.barcodes = Some(self.compute()?);
        }
        Ok(self.barcodes.as_deref().unwrap_or_default())
    }

    fn compute(&self) -> Result<Vec<Barcode>, GoudaError> {
        if self.debug && !matches!(self.image, DynamicImage::ImageLuma8(_)) {
            tracing::debug!("convert grey");
        }
        let grey = as_grey(self.image);

        let mut found = Vec::new();
        for rect in &self.candidates {
            if rect.width() == 0 || rect.height() == 0 {
                if self.debug {
                    tracing::debug!(?rect, "skipping empty candidate");
                }
                continue;
            }

            let crop = imageops::crop_imm(
                &*grey,
                rect.left,
                rect.top,
                rect.width(),
                rect.height(),
            )
            .to_image();

            let sharpened = unsharp_mask(&crop);
            let mut symbols = self.engine.decode(&sharpened)?;
            if symbols.is_empty() {
                if self.debug {
                    tracing::debug!(?rect, "applying contrast to candidate crop");
                }
                symbols = self.engine.decode(&contrast_remap(&sharpened))?;
            }

            found.extend(
                symbols
                    .into_iter()
                    .map(|s| Barcode::new(s.symbol_type, s.data)),
            );
        }

        Ok(found)
    }
}
