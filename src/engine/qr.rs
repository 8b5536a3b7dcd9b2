//! QR code engine backed by `rqrr`.

use image::GrayImage;
use rqrr::{BitGrid, Grid, PreparedImage};

use super::{DecodedSymbol, Engine};
use crate::error::GoudaError;

pub(super) const NAME: &str = "rqrr";

const SYMBOL_TYPE: &str = "QRCODE";

pub(super) fn create() -> Box<dyn Engine> {
    Box::new(RqrrEngine::new())
}

/// Decodes QR codes. Grids that are detected but fail to decode are skipped.
#[derive(Debug, Default)]
pub struct RqrrEngine;

impl RqrrEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RqrrEngine {
    fn name(&self) -> &str {
        NAME
    }

    fn decode(&self, image: &GrayImage) -> Result<Vec<DecodedSymbol>, GoudaError> {
        let (width, height) = image.dimensions();
        let mut prepared =
            PreparedImage::prepare_from_greyscale(width as usize, height as usize, |x, y| {
                image.get_pixel(x as u32, y as u32)[0]
            });

        let symbols = prepared
            .detect_grids()
            .into_iter()
            .filter_map(|grid| decode_grid(&grid))
            .collect();
        Ok(symbols)
    }
}

/// Payloads are kept as raw bytes; byte-mode QR codes need not hold UTF-8.
fn decode_grid<G: BitGrid>(grid: &Grid<G>) -> Option<DecodedSymbol> {
    let mut data = Vec::new();
    grid.decode_to(&mut data).ok()?;
    Some(DecodedSymbol::new(SYMBOL_TYPE, data))
}
