#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use gouda::decode::DecodeOptions;
use gouda::engine::{DecodedSymbol, Engine};
use gouda::ir::{Barcode, DecodeOutcome};
use gouda::sink::Sink;
use gouda::strategy::Strategy;
use gouda::GoudaError;
use image::{DynamicImage, GenericImageView, GrayImage};

/// A 24-bit uncompressed BMP of the given size, all black.
pub fn bmp_bytes(width: u32, height: u32) -> Vec<u8> {
    let row_stride = (width * 3).div_ceil(4) * 4;
    let pixel_array_size = row_stride * height;
    let file_size = 54 + pixel_array_size;

    let mut bytes = Vec::with_capacity(file_size as usize);
    bytes.extend_from_slice(b"BM");
    bytes.extend_from_slice(&file_size.to_le_bytes());
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    bytes.extend_from_slice(&54u32.to_le_bytes());

    bytes.extend_from_slice(&40u32.to_le_bytes());
    bytes.extend_from_slice(&(width as i32).to_le_bytes());
    bytes.extend_from_slice(&(height as i32).to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&24u16.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&pixel_array_size.to_le_bytes());
    bytes.extend_from_slice(&2835u32.to_le_bytes());
    bytes.extend_from_slice(&2835u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());

    bytes.resize(file_size as usize, 0);
    bytes
}

pub fn write_bmp(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, bmp_bytes(width, height)).expect("write bmp file");
}

pub fn write_text(path: &Path, text: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, text).expect("write text file");
}

/// Engine that never finds anything.
pub struct NullEngine;

impl Engine for NullEngine {
    fn name(&self) -> &str {
        "null"
    }

    fn decode(&self, _image: &GrayImage) -> Result<Vec<DecodedSymbol>, GoudaError> {
        Ok(Vec::new())
    }
}

/// Engine that reports every buffer's size as a symbol.
pub struct SizeEngine;

impl Engine for SizeEngine {
    fn name(&self) -> &str {
        "size"
    }

    fn decode(&self, image: &GrayImage) -> Result<Vec<DecodedSymbol>, GoudaError> {
        let (width, height) = image.dimensions();
        Ok(vec![DecodedSymbol::new("SIZE", format!("{}x{}", width, height))])
    }
}

/// Strategy that reports the image width as a barcode, fails for images
/// `fail_width` pixels wide and declines for images `decline_width` wide.
pub struct WidthStrategy {
    pub fail_width: u32,
    pub decline_width: u32,
    pub calls: Rc<RefCell<usize>>,
}

impl WidthStrategy {
    pub fn new() -> Self {
        Self {
            fail_width: u32::MAX,
            decline_width: u32::MAX,
            calls: Rc::new(RefCell::new(0)),
        }
    }
}

impl Strategy for WidthStrategy {
    fn name(&self) -> &str {
        "width"
    }

    fn apply(
        &self,
        image: &DynamicImage,
        _engine: &dyn Engine,
        _options: &DecodeOptions,
    ) -> Result<Option<DecodeOutcome>, GoudaError> {
        *self.calls.borrow_mut() += 1;
        let width = image.dimensions().0;
        if width == self.fail_width {
            return Err(GoudaError::Engine(format!("cannot decode width {}", width)));
        }
        if width == self.decline_width {
            return Ok(None);
        }
        Ok(Some(DecodeOutcome::found(
            self.name(),
            vec![Barcode::new("WIDTH", width.to_string())],
        )))
    }
}

/// Sink that records every call.
#[derive(Default)]
pub struct RecordingSink {
    pub calls: Vec<(PathBuf, DecodeOutcome)>,
}

impl RecordingSink {
    /// Recorded paths relative to `root`, with `/` separators.
    pub fn relative_paths(&self, root: &Path) -> Vec<String> {
        self.calls
            .iter()
            .map(|(path, _)| {
                path.strip_prefix(root)
                    .expect("path under root")
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join("/")
            })
            .collect()
    }
}

impl Sink for RecordingSink {
    fn result(&mut self, path: &Path, outcome: &DecodeOutcome) -> Result<(), GoudaError> {
        self.calls.push((path.to_path_buf(), outcome.clone()));
        Ok(())
    }
}
