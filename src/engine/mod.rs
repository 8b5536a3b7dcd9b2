//! Barcode decoding engines.
//!
//! An engine turns a greyscale pixel buffer into zero or more decoded
//! symbols. Returning no symbols means "nothing found here" and is never an
//! error; `Err` is reserved for failures of the engine itself.

#[cfg(feature = "rqrr")]
mod qr;

use std::collections::BTreeMap;

use image::GrayImage;

use crate::error::GoudaError;

#[cfg(feature = "rqrr")]
pub use qr::RqrrEngine;

/// A symbol returned by an engine, before it becomes a [`Barcode`](crate::ir::Barcode).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedSymbol {
    pub symbol_type: String,
    pub data: Vec<u8>,
}

impl DecodedSymbol {
    pub fn new(symbol_type: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            symbol_type: symbol_type.into(),
            data: data.into(),
        }
    }
}

/// A pluggable barcode decoder.
pub trait Engine {
    /// Short name used on the command line and in reports.
    fn name(&self) -> &str;

    /// Decode every symbol found in `image`, in the engine's detection order.
    fn decode(&self, image: &GrayImage) -> Result<Vec<DecodedSymbol>, GoudaError>;
}

/// Constructor for an engine compiled into this build.
pub type EngineFactory = fn() -> Box<dyn Engine>;

/// Engines available in this build, keyed by name.
///
/// The map is empty when every engine feature is disabled.
pub fn available_engines() -> BTreeMap<&'static str, EngineFactory> {
    #[allow(unused_mut)]
    let mut engines: BTreeMap<&'static str, EngineFactory> = BTreeMap::new();
    #[cfg(feature = "rqrr")]
    engines.insert(qr::NAME, qr::create);
    engines
}

/// Construct the engine called `name`.
///
/// # Errors
/// Returns [`GoudaError::NoEngines`] if no engine is compiled in, or
/// [`GoudaError::UnknownEngine`] if `name` is not one of them.
pub fn create_engine(name: &str) -> Result<Box<dyn Engine>, GoudaError> {
    let engines = available_engines();
    if engines.is_empty() {
        return Err(GoudaError::NoEngines);
    }
    match engines.get(name) {
        Some(factory) => Ok(factory()),
        None => Err(GoudaError::UnknownEngine(format!(
            "'{}' (available: {})",
            name,
            engines.keys().copied().collect::<Vec<_>>().join(", ")
        ))),
    }
}
