//! Decoded barcode values.

use std::borrow::Cow;

/// A single decoded symbol: its symbology name and its raw payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Barcode {
    symbol_type: String,
    payload: Vec<u8>,
}

impl Barcode {
    pub fn new(symbol_type: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            symbol_type: symbol_type.into(),
            payload: payload.into(),
        }
    }

    /// The symbology reported by the engine, e.g. `QRCODE`.
    #[inline]
    pub fn symbol_type(&self) -> &str {
        &self.symbol_type
    }

    /// Raw decoded bytes.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The payload as text. Invalid UTF-8 sequences are replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }
}
