//! The per-file result of running the strategy chain.

use super::Barcode;

/// Which strategy (if any) produced barcodes for a file, and the barcodes
/// themselves in detection order.
///
/// `DecodeOutcome::none()` means that no strategy produced a result, which
/// includes files that are not decodable images.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodeOutcome {
    strategy: Option<String>,
    barcodes: Vec<Barcode>,
}

impl DecodeOutcome {
    /// The empty outcome.
    pub fn none() -> Self {
        Self::default()
    }

    /// An outcome produced by the named strategy.
    pub fn found(strategy: impl Into<String>, barcodes: Vec<Barcode>) -> Self {
        Self {
            strategy: Some(strategy.into()),
            barcodes,
        }
    }

    #[inline]
    pub fn strategy(&self) -> Option<&str> {
        self.strategy.as_deref()
    }

    #[inline]
    pub fn barcodes(&self) -> &[Barcode] {
        &self.barcodes
    }

    /// Returns true if there are no barcodes, regardless of the strategy name.
    ///
    /// The strategy chain treats such an outcome as a decline.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.barcodes.is_empty()
    }
}
