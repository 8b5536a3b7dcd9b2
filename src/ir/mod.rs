//! Value types shared by strategies, the traversal driver and the sinks.
//!
//! # Example
//!
//! ```
//! use gouda::ir::{Barcode, DecodeOutcome};
//!
//! let outcome = DecodeOutcome::found("roi", vec![Barcode::new("QRCODE", b"hello".to_vec())]);
//! assert_eq!(outcome.strategy(), Some("roi"));
//! assert!(!outcome.is_empty());
//! ```

mod barcode;
mod outcome;
mod rect;

// Re-export core types for convenient access
pub use barcode::Barcode;
pub use outcome::DecodeOutcome;
pub use rect::Rect;
