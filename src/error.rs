use std::path::PathBuf;
use thiserror::Error;

/// The main error type for gouda operations.
#[derive(Debug, Error)]
pub enum GoudaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load image {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Engine error: {0}")]
    Engine(String),

    #[error("No engines are available")]
    NoEngines,

    #[error("Unknown engine: {0}")]
    UnknownEngine(String),
}
