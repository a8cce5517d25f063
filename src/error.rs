//! Error types for the drawing context
//!
//! Only two failures are expected from drawing calls: an invalid star
//! geometry and a default font that cannot be loaded. The remaining
//! variants come from PNG export and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Custom error type for drawing operations
#[derive(Error, Debug)]
pub enum PasteError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Failed to load font {path}: {reason}")]
    FontLoad { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias for drawing operations
pub type PasteResult<T> = Result<T, PasteError>;

impl PasteError {
    pub(crate) fn font_load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        PasteError::FontLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Helper to convert serde_json errors
impl From<serde_json::Error> for PasteError {
    fn from(err: serde_json::Error) -> Self {
        PasteError::Config(err.to_string())
    }
}

impl From<image::ImageError> for PasteError {
    fn from(err: image::ImageError) -> Self {
        PasteError::Image(err.to_string())
    }
}
