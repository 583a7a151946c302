//! Error types for preview rendering.

use thiserror::Error;

/// Errors produced while rasterizing or writing a preview.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// Width or height was zero, or too large for an image.
    #[error("invalid dimensions {width}x{height}: both must be non-zero and fit in u32")]
    InvalidDimensions { width: usize, height: usize },

    /// Writing the image failed.
    #[error("i/o error: {0}")]
    Io(String),
}
