//! Error types for the color model.

use thiserror::Error;

/// Errors produced when a color or a picker configuration cannot be read.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A hex color had the wrong length or a non-hex digit.
    #[error("invalid hex color '{input}': {reason}")]
    InvalidHex { input: String, reason: String },

    /// An `rgb()`/`rgba()` function was malformed.
    #[error("invalid rgba color '{input}': {reason}")]
    InvalidRgba { input: String, reason: String },

    /// The string is neither `transparent`, an `rgb()`/`rgba()` function, nor hex.
    #[error("unrecognized color: {0}")]
    Unrecognized(String),

    /// A swatch set name was not one of the built-in sets.
    #[error("unknown swatch set: {0}")]
    UnknownSwatchSet(String),

    /// A picker configuration value was out of range.
    #[error("invalid picker config: {0}")]
    InvalidConfig(String),
}

impl ColorError {
    pub(crate) fn hex(input: &str, reason: impl Into<String>) -> Self {
        ColorError::InvalidHex {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }

    pub(crate) fn rgba(input: &str, reason: impl Into<String>) -> Self {
        ColorError::InvalidRgba {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}
