//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: color error (unparseable color, unknown swatch set)
//! - 11: I/O error (PNG write)
//! - 12: input error (bad dimensions, bad config JSON)
//! - 13: serialization error

use annotate_color_core::ColorError;
use annotate_color_preview::PreviewError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// A color-model error (unparseable color, unknown swatch set).
    Color(ColorError),
    /// An I/O error (PNG write).
    Io(String),
    /// A user input error (bad dimensions, bad config JSON).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Color(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Color(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<ColorError> for CliError {
    fn from(e: ColorError) -> Self {
        match e {
            ColorError::InvalidConfig(msg) => CliError::Input(msg),
            other => CliError::Color(other),
        }
    }
}

impl From<PreviewError> for CliError {
    fn from(e: PreviewError) -> Self {
        match e {
            PreviewError::Io(msg) => CliError::Io(msg),
            other => CliError::Input(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
