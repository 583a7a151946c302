#![deny(unsafe_code)]
//! Color model for the screenshot annotation editor.
//!
//! Converts between HSV (hue in degrees, saturation/value in percent), 8-bit
//! RGB, 6-digit Hex and CSS color strings (`transparent`, `#RRGGBB`,
//! `rgba(...)`), derives a legible black/white label color for a fill, and
//! provides the headless picker state, swatch presets and configuration
//! shared by every color control in the editor.

pub mod color;
pub mod config;
pub mod contrast;
pub mod css;
pub mod error;
pub mod picker;
pub mod swatch;

pub use color::{hex_to_rgb, hsv_to_rgb, rgb_to_hex, rgb_to_hsv, sanitize_hex_input, Hsv, Rgb};
pub use config::PickerConfig;
pub use contrast::contrast_text_color;
pub use css::{format_css, parse_color, AlphaFormat, CssColor, ParsedColor};
pub use error::ColorError;
pub use picker::{Channel, ColorPicker};
pub use swatch::{RecentColors, SwatchSet};
