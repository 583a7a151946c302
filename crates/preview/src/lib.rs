#![deny(unsafe_code)]
//! Rasterized previews of the color picker surfaces.
//!
//! [`pixel`] builds RGBA8 buffers for the saturation/value box, the hue and
//! alpha slider tracks, and swatch rows, using the same fraction mapping as
//! [`annotate_color_core::picker`]. [`snapshot`] writes them as PNG.

pub mod error;
pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use error::PreviewError;
pub use pixel::Raster;
