//! PNG output of a [`Raster`].
//!
//! This module is feature-gated behind `png` (default on) so that WASM builds
//! can depend on this crate without pulling in the `image` crate.
//! The pixel computation itself lives in [`crate::pixel`] (always available).

use std::path::Path;

use crate::error::PreviewError;
use crate::pixel::Raster;

/// Writes a raster as a PNG image.
///
/// Returns `PreviewError::InvalidDimensions` if the raster dimensions overflow
/// `u32`, or `PreviewError::Io` on write failure.
pub fn write_png(raster: &Raster, path: &Path) -> Result<(), PreviewError> {
    let invalid = || PreviewError::InvalidDimensions {
        width: raster.width,
        height: raster.height,
    };
    let w = u32::try_from(raster.width).map_err(|_| invalid())?;
    let h = u32::try_from(raster.height).map_err(|_| invalid())?;
    let img = image::RgbaImage::from_raw(w, h, raster.data.clone())
        .ok_or_else(|| PreviewError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| PreviewError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{saturation_value_plane, swatch_strip};
    use annotate_color_core::swatch::SwatchSet;

    #[test]
    fn write_png_round_trip() {
        let raster = saturation_value_plane(210.0, 16, 8).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plane.png");

        write_png(&raster, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 8);
        assert_eq!(img.get_pixel(15, 0).0, [0, 128, 255, 255]);
    }

    #[test]
    fn write_png_swatch_strip() {
        let raster = swatch_strip(SwatchSet::annotate().colors(), 8).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swatches.png");
        write_png(&raster, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn mismatched_buffer_is_an_error() {
        let raster = Raster {
            width: 4,
            height: 4,
            data: vec![0; 3],
        };
        let dir = tempfile::tempdir().unwrap();
        let err = write_png(&raster, &dir.path().join("bad.png")).unwrap_err();
        assert!(matches!(err, PreviewError::Io(_)), "got {err:?}");
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let raster = saturation_value_plane(0.0, 2, 2).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.png");
        assert!(matches!(write_png(&raster, &path), Err(PreviewError::Io(_))));
    }
}
