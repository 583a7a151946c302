//! Pure-computation RGBA8 rasters of the picker surfaces.
//!
//! This module is always available (no feature gate) so that both the `png`
//! snapshot path and a canvas `ImageData` path can share the same pixels.

use annotate_color_core::color::{hsv_to_rgb, Hsv, Rgb};
use annotate_color_core::css::CssColor;
use annotate_color_core::picker::{hue_from_fraction, saturation_value_from_fractions};

use crate::error::PreviewError;

/// Checkerboard square size behind translucent colors.
pub const CHECKER_CELL: usize = 6;

const CHECKER_LIGHT: f64 = 255.0;
const CHECKER_DARK: f64 = 204.0;

/// An RGBA8 pixel buffer, row-major, `width * height * 4` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl Raster {
    fn from_fn(
        width: usize,
        height: usize,
        pixel: impl Fn(usize, usize) -> [u8; 4],
    ) -> Result<Self, PreviewError> {
        let fits_u32 = |n: usize| u32::try_from(n).is_ok();
        let byte_len = width.checked_mul(height).and_then(|n| n.checked_mul(4));
        if width == 0 || height == 0 || !fits_u32(width) || !fits_u32(height) || byte_len.is_none() {
            return Err(PreviewError::InvalidDimensions { width, height });
        }
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .flat_map(|(x, y)| pixel(x, y))
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// The four bytes of pixel `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.width + x) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }
}

/// Position of index `i` along an axis of `n` pixels, as a fraction in `[0, 1]`.
fn edge_fraction(i: usize, n: usize) -> f64 {
    if n <= 1 {
        0.0
    } else {
        i as f64 / (n - 1) as f64
    }
}

fn opaque(c: Rgb) -> [u8; 4] {
    [c.r, c.g, c.b, 255]
}

/// Composites `c` at `alpha` percent over the checkerboard at `(x, y)`.
fn over_checker(c: Rgb, alpha: f64, x: usize, y: usize) -> [u8; 4] {
    let a = alpha.clamp(0.0, 100.0) / 100.0;
    let bg = if (x / CHECKER_CELL + y / CHECKER_CELL) % 2 == 0 {
        CHECKER_LIGHT
    } else {
        CHECKER_DARK
    };
    let blend = |channel: u8| (f64::from(channel) * a + bg * (1.0 - a)).round() as u8;
    [blend(c.r), blend(c.g), blend(c.b), 255]
}

/// The saturation/value box for `hue`: saturation grows to the right,
/// value grows upward.
pub fn saturation_value_plane(hue: f64, width: usize, height: usize) -> Result<Raster, PreviewError> {
    Raster::from_fn(width, height, |x, y| {
        let (s, v) = saturation_value_from_fractions(edge_fraction(x, width), edge_fraction(y, height));
        opaque(hsv_to_rgb(Hsv::new(hue, s, v)))
    })
}

/// The hue slider track at full saturation and value, red at the left edge.
pub fn hue_strip(width: usize, height: usize) -> Result<Raster, PreviewError> {
    Raster::from_fn(width, height, |x, _| {
        // Divide by width, not width - 1, so the right edge stops short of red again.
        let h = hue_from_fraction(x as f64 / width as f64);
        opaque(hsv_to_rgb(Hsv::new(h, 100.0, 100.0)))
    })
}

/// The alpha slider track for `c`, transparent at the left over a checkerboard.
pub fn alpha_strip(c: Rgb, width: usize, height: usize) -> Result<Raster, PreviewError> {
    Raster::from_fn(width, height, |x, y| {
        over_checker(c, edge_fraction(x, width) * 100.0, x, y)
    })
}

/// A horizontal row of `cell`-sized squares, one per color.
pub fn swatch_strip(colors: &[CssColor], cell: usize) -> Result<Raster, PreviewError> {
    let width = colors
        .len()
        .checked_mul(cell)
        .ok_or(PreviewError::InvalidDimensions {
            width: usize::MAX,
            height: cell,
        })?;
    Raster::from_fn(width, cell, |x, y| {
        let color = colors[x / cell];
        over_checker(color.rgb(), color.alpha(), x, y)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use annotate_color_core::swatch::SwatchSet;

    #[test]
    fn raster_has_correct_length() {
        let raster = saturation_value_plane(0.0, 8, 4).unwrap();
        assert_eq!(raster.data.len(), 8 * 4 * 4);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            hue_strip(0, 4),
            Err(PreviewError::InvalidDimensions { .. })
        ));
        assert!(swatch_strip(&[], 10).is_err());
    }

    #[test]
    fn oversized_dimensions_are_rejected_not_overflowed() {
        let set = SwatchSet::annotate();
        assert!(matches!(
            swatch_strip(set.colors(), usize::MAX / 4),
            Err(PreviewError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            saturation_value_plane(0.0, usize::MAX, usize::MAX),
            Err(PreviewError::InvalidDimensions { .. })
        ));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn axis_past_u32_is_rejected() {
        let wide = u32::MAX as usize + 1;
        assert!(matches!(
            hue_strip(wide, 1),
            Err(PreviewError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn plane_corners_match_picker_mapping() {
        let raster = saturation_value_plane(210.0, 16, 16).unwrap();
        // top-left: no saturation, full value
        assert_eq!(raster.pixel(0, 0), [255, 255, 255, 255]);
        // top-right: full saturation and value
        assert_eq!(raster.pixel(15, 0), [0, 128, 255, 255]);
        // bottom row: black
        assert_eq!(raster.pixel(0, 15), [0, 0, 0, 255]);
        assert_eq!(raster.pixel(15, 15), [0, 0, 0, 255]);
    }

    #[test]
    fn hue_strip_starts_red_and_passes_cyan_midway() {
        let raster = hue_strip(6, 1).unwrap();
        assert_eq!(raster.pixel(0, 0), [255, 0, 0, 255]);
        assert_eq!(raster.pixel(3, 0), [0, 255, 255, 255]);
    }

    #[test]
    fn alpha_strip_ends_opaque() {
        let c = Rgb::new(0, 122, 255);
        let raster = alpha_strip(c, 10, 2).unwrap();
        assert_eq!(raster.pixel(9, 0), [0, 122, 255, 255]);
        // left edge shows only the light checker square
        assert_eq!(raster.pixel(0, 0), [255, 255, 255, 255]);
    }

    #[test]
    fn swatch_strip_has_one_cell_per_color() {
        let set = SwatchSet::grayscale();
        let raster = swatch_strip(set.colors(), 4).unwrap();
        assert_eq!(raster.width, set.len() * 4);
        assert_eq!(raster.height, 4);
        assert_eq!(raster.pixel(0, 0), [0, 0, 0, 255]);
        assert_eq!(raster.pixel(raster.width - 1, 3), [255, 255, 255, 255]);
    }

    #[test]
    fn transparent_swatch_shows_checkerboard() {
        let raster = swatch_strip(&[CssColor::Transparent], 2 * CHECKER_CELL).unwrap();
        assert_eq!(raster.pixel(0, 0), [255, 255, 255, 255]);
        assert_eq!(raster.pixel(CHECKER_CELL, 0), [204, 204, 204, 255]);
    }

    #[test]
    fn every_pixel_is_opaque() {
        let raster = swatch_strip(SwatchSet::pastel().colors(), 3).unwrap();
        assert!(raster.data.chunks(4).all(|px| px[3] == 255));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn plane_length_matches_dimensions(
                hue in 0.0_f64..360.0,
                width in 1usize..24,
                height in 1usize..24,
            ) {
                let raster = saturation_value_plane(hue, width, height).unwrap();
                prop_assert_eq!(raster.data.len(), width * height * 4);
            }
        }
    }
}
