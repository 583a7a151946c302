//! Black-or-white foreground selection for labels drawn over a fill color.

use crate::color::{hex_to_rgb, Rgb};
use crate::error::ColorError;

pub const BLACK_TEXT: &str = "#000000";
pub const WHITE_TEXT: &str = "#FFFFFF";

/// Brightness threshold; strictly brighter fills get black text.
const THRESHOLD: f64 = 128.0;

/// Perceived brightness in `[0, 255]` using ITU-R BT.601 luma weights.
pub fn brightness(c: Rgb) -> f64 {
    let weighted = u32::from(c.r) * 299 + u32::from(c.g) * 587 + u32::from(c.b) * 114;
    f64::from(weighted) / 1000.0
}

impl Rgb {
    /// Black for fills brighter than the midpoint, white otherwise.
    pub fn contrast_text(self) -> Rgb {
        if brightness(self) > THRESHOLD {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        }
    }
}

/// Picks `"#000000"` or `"#FFFFFF"` for text drawn on `hex_color`.
pub fn contrast_text_color(hex_color: &str) -> Result<&'static str, ColorError> {
    let fill = hex_to_rgb(hex_color)?;
    Ok(if fill.contrast_text() == Rgb::BLACK {
        BLACK_TEXT
    } else {
        WHITE_TEXT
    })
}
