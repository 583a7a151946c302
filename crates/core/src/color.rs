//! HSV, RGB and Hex representations and the pure conversions between them.
//!
//! Scale conventions follow the editor's pickers: hue in degrees `[0, 360)`,
//! saturation and value as percentages `[0, 100]`, RGB channels as 8-bit
//! integers. Hex strings are 6 digits, case-insensitive on input and
//! uppercase on output. Alpha is not part of these types; see [`crate::css`].

use crate::error::ColorError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 8-bit RGB color.
///
/// Serializes as a `"#RRGGBB"` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSV color: hue in degrees, saturation and value in percent.
///
/// Deserializing goes through [`Hsv::new`], so hue is wrapped and `s`/`v`
/// clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "HsvFields")]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

#[derive(Deserialize)]
struct HsvFields {
    h: f64,
    s: f64,
    v: f64,
}

impl From<HsvFields> for Hsv {
    fn from(f: HsvFields) -> Self {
        Hsv::new(f.h, f.s, f.v)
    }
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Parses `"#RRGGBB"`, `"RRGGBB"`, or the 3-digit shorthand `"#RGB"`.
    pub fn from_hex(hex: &str) -> Result<Rgb, ColorError> {
        hex_to_rgb(hex)
    }

    /// Canonical hex form without the `#`, e.g. `"0080FF"`.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }

    /// Display form with the leading `#`, e.g. `"#0080FF"`.
    pub fn to_css_hex(self) -> String {
        format!("#{}", rgb_to_hex(self))
    }
}

impl Hsv {
    /// Builds an HSV color, wrapping hue modulo 360 and clamping `s` and `v`
    /// to `[0, 100]`. Non-finite inputs become 0.
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Hsv {
            h: normalize_hue(h),
            s: clamp_percent(s),
            v: clamp_percent(v),
        }
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex_to_rgb(&s).map_err(serde::de::Error::custom)
    }
}

/// Wraps a hue angle into `[0, 360)`.
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid rounds tiny negative angles up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Clamps a percentage into `[0, 100]`. NaN becomes 0.
pub fn clamp_percent(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 100.0)
    }
}

/// Rounds and clamps a manually entered channel value into `[0, 255]`.
pub fn clamp_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

/// Maps a unit-interval component to an 8-bit channel.
fn unit_to_channel(x: f64) -> u8 {
    clamp_channel(x * 255.0)
}

/// Converts RGB to HSV.
///
/// Achromatic colors (`r == g == b`) get hue 0 and saturation 0.
pub fn rgb_to_hsv(c: Rgb) -> Hsv {
    let r = f64::from(c.r) / 255.0;
    let g = f64::from(c.g) / 255.0;
    let b = f64::from(c.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max * 100.0;
    let s = if delta == 0.0 { 0.0 } else { delta / max * 100.0 };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsv { h: h * 60.0, s, v }
}

/// Converts HSV to RGB by six-sector decomposition.
///
/// Hue is wrapped and `s`/`v` clamped before converting, so any finite input
/// yields a valid color.
pub fn hsv_to_rgb(c: Hsv) -> Rgb {
    let h = normalize_hue(c.h) / 60.0;
    let s = clamp_percent(c.s) / 100.0;
    let v = clamp_percent(c.v) / 100.0;

    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        5 => (v, p, q),
        _ => (v, t, p),
    };

    Rgb {
        r: unit_to_channel(r),
        g: unit_to_channel(g),
        b: unit_to_channel(b),
    }
}

/// Formats RGB as 6 uppercase hex digits without a `#`.
pub fn rgb_to_hex(c: Rgb) -> String {
    format!("{:02X}{:02X}{:02X}", c.r, c.g, c.b)
}

/// Parses a hex color with an optional `#`, in 6-digit or 3-digit shorthand form.
///
/// Shorthand expands by duplicating each digit (`"F0A"` is `"FF00AA"`).
/// Returns `ColorError::InvalidHex` for any other length or a non-hex digit.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::hex(hex, format!("invalid hex digit '{bad}'")));
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_owned(),
        n => {
            return Err(ColorError::hex(
                hex,
                format!("expected 3 or 6 hex digits, got {n}"),
            ))
        }
    };

    let channel = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|e| ColorError::hex(hex, e.to_string()))
    };
    Ok(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Filters free-form text typed into a hex field: keeps only hex digits and
/// caps the result at 6 characters.
pub fn sanitize_hex_input(input: &str) -> String {
    input.chars().filter(char::is_ascii_hexdigit).take(6).collect()
}
