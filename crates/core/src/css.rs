//! CSS color strings: `transparent`, `#RRGGBB` and `rgba(R, G, B, A)`.
//!
//! [`parse_color`] is the single entry point that turns any externally
//! supplied color string into the HSV + RGB + alpha working set used by the
//! pickers. [`CssColor::with_alpha`] goes the other way, choosing the output
//! form from an [`AlphaFormat`].
//!
//! Alpha is a percentage in `[0, 100]` everywhere in this crate and only
//! becomes a `[0, 1]` fraction inside the `rgba()` text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::{clamp_channel, clamp_percent, hex_to_rgb, rgb_to_hsv, Hsv, Rgb};
use crate::error::ColorError;

/// How a color with alpha is written back out as a CSS string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphaFormat {
    /// `transparent` at alpha 0, `#RRGGBB` at alpha 100, `rgba(...)` otherwise.
    #[default]
    Canonical,
    /// Always `rgba(...)`, including fully transparent and fully opaque colors.
    AlwaysRgba,
}

/// A color in one of the CSS forms the editor reads and writes.
///
/// Serializes as its CSS string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CssColor {
    /// The `transparent` keyword. Its channels read as white.
    Transparent,
    /// An opaque `#RRGGBB` color.
    Hex(Rgb),
    /// `rgba(R, G, B, A)` with alpha stored as a percentage.
    Rgba(Rgb, f64),
}

/// The working set a picker keeps for one color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParsedColor {
    pub hsv: Hsv,
    pub rgb: Rgb,
    /// Alpha percentage in `[0, 100]`.
    pub alpha: f64,
}

impl CssColor {
    /// Builds an `rgba()` color, clamping alpha to `[0, 100]`.
    pub fn rgba(rgb: Rgb, alpha: f64) -> Self {
        CssColor::Rgba(rgb, clamp_percent(alpha))
    }

    /// Picks the CSS form for `rgb` at `alpha` percent according to `format`.
    pub fn with_alpha(rgb: Rgb, alpha: f64, format: AlphaFormat) -> Self {
        let alpha = clamp_percent(alpha);
        // decide on the whole percent that the rgba() text would show
        let shown = alpha.round();
        match format {
            AlphaFormat::Canonical if shown <= 0.0 => CssColor::Transparent,
            AlphaFormat::Canonical if shown >= 100.0 => CssColor::Hex(rgb),
            _ => CssColor::Rgba(rgb, alpha),
        }
    }

    /// Channel values; `transparent` reads as white.
    pub fn rgb(&self) -> Rgb {
        match *self {
            CssColor::Transparent => Rgb::WHITE,
            CssColor::Hex(rgb) | CssColor::Rgba(rgb, _) => rgb,
        }
    }

    /// Alpha percentage in `[0, 100]`.
    pub fn alpha(&self) -> f64 {
        match *self {
            CssColor::Transparent => 0.0,
            CssColor::Hex(_) => 100.0,
            CssColor::Rgba(_, alpha) => alpha,
        }
    }

    /// Parses `transparent`, `rgb(...)`/`rgba(...)`, or hex with an optional `#`.
    ///
    /// Surrounding whitespace and keyword case are ignored. Channels are
    /// rounded and clamped to `[0, 255]`, alpha fractions clamped to `[0, 1]`.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("transparent") {
            return Ok(CssColor::Transparent);
        }

        let lower = trimmed.to_ascii_lowercase();
        if let Some(args) = function_args(&lower, "rgba").or_else(|| function_args(&lower, "rgb")) {
            return parse_rgb_function(input, args);
        }

        let looks_like_hex = trimmed.starts_with('#')
            || (!trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_hexdigit()));
        if looks_like_hex {
            return hex_to_rgb(trimmed).map(CssColor::Hex);
        }

        Err(ColorError::Unrecognized(input.to_owned()))
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CssColor::Transparent => f.write_str("transparent"),
            CssColor::Hex(rgb) => write!(f, "{}", rgb.to_css_hex()),
            CssColor::Rgba(rgb, alpha) => write!(
                f,
                "rgba({}, {}, {}, {})",
                rgb.r,
                rgb.g,
                rgb.b,
                alpha_fraction(alpha)
            ),
        }
    }
}

impl FromStr for CssColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CssColor::parse(s)
    }
}

impl Serialize for CssColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CssColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        CssColor::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl From<CssColor> for ParsedColor {
    fn from(css: CssColor) -> Self {
        match css {
            CssColor::Transparent => ParsedColor {
                hsv: Hsv {
                    h: 0.0,
                    s: 0.0,
                    v: 100.0,
                },
                rgb: Rgb::WHITE,
                alpha: 0.0,
            },
            other => {
                let rgb = other.rgb();
                ParsedColor {
                    hsv: rgb_to_hsv(rgb),
                    rgb,
                    alpha: other.alpha(),
                }
            }
        }
    }
}

impl ParsedColor {
    /// Writes the working set back out as a CSS string.
    pub fn to_css(&self, format: AlphaFormat) -> String {
        CssColor::with_alpha(self.rgb, self.alpha, format).to_string()
    }
}

/// Normalizes any supported color string into HSV, RGB and alpha.
///
/// Returns an error instead of propagating garbage channels; callers fall
/// back to a default color.
pub fn parse_color(input: &str) -> Result<ParsedColor, ColorError> {
    CssColor::parse(input).map(ParsedColor::from).inspect_err(|e| {
        log::debug!("rejected color {input:?}: {e}");
    })
}

/// Formats `rgb` at `alpha` percent as a CSS string under `format`.
pub fn format_css(rgb: Rgb, alpha: f64, format: AlphaFormat) -> String {
    CssColor::with_alpha(rgb, alpha, format).to_string()
}

/// Alpha percentage as a fraction with at most two decimals.
fn alpha_fraction(alpha: f64) -> f64 {
    clamp_percent(alpha).round() / 100.0
}

/// Returns the text between `name(` and the closing `)`, if `s` has that shape.
fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_rgb_function(input: &str, args: &str) -> Result<CssColor, ColorError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if !(3..=4).contains(&parts.len()) {
        return Err(ColorError::rgba(
            input,
            format!("expected 3 or 4 components, got {}", parts.len()),
        ));
    }

    let numbers = parts
        .iter()
        .map(|part| match part.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(ColorError::rgba(
                input,
                format!("component '{part}' is not a number"),
            )),
        })
        .collect::<Result<Vec<f64>, ColorError>>()?;

    let rgb = Rgb {
        r: clamp_channel(numbers[0]),
        g: clamp_channel(numbers[1]),
        b: clamp_channel(numbers[2]),
    };
    let alpha = numbers.get(3).map_or(100.0, |a| a.clamp(0.0, 1.0) * 100.0);
    Ok(CssColor::Rgba(rgb, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    // -- parse_color --

    #[test]
    fn transparent_parses_to_white_with_zero_alpha() {
        let parsed = parse_color("transparent").unwrap();
        assert_eq!(
            parsed,
            ParsedColor {
                hsv: Hsv {
                    h: 0.0,
                    s: 0.0,
                    v: 100.0
                },
                rgb: Rgb::WHITE,
                alpha: 0.0,
            }
        );
    }

    #[test]
    fn transparent_keyword_ignores_case_and_whitespace() {
        assert_eq!(
            CssColor::parse("  Transparent ").unwrap(),
            CssColor::Transparent
        );
    }

    #[test]
    fn rgba_scales_alpha_to_percent() {
        let parsed = parse_color("rgba(0, 122, 255, 0.5)").unwrap();
        assert_eq!(parsed.rgb, Rgb::new(0, 122, 255));
        assert!(approx_eq(parsed.alpha, 50.0), "alpha = {}", parsed.alpha);
        assert_eq!(parsed.hsv, rgb_to_hsv(Rgb::new(0, 122, 255)));
    }

    #[test]
    fn rgba_tolerates_spacing_and_uppercase() {
        let css = CssColor::parse("RGBA (10,20 ,30,  1)").unwrap();
        assert_eq!(css, CssColor::Rgba(Rgb::new(10, 20, 30), 100.0));
    }

    #[test]
    fn rgb_function_is_opaque() {
        let parsed = parse_color("rgb(255, 0, 0)").unwrap();
        assert_eq!(parsed.rgb, Rgb::new(255, 0, 0));
        assert!(approx_eq(parsed.alpha, 100.0));
    }

    #[test]
    fn rgba_clamps_out_of_range_components() {
        let css = CssColor::parse("rgba(300, -5, 127.6, 2)").unwrap();
        assert_eq!(css, CssColor::Rgba(Rgb::new(255, 0, 128), 100.0));
    }

    #[test]
    fn rgba_rejects_wrong_component_count() {
        let err = CssColor::parse("rgba(1, 2)").unwrap_err();
        assert!(matches!(err, ColorError::InvalidRgba { .. }), "got {err:?}");
        assert!(CssColor::parse("rgba(1, 2, 3, 4, 5)").is_err());
    }

    #[test]
    fn rgba_rejects_non_numeric_components() {
        let err = CssColor::parse("rgba(1, two, 3, 0.5)").unwrap_err();
        assert!(err.to_string().contains("two"), "got: {err}");
        assert!(CssColor::parse("rgba(1, 2, 3, inf)").is_err());
        assert!(CssColor::parse("rgba(1, 2, 3, )").is_err());
    }

    #[test]
    fn rgba_without_closing_paren_is_unrecognized() {
        assert!(matches!(
            CssColor::parse("rgba(1, 2, 3, 0.5"),
            Err(ColorError::Unrecognized(_))
        ));
    }

    #[test]
    fn hex_parses_with_full_alpha() {
        let parsed = parse_color("#0080ff").unwrap();
        assert_eq!(parsed.rgb, Rgb::new(0, 128, 255));
        assert!(approx_eq(parsed.alpha, 100.0));

        let bare = parse_color("F0A").unwrap();
        assert_eq!(bare.rgb, Rgb::new(255, 0, 170));
    }

    #[test]
    fn malformed_hex_is_invalid_hex() {
        assert!(matches!(
            parse_color("#12345"),
            Err(ColorError::InvalidHex { .. })
        ));
        assert!(matches!(
            parse_color("#zzzzzz"),
            Err(ColorError::InvalidHex { .. })
        ));
    }

    #[test]
    fn unknown_shapes_are_unrecognized() {
        for bad in ["", "   ", "red", "hsl(0, 100%, 50%)"] {
            assert!(
                matches!(parse_color(bad), Err(ColorError::Unrecognized(_))),
                "accepted {bad:?}"
            );
        }
    }

    // -- Display / with_alpha --

    #[test]
    fn display_forms() {
        assert_eq!(CssColor::Transparent.to_string(), "transparent");
        assert_eq!(CssColor::Hex(Rgb::new(0, 128, 255)).to_string(), "#0080FF");
        assert_eq!(
            CssColor::rgba(Rgb::new(0, 122, 255), 50.0).to_string(),
            "rgba(0, 122, 255, 0.5)"
        );
    }

    #[test]
    fn rgba_display_keeps_at_most_two_decimals() {
        let css = CssColor::Rgba(Rgb::new(1, 2, 3), 33.3);
        assert_eq!(css.to_string(), "rgba(1, 2, 3, 0.33)");
        let css = CssColor::Rgba(Rgb::new(1, 2, 3), 7.0);
        assert_eq!(css.to_string(), "rgba(1, 2, 3, 0.07)");
    }

    #[test]
    fn canonical_format_special_cases_zero_and_full_alpha() {
        let rgb = Rgb::new(10, 20, 30);
        assert_eq!(
            format_css(rgb, 0.0, AlphaFormat::Canonical),
            "transparent"
        );
        assert_eq!(format_css(rgb, 100.0, AlphaFormat::Canonical), "#0A141E");
        assert_eq!(
            format_css(rgb, 40.0, AlphaFormat::Canonical),
            "rgba(10, 20, 30, 0.4)"
        );
    }

    #[test]
    fn always_rgba_format_never_special_cases() {
        let rgb = Rgb::new(10, 20, 30);
        assert_eq!(
            format_css(rgb, 0.0, AlphaFormat::AlwaysRgba),
            "rgba(10, 20, 30, 0)"
        );
        assert_eq!(
            format_css(rgb, 100.0, AlphaFormat::AlwaysRgba),
            "rgba(10, 20, 30, 1)"
        );
    }

    #[test]
    fn canonical_format_agrees_with_rounded_alpha_text() {
        let rgb = Rgb::new(10, 20, 30);
        assert_eq!(format_css(rgb, 0.4, AlphaFormat::Canonical), "transparent");
        assert_eq!(format_css(rgb, 99.6, AlphaFormat::Canonical), "#0A141E");
        assert_eq!(
            format_css(rgb, 0.5, AlphaFormat::Canonical),
            "rgba(10, 20, 30, 0.01)"
        );
        assert_eq!(
            format_css(rgb, 99.4, AlphaFormat::Canonical),
            "rgba(10, 20, 30, 0.99)"
        );
    }

    #[test]
    fn with_alpha_clamps_alpha() {
        let rgb = Rgb::new(1, 2, 3);
        assert_eq!(
            CssColor::with_alpha(rgb, 150.0, AlphaFormat::Canonical),
            CssColor::Hex(rgb)
        );
        assert_eq!(
            CssColor::with_alpha(rgb, -1.0, AlphaFormat::Canonical),
            CssColor::Transparent
        );
    }

    #[test]
    fn display_output_parses_back_to_same_color() {
        for css in [
            CssColor::Transparent,
            CssColor::Hex(Rgb::new(18, 52, 86)),
            CssColor::Rgba(Rgb::new(0, 122, 255), 50.0),
        ] {
            assert_eq!(CssColor::parse(&css.to_string()).unwrap(), css);
        }
    }

    #[test]
    fn parsed_color_to_css_uses_policy() {
        let parsed = parse_color("rgba(0, 122, 255, 0.5)").unwrap();
        assert_eq!(
            parsed.to_css(AlphaFormat::Canonical),
            "rgba(0, 122, 255, 0.5)"
        );
        let opaque = parse_color("#007AFF").unwrap();
        assert_eq!(opaque.to_css(AlphaFormat::Canonical), "#007AFF");
    }

    // -- Serde --

    #[test]
    fn css_color_serde_round_trip() {
        let css = CssColor::Rgba(Rgb::new(0, 122, 255), 50.0);
        let json = serde_json::to_string(&css).unwrap();
        assert_eq!(json, "\"rgba(0, 122, 255, 0.5)\"");
        let back: CssColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, css);
    }

    #[test]
    fn alpha_format_serializes_snake_case() {
        let json = serde_json::to_string(&AlphaFormat::AlwaysRgba).unwrap();
        assert_eq!(json, "\"always_rgba\"");
    }

    #[test]
    fn parsed_color_serializes_rgb_as_hex() {
        let json = serde_json::to_value(parse_color("transparent").unwrap()).unwrap();
        assert_eq!(json["rgb"], "#FFFFFF");
        assert_eq!(json["alpha"], 0.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rgba_strings_parse_to_their_channels(
                r in any::<u8>(),
                g in any::<u8>(),
                b in any::<u8>(),
                a in 0u8..=100,
            ) {
                let text = format!("rgba({r}, {g}, {b}, {})", f64::from(a) / 100.0);
                let parsed = parse_color(&text).unwrap();
                prop_assert_eq!(parsed.rgb, Rgb::new(r, g, b));
                prop_assert!((parsed.alpha - f64::from(a)).abs() < 1e-9, "alpha = {}", parsed.alpha);
            }
        }
    }
}
