#![deny(unsafe_code)]
//! WASM bindings for the annotation editor color model.
//!
//! Exposes the conversion functions under the names the editor's picker
//! components call (`parseColor`, `hsvToRgb`, `getContrastTextColor`, ...).
//! Colors cross the boundary as plain numbers and strings; parse failures
//! become JS exceptions carrying the error message.

use annotate_color_core::{
    contrast_text_color, format_css, hex_to_rgb, hsv_to_rgb, parse_color, rgb_to_hex, rgb_to_hsv,
    AlphaFormat, ColorError, Hsv, ParsedColor, Rgb,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

fn to_js_error(e: ColorError) -> JsError {
    JsError::new(&e.to_string())
}

/// The HSV + RGB + alpha working set returned by `parseColor`.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsColor {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha percentage in `[0, 100]`.
    pub a: f64,
}

impl From<ParsedColor> for JsColor {
    fn from(p: ParsedColor) -> Self {
        JsColor {
            h: p.hsv.h,
            s: p.hsv.s,
            v: p.hsv.v,
            r: p.rgb.r,
            g: p.rgb.g,
            b: p.rgb.b,
            a: p.alpha,
        }
    }
}

/// RGB channels returned by `hsvToRgb` and `hexToRgb`.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsRgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<Rgb> for JsRgb {
    fn from(c: Rgb) -> Self {
        JsRgb {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

/// HSV returned by `rgbToHsv`.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsHsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

#[wasm_bindgen(js_name = parseColor)]
pub fn parse_color_js(css: &str) -> Result<JsColor, JsError> {
    parse_color(css).map(JsColor::from).map_err(to_js_error)
}

#[wasm_bindgen(js_name = rgbToHsv)]
pub fn rgb_to_hsv_js(r: u8, g: u8, b: u8) -> JsHsv {
    let hsv = rgb_to_hsv(Rgb::new(r, g, b));
    JsHsv {
        h: hsv.h,
        s: hsv.s,
        v: hsv.v,
    }
}

#[wasm_bindgen(js_name = hsvToRgb)]
pub fn hsv_to_rgb_js(h: f64, s: f64, v: f64) -> JsRgb {
    hsv_to_rgb(Hsv { h, s, v }).into()
}

/// Canonical hex without `#`.
#[wasm_bindgen(js_name = rgbToHex)]
pub fn rgb_to_hex_js(r: u8, g: u8, b: u8) -> String {
    rgb_to_hex(Rgb::new(r, g, b))
}

#[wasm_bindgen(js_name = hexToRgb)]
pub fn hex_to_rgb_js(hex: &str) -> Result<JsRgb, JsError> {
    hex_to_rgb(hex).map(JsRgb::from).map_err(to_js_error)
}

#[wasm_bindgen(js_name = getContrastTextColor)]
pub fn contrast_text_color_js(hex: &str) -> Result<String, JsError> {
    contrast_text_color(hex)
        .map(str::to_owned)
        .map_err(to_js_error)
}

/// Emits the `onChange` string for a color; `always_rgba` disables the
/// `transparent`/hex shortcuts at alpha 0 and 100.
#[wasm_bindgen(js_name = formatCss)]
pub fn format_css_js(r: u8, g: u8, b: u8, alpha: f64, always_rgba: bool) -> String {
    let format = if always_rgba {
        AlphaFormat::AlwaysRgba
    } else {
        AlphaFormat::Canonical
    };
    format_css(Rgb::new(r, g, b), alpha, format)
}
