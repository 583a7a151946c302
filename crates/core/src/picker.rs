//! Headless color picker: the HSV + RGB + alpha working set behind a picker
//! popup, driven by pointer fractions and text fields.
//!
//! Pointer tracking happens in the UI layer and arrives here as fractions in
//! `[0, 1]` per axis. The scale helpers map those fractions onto hue,
//! saturation/value and alpha, and back again for thumb placement.
//!
//! Every user-driven change emits the current CSS string to the `on_change`
//! callback. Setting a color from outside (`set_color`) does not emit.

use std::fmt;

use crate::color::{
    clamp_channel, clamp_percent, hex_to_rgb, hsv_to_rgb, normalize_hue, rgb_to_hex, rgb_to_hsv,
    sanitize_hex_input, Hsv, Rgb,
};
use crate::config::PickerConfig;
use crate::css::{parse_color, CssColor, ParsedColor};
use crate::error::ColorError;
use crate::swatch::{RecentColors, SwatchSet};

/// Callback receiving the emitted CSS color string.
pub type OnChange = Box<dyn FnMut(&str)>;

/// An RGB channel edited through a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

fn unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Hue slider position to degrees. The right end wraps back to 0.
pub fn hue_from_fraction(x: f64) -> f64 {
    normalize_hue(unit(x) * 360.0)
}

/// Saturation box position to `(s, v)`; `y` grows downward, so the top edge is full value.
pub fn saturation_value_from_fractions(x: f64, y: f64) -> (f64, f64) {
    (unit(x) * 100.0, (1.0 - unit(y)) * 100.0)
}

/// Alpha slider position to a whole percentage.
pub fn alpha_from_fraction(x: f64) -> f64 {
    (unit(x) * 100.0).round()
}

pub fn hue_to_fraction(h: f64) -> f64 {
    normalize_hue(h) / 360.0
}

pub fn saturation_value_to_fractions(s: f64, v: f64) -> (f64, f64) {
    (clamp_percent(s) / 100.0, 1.0 - clamp_percent(v) / 100.0)
}

pub fn alpha_to_fraction(alpha: f64) -> f64 {
    clamp_percent(alpha) / 100.0
}

/// Working state of one picker popup.
pub struct ColorPicker {
    hsv: Hsv,
    rgb: Rgb,
    alpha: f64,
    config: PickerConfig,
    recent: RecentColors,
    on_change: Option<OnChange>,
}

impl fmt::Debug for ColorPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorPicker")
            .field("hsv", &self.hsv)
            .field("rgb", &self.rgb)
            .field("alpha", &self.alpha)
            .field("config", &self.config)
            .field("recent", &self.recent)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new(PickerConfig::default())
    }
}

impl ColorPicker {
    /// Creates a picker showing the config's default color.
    pub fn new(config: PickerConfig) -> Self {
        let start = ParsedColor::from(config.default_color);
        let recent = RecentColors::new(config.recent_capacity);
        Self {
            hsv: start.hsv,
            rgb: start.rgb,
            alpha: start.alpha,
            config,
            recent,
            on_change: None,
        }
    }

    /// Registers the callback that receives every emitted CSS string.
    pub fn with_on_change(mut self, on_change: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    // -- Readouts --

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Alpha percentage in `[0, 100]`.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Hex field contents (no `#`).
    pub fn hex(&self) -> String {
        rgb_to_hex(self.rgb)
    }

    pub fn css_color(&self) -> CssColor {
        CssColor::with_alpha(self.rgb, self.alpha, self.config.alpha_format)
    }

    /// The string passed to `on_change`.
    pub fn css(&self) -> String {
        self.css_color().to_string()
    }

    /// Label color for text drawn over the current fill.
    pub fn contrast_text(&self) -> Rgb {
        self.rgb.contrast_text()
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn recent(&self) -> &RecentColors {
        &self.recent
    }

    /// Preset swatches configured for this picker.
    pub fn swatches(&self) -> Result<SwatchSet, ColorError> {
        SwatchSet::from_name(&self.config.swatch_set)
    }

    // -- External updates --

    /// Loads an externally supplied color. Leaves the state untouched on error.
    pub fn set_color(&mut self, css: &str) -> Result<(), ColorError> {
        let parsed = parse_color(css)?;
        self.apply(parsed);
        Ok(())
    }

    /// Loads `css`, or the configured default color if it does not parse.
    pub fn set_color_or_default(&mut self, css: &str) {
        if let Err(e) = self.set_color(css) {
            log::warn!(
                "falling back to {} for unparseable color: {e}",
                self.config.default_color
            );
            self.apply(ParsedColor::from(self.config.default_color));
        }
    }

    // -- User edits --

    /// Numeric HSV entry. Hue wraps, `s`/`v` clamp.
    pub fn set_hsv(&mut self, hsv: Hsv) {
        self.hsv = Hsv::new(hsv.h, hsv.s, hsv.v);
        self.rgb = hsv_to_rgb(self.hsv);
        self.emit();
    }

    /// Pointer moved in the saturation/value box.
    pub fn drag_saturation_value(&mut self, x: f64, y: f64) {
        let (s, v) = saturation_value_from_fractions(x, y);
        self.set_hsv(Hsv { h: self.hsv.h, s, v });
    }

    /// Pointer moved along the hue slider.
    pub fn drag_hue(&mut self, x: f64) {
        self.set_hsv(Hsv {
            h: hue_from_fraction(x),
            ..self.hsv
        });
    }

    /// Pointer moved along the alpha slider.
    pub fn drag_alpha(&mut self, x: f64) {
        self.alpha = alpha_from_fraction(x);
        self.emit();
    }

    /// Text typed into the hex field.
    ///
    /// Non-hex characters are dropped and the text is capped at 6 digits.
    /// The color only changes once exactly 6 digits are present; returns
    /// whether it did.
    pub fn set_hex_input(&mut self, text: &str) -> bool {
        let digits = sanitize_hex_input(text);
        if digits.len() != 6 {
            return false;
        }
        match hex_to_rgb(&digits) {
            Ok(rgb) => {
                self.set_rgb(rgb);
                true
            }
            Err(_) => false,
        }
    }

    /// Value typed into an R, G or B field; clamped to `[0, 255]`.
    pub fn set_channel(&mut self, channel: Channel, value: f64) {
        let value = clamp_channel(value);
        let mut rgb = self.rgb;
        match channel {
            Channel::Red => rgb.r = value,
            Channel::Green => rgb.g = value,
            Channel::Blue => rgb.b = value,
        }
        self.set_rgb(rgb);
    }

    /// Value typed into the alpha field; clamped to `[0, 100]`.
    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = clamp_percent(alpha);
        self.emit();
    }

    /// A preset or recent swatch was clicked: take all of its components
    /// directly and remember it.
    pub fn select_swatch(&mut self, swatch: CssColor) {
        self.apply(ParsedColor::from(swatch));
        self.recent.push(swatch);
        self.emit();
    }

    /// Records the current color in the recent list, e.g. when the popup closes.
    pub fn commit(&mut self) -> CssColor {
        let current = self.css_color();
        self.recent.push(current);
        current
    }

    fn set_rgb(&mut self, rgb: Rgb) {
        self.rgb = rgb;
        self.hsv = rgb_to_hsv(rgb);
        self.emit();
    }

    fn apply(&mut self, parsed: ParsedColor) {
        self.hsv = parsed.hsv;
        self.rgb = parsed.rgb;
        self.alpha = parsed.alpha;
    }

    fn emit(&mut self) {
        let css = self.css();
        log::trace!("picker emits {css}");
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&css);
        }
    }
}
