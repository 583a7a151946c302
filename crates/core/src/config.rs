//! Picker configuration.
//!
//! Configuration arrives as a JSON object from the embedding UI. Reading is
//! lenient: a missing key or a value of the wrong JSON type falls back to the
//! default. Values of the right type but outside their range are rejected by
//! [`PickerConfig::validate`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::Rgb;
use crate::css::{AlphaFormat, CssColor};
use crate::error::ColorError;
use crate::swatch::SwatchSet;

pub const DEFAULT_RECENT_CAPACITY: usize = 8;
pub const MAX_RECENT_CAPACITY: usize = 64;

/// Settings shared by every picker popup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Built-in swatch set shown under the picker.
    pub swatch_set: String,
    /// Maximum number of recently used colors kept.
    pub recent_capacity: usize,
    /// Output form for emitted CSS strings.
    pub alpha_format: AlphaFormat,
    /// Color used when an externally supplied color cannot be parsed.
    pub default_color: CssColor,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            swatch_set: "annotate".to_string(),
            recent_capacity: DEFAULT_RECENT_CAPACITY,
            alpha_format: AlphaFormat::Canonical,
            default_color: CssColor::Hex(Rgb::new(255, 0, 0)),
        }
    }
}

impl PickerConfig {
    /// Reads a config from a JSON object, defaulting missing or mistyped keys.
    pub fn from_json(params: &Value) -> Result<Self, ColorError> {
        let defaults = Self::default();

        let alpha_format = match param_string(params, "alpha_format", "canonical").as_str() {
            "canonical" => AlphaFormat::Canonical,
            "always_rgba" => AlphaFormat::AlwaysRgba,
            other => {
                return Err(ColorError::InvalidConfig(format!(
                    "unknown alpha_format '{other}'"
                )))
            }
        };

        let default_color = match params.get("default_color").and_then(Value::as_str) {
            Some(s) => CssColor::parse(s)
                .map_err(|e| ColorError::InvalidConfig(format!("default_color: {e}")))?,
            None => defaults.default_color,
        };

        let config = Self {
            swatch_set: param_string(params, "swatch_set", &defaults.swatch_set),
            recent_capacity: param_usize(params, "recent_capacity", defaults.recent_capacity),
            alpha_format,
            default_color,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks ranges that the type system does not.
    pub fn validate(&self) -> Result<(), ColorError> {
        if self.recent_capacity == 0 {
            return Err(ColorError::InvalidConfig(
                "recent_capacity must be at least 1".to_string(),
            ));
        }
        if self.recent_capacity > MAX_RECENT_CAPACITY {
            return Err(ColorError::InvalidConfig(format!(
                "recent_capacity must be at most {MAX_RECENT_CAPACITY}, got {}",
                self.recent_capacity
            )));
        }
        SwatchSet::from_name(&self.swatch_set)
            .map_err(|e| ColorError::InvalidConfig(e.to_string()))?;
        Ok(())
    }
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing or wrong type.
fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}

/// Extracts a `String` from `params[name]`, returning `default` if missing or wrong type.
fn param_string(params: &Value, name: &str, default: &str) -> String {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}
