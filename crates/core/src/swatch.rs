//! Preset swatch sets and the recently-used color list shown in pickers.

use std::collections::VecDeque;

use crate::css::CssColor;
use crate::error::ColorError;

/// Names of the built-in swatch sets.
const SET_NAMES: &[&str] = &["annotate", "pastel", "grayscale"];

/// A named, ordered set of preset colors.
#[derive(Debug, Clone, PartialEq)]
pub struct SwatchSet {
    name: &'static str,
    colors: Vec<CssColor>,
}

impl SwatchSet {
    fn from_css(name: &'static str, colors: &[&str]) -> Result<Self, ColorError> {
        let colors = colors
            .iter()
            .map(|c| CssColor::parse(c))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { name, colors })
    }

    /// Looks up a built-in set by name.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        match name {
            "annotate" => Ok(Self::annotate()),
            "pastel" => Ok(Self::pastel()),
            "grayscale" => Ok(Self::grayscale()),
            _ => Err(ColorError::UnknownSwatchSet(name.to_string())),
        }
    }

    /// Returns the names of all built-in sets.
    pub fn list_names() -> &'static [&'static str] {
        SET_NAMES
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn colors(&self) -> &[CssColor] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    // -- Built-in sets --

    /// High-visibility markup colors plus black, white and no fill.
    pub fn annotate() -> Self {
        Self::from_css(
            "annotate",
            &[
                "#FF3B30",
                "#FF9500",
                "#FFCC00",
                "#34C759",
                "#007AFF",
                "#AF52DE",
                "#000000",
                "#FFFFFF",
                "transparent",
            ],
        )
        .expect("annotate swatch values are valid")
    }

    /// Soft highlighter tones.
    pub fn pastel() -> Self {
        Self::from_css(
            "pastel",
            &[
                "#FFB3BA",
                "#FFDFBA",
                "#FFFFBA",
                "#BAFFC9",
                "#BAE1FF",
                "rgba(255, 235, 59, 0.4)",
            ],
        )
        .expect("pastel swatch values are valid")
    }

    /// Black to white.
    pub fn grayscale() -> Self {
        Self::from_css(
            "grayscale",
            &["#000000", "#404040", "#808080", "#C0C0C0", "#FFFFFF"],
        )
        .expect("grayscale swatch values are valid")
    }
}

/// Most-recent-first list of colors the user picked, bounded by capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentColors {
    capacity: usize,
    colors: VecDeque<CssColor>,
}

impl RecentColors {
    /// Creates an empty list. A capacity of 0 is raised to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            colors: VecDeque::new(),
        }
    }

    /// Moves `color` to the front, dropping the oldest entry when full.
    pub fn push(&mut self, color: CssColor) {
        self.colors.retain(|c| *c != color);
        self.colors.push_front(color);
        self.colors.truncate(self.capacity);
    }

    pub fn iter(&self) -> impl Iterator<Item = &CssColor> {
        self.colors.iter()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
