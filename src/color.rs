use std::fmt;
use std::str::FromStr;

use egui::Color32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FormatError;

/// An opaque RGB color, written to disk as `#rrggbb`. Defaults to black.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

// Names accepted on read. Anything else has to be a hex triplet.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::rgb(0, 0, 0)),
    ("white", Color::rgb(255, 255, 255)),
    ("red", Color::rgb(255, 0, 0)),
    ("green", Color::rgb(0, 128, 0)),
    ("blue", Color::rgb(0, 0, 255)),
    ("yellow", Color::rgb(255, 255, 0)),
    ("cyan", Color::rgb(0, 255, 255)),
    ("magenta", Color::rgb(255, 0, 255)),
    ("gray", Color::rgb(190, 190, 190)),
    ("grey", Color::rgb(190, 190, 190)),
    ("orange", Color::rgb(255, 165, 0)),
    ("purple", Color::rgb(160, 32, 240)),
    ("brown", Color::rgb(165, 42, 42)),
];

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_color32(self) -> Color32 {
        Color32::from_rgb(self.r, self.g, self.b)
    }

    /// Perceived brightness on a 0..=255 scale.
    pub fn brightness(self) -> f32 {
        (self.r as f32 * 299.0 + self.g as f32 * 587.0 + self.b as f32 * 114.0) / 1000.0
    }

    /// Text color that stays readable on top of this color.
    pub fn contrasting_text(self) -> Color {
        if self.brightness() > 128.0 {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::rgb(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || FormatError::InvalidColor(s.to_owned());

        let Some(hex) = trimmed.strip_prefix('#') else {
            let lower = trimmed.to_ascii_lowercase();
            return NAMED_COLORS
                .iter()
                .find(|(name, _)| *name == lower)
                .map(|(_, color)| *color)
                .ok_or_else(invalid);
        };

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match hex.len() {
            // #rgb expands each nibble, so #f80 is #ff8800
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).map(|v| v * 17);
                Ok(Color::rgb(
                    nibble(0).map_err(|_| invalid())?,
                    nibble(1).map_err(|_| invalid())?,
                    nibble(2).map_err(|_| invalid())?,
                ))
            }
            6 => {
                let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
                Ok(Color::rgb(
                    byte(0).map_err(|_| invalid())?,
                    byte(2).map_err(|_| invalid())?,
                    byte(4).map_err(|_| invalid())?,
                ))
            }
            _ => Err(invalid()),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
