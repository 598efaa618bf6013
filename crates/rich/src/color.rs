//! Color types for styles and language accents.
//!
//! Supports named colors, hex, and RGB formats. Catalog entries carry their
//! accent as a hex string (Python is `#3776AB`).

use phf::phf_map;

use crate::error::ColorParseError;

/// Named colors understood by [`Color::parse`].
static NAMED_COLORS: phf::Map<&'static str, (u8, u8, u8)> = phf_map! {
    "black" => (0, 0, 0),
    "white" => (255, 255, 255),
    "red" => (255, 0, 0),
    "green" => (0, 128, 0),
    "blue" => (0, 0, 255),
    "yellow" => (255, 255, 0),
    "cyan" => (0, 255, 255),
    "aqua" => (0, 255, 255),
    "magenta" => (255, 0, 255),
    "fuchsia" => (255, 0, 255),
    "bright_black" => (128, 128, 128),
    "bright_white" => (255, 255, 255),
    "bright_red" => (255, 85, 85),
    "bright_green" => (85, 255, 85),
    "bright_blue" => (85, 85, 255),
    "bright_yellow" => (255, 255, 85),
    "bright_cyan" => (85, 255, 255),
    "bright_magenta" => (255, 85, 255),
    "grey" => (128, 128, 128),
    "gray" => (128, 128, 128),
    "silver" => (192, 192, 192),
    "maroon" => (128, 0, 0),
    "olive" => (128, 128, 0),
    "navy" => (0, 0, 128),
    "purple" => (128, 0, 128),
    "teal" => (0, 128, 128),
    "lime" => (0, 255, 0),
    "orange" => (255, 165, 0),
    "pink" => (255, 192, 203),
    "brown" => (165, 42, 42),
    "coral" => (255, 127, 80),
    "gold" => (255, 215, 0),
    "indigo" => (75, 0, 130),
    "violet" => (238, 130, 238),
    "crimson" => (220, 20, 60),
    "darkgray" => (169, 169, 169),
    "darkgrey" => (169, 169, 169),
    "dimgray" => (105, 105, 105),
    "dimgrey" => (105, 105, 105),
    "lightgray" => (211, 211, 211),
    "lightgrey" => (211, 211, 211),
    "dodgerblue" => (30, 144, 255),
    "steelblue" => (70, 130, 180),
    "tomato" => (255, 99, 71),
    "whitesmoke" => (245, 245, 245),
};

/// A color specification.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    /// Named color (e.g., "red", "blue", "cyan").
    Named(String),
    /// RGB color components.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a color from a string.
    ///
    /// Supports:
    /// - Named colors: `red`, `blue`, `cyan`, etc. (case-insensitive)
    /// - Hex colors: `#RGB`, `#RRGGBB`
    /// - RGB function: `rgb(r, g, b)`
    ///
    /// # Examples
    ///
    /// ```
    /// use rich::Color;
    ///
    /// assert_eq!(Color::parse("#3776AB").unwrap(), Color::Rgb(0x37, 0x76, 0xab));
    /// assert_eq!(Color::parse("rgb(1, 2, 3)").unwrap(), Color::Rgb(1, 2, 3));
    /// assert!(Color::parse("Red").is_ok());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();

        if let Some(hex) = input.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if let Some(inner) = input
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_rgb_func(inner);
        }

        let name = input.to_lowercase();
        if NAMED_COLORS.contains_key(name.as_str()) {
            Ok(Color::Named(name))
        } else {
            Err(ColorParseError::UnknownName(input.to_string()))
        }
    }

    /// Parse a hex color (without the # prefix).
    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(format!("#{hex}"));
        let digits = hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(invalid)?;

        match digits.as_slice() {
            [r, g, b] => Ok(Color::Rgb(r * 17, g * 17, b * 17)),
            [r1, r2, g1, g2, b1, b2] => Ok(Color::Rgb(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2)),
            _ => Err(invalid()),
        }
    }

    /// Parse an RGB function (the part inside the parentheses).
    fn parse_rgb_func(input: &str) -> Result<Self, ColorParseError> {
        let parts: Vec<&str> = input.split(',').map(str::trim).collect();
        let [r, g, b] = parts.as_slice() else {
            return Err(ColorParseError::InvalidRgb(format!("rgb({input})")));
        };

        let channel = |name: &str, value: &str| {
            value
                .parse::<u8>()
                .map_err(|_| ColorParseError::InvalidRgb(format!("invalid {name}: {value}")))
        };

        Ok(Color::Rgb(
            channel("red", r)?,
            channel("green", g)?,
            channel("blue", b)?,
        ))
    }

    /// Convert the color to RGB components.
    ///
    /// Unknown names (only constructible by hand) resolve to black.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Rgb(r, g, b) => (*r, *g, *b),
            Color::Named(name) => NAMED_COLORS.get(name.as_str()).copied().unwrap_or((0, 0, 0)),
        }
    }

    /// Mix this color toward `other` by `amount` (0.0 keeps self, 1.0 gives other).
    ///
    /// Used for the tinted backgrounds behind highlighted text.
    pub fn blend(&self, other: &Color, amount: f32) -> Color {
        let amount = amount.clamp(0.0, 1.0);
        let (r1, g1, b1) = self.to_rgb();
        let (r2, g2, b2) = other.to_rgb();
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * amount).round() as u8;
        Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
    }
}
