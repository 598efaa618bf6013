//! Style types for formatted explanation text.
//!
//! A Style combines colors and text modifiers into a single specification.
//! [`SegmentStyles`] assigns one Style to each [`SegmentKind`].

use bitflags::bitflags;

use crate::color::Color;
use crate::error::StyleParseError;
use crate::segment::SegmentKind;

bitflags! {
    /// Text styling attributes (modifiers).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TextStyle: u8 {
        /// Bold/increased intensity.
        const BOLD = 1 << 0;
        /// Dim/decreased intensity.
        const DIM = 1 << 1;
        /// Italic text.
        const ITALIC = 1 << 2;
        /// Underlined text.
        const UNDERLINE = 1 << 3;
        /// Strikethrough text.
        const STRIKE = 1 << 4;
        /// Reverse video (swap fg/bg).
        const REVERSE = 1 << 5;
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle::empty()
    }
}

impl TextStyle {
    /// Parse a single modifier keyword (`bold`, `b`, `dim`, ...).
    pub fn from_keyword(word: &str) -> Option<TextStyle> {
        let flag = match word {
            "bold" | "b" => TextStyle::BOLD,
            "dim" | "d" => TextStyle::DIM,
            "italic" | "i" => TextStyle::ITALIC,
            "underline" | "u" => TextStyle::UNDERLINE,
            "strike" | "s" | "strikethrough" => TextStyle::STRIKE,
            "reverse" | "r" => TextStyle::REVERSE,
            _ => return None,
        };
        Some(flag)
    }
}

/// Complete style specification including colors and modifiers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    /// Foreground (text) color.
    pub fg: Option<Color>,
    /// Background color.
    pub bg: Option<Color>,
    /// Text style modifiers.
    pub text: TextStyle,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Style with only modifiers set.
    pub fn modifiers(text: TextStyle) -> Self {
        Self {
            text,
            ..Self::default()
        }
    }

    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Returns true if no style properties are set.
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.text.is_empty()
    }

    /// Apply another style on top of this one.
    ///
    /// Non-None colors in `other` win. Modifiers are OR'd together.
    pub fn apply(&self, other: &Style) -> Style {
        Style {
            fg: other.fg.clone().or_else(|| self.fg.clone()),
            bg: other.bg.clone().or_else(|| self.bg.clone()),
            text: self.text | other.text,
        }
    }

    /// Parse a style from a string like `"bold #3776AB on black"`.
    ///
    /// Words are modifiers (`bold`, `b`, `italic`, `i`, `underline`, `u`,
    /// `strike`, `s`, `dim`, `d`, `reverse`, `r`), a foreground color, or
    /// `on <color>` for the background.
    ///
    /// # Examples
    ///
    /// ```
    /// use rich::{Style, TextStyle};
    ///
    /// let style = Style::parse("bold white on blue").unwrap();
    /// assert!(style.text.contains(TextStyle::BOLD));
    /// assert!(style.fg.is_some());
    /// assert!(style.bg.is_some());
    /// ```
    pub fn parse(input: &str) -> Result<Self, StyleParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(StyleParseError::Empty);
        }

        let mut style = Style::new();
        let mut words = input.split_whitespace();

        while let Some(word) = words.next() {
            let word_lower = word.to_lowercase();

            if word_lower == "on" {
                let color_word = words.next().ok_or(StyleParseError::MissingBackground)?;
                style.bg = Some(Color::parse(color_word)?);
                continue;
            }

            if let Some(flag) = TextStyle::from_keyword(&word_lower) {
                style.text |= flag;
                continue;
            }

            match Color::parse(word) {
                Ok(color) => style.fg = Some(color),
                Err(_) => return Err(StyleParseError::UnknownModifier(word.to_string())),
            }
        }

        Ok(style)
    }
}

/// One style per segment kind.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentStyles {
    pub plain: Style,
    pub bold: Style,
    pub highlighted: Style,
}

impl SegmentStyles {
    /// Bold runs in the accent color, highlighted runs in the accent color on
    /// the dark code background.
    pub fn with_accent(accent: Color) -> Self {
        Self {
            plain: Style::new(),
            bold: Style::modifiers(TextStyle::BOLD).with_fg(accent.clone()),
            highlighted: Style::new()
                .with_fg(accent)
                .with_bg(Color::Rgb(0x2d, 0x2d, 0x2d)),
        }
    }

    /// Modifier-only styles for terminals without color.
    pub fn monochrome() -> Self {
        Self {
            plain: Style::new(),
            bold: Style::modifiers(TextStyle::BOLD),
            highlighted: Style::modifiers(TextStyle::REVERSE),
        }
    }

    /// Style for a segment kind.
    pub fn get(&self, kind: SegmentKind) -> &Style {
        match kind {
            SegmentKind::Plain => &self.plain,
            SegmentKind::Bold => &self.bold,
            SegmentKind::Highlighted => &self.highlighted,
        }
    }
}

impl Default for SegmentStyles {
    fn default() -> Self {
        Self::monochrome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_modifier() {
        let style = Style::parse("bold").unwrap();
        assert_eq!(style.text, TextStyle::BOLD);
    }

    #[test]
    fn parse_fg_and_bg() {
        let style = Style::parse("white on #2d2d2d").unwrap();
        assert_eq!(style.fg, Some(Color::Named("white".into())));
        assert_eq!(style.bg, Some(Color::Rgb(0x2d, 0x2d, 0x2d)));
    }

    #[test]
    fn parse_dangling_on() {
        assert_eq!(
            Style::parse("bold on"),
            Err(StyleParseError::MissingBackground)
        );
    }

    #[test]
    fn apply_ors_modifiers() {
        let base = Style::modifiers(TextStyle::BOLD).with_fg(Color::Named("red".into()));
        let overlay = Style::modifiers(TextStyle::ITALIC).with_bg(Color::Named("blue".into()));
        let combined = base.apply(&overlay);
        assert_eq!(combined.text, TextStyle::BOLD | TextStyle::ITALIC);
        assert_eq!(combined.fg, Some(Color::Named("red".into())));
        assert_eq!(combined.bg, Some(Color::Named("blue".into())));
    }

    #[test]
    fn segment_styles_lookup() {
        let styles = SegmentStyles::with_accent(Color::Rgb(0x37, 0x76, 0xab));
        assert!(styles.get(SegmentKind::Plain).is_empty());
        assert!(styles.get(SegmentKind::Bold).text.contains(TextStyle::BOLD));
        assert!(styles.get(SegmentKind::Highlighted).bg.is_some());
    }
}
