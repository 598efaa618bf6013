//! Colors and text styles for every part of the UI.
//!
//! A monochrome theme keeps modifiers (bold, dim, reverse) and drops every
//! color, for `--no-color` and `NO_COLOR`.

use catalog::Language;
use rich::{Color, SegmentStyles, Style, TextStyle};

const PRIMARY: Color = Color::Rgb(0x4f, 0x8e, 0xf7);
const HEADER_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
const MUTED: Color = Color::Rgb(0x8a, 0x8f, 0x98);
const CODE_BG: Color = Color::Rgb(0x1e, 0x1e, 0x1e);
const CODE_HEADER_BG: Color = Color::Rgb(0x2d, 0x2d, 0x2d);
const CODE_FG: Color = Color::Rgb(0xd4, 0xd4, 0xd4);
const OUTPUT_FG: Color = Color::Rgb(0x27, 0xc9, 0x3f);
const DRAWER_BG: Color = Color::Rgb(0x25, 0x28, 0x30);

/// The three window dots drawn in code block headers.
pub const WINDOW_DOTS: [Color; 3] = [
    Color::Rgb(0xff, 0x5f, 0x56),
    Color::Rgb(0xff, 0xbd, 0x2e),
    Color::Rgb(0x27, 0xc9, 0x3f),
];

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    color: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Theme {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn monochrome() -> Self {
        Self::new(false)
    }

    pub fn has_color(&self) -> bool {
        self.color
    }

    fn finish(&self, style: Style) -> Style {
        if self.color {
            style
        } else {
            Style::modifiers(style.text)
        }
    }

    /// Accent color of a language, falling back to the app color when the
    /// catalog holds something unparseable.
    pub fn accent(&self, language: &Language) -> Color {
        Color::parse(&language.color).unwrap_or_else(|err| {
            log::warn!("language {}: {err}", language.id);
            PRIMARY
        })
    }

    pub fn primary(&self) -> Color {
        PRIMARY
    }

    pub fn header(&self) -> Style {
        self.finish(
            Style::modifiers(TextStyle::BOLD)
                .with_fg(HEADER_TEXT)
                .with_bg(PRIMARY),
        )
    }

    pub fn footer(&self) -> Style {
        self.finish(Style::modifiers(TextStyle::DIM))
    }

    pub fn title(&self, accent: &Color) -> Style {
        self.finish(Style::modifiers(TextStyle::BOLD).with_fg(accent.clone()))
    }

    pub fn heading(&self) -> Style {
        Style::modifiers(TextStyle::BOLD)
    }

    pub fn muted(&self) -> Style {
        if self.color {
            Style::new().with_fg(MUTED)
        } else {
            Style::modifiers(TextStyle::DIM)
        }
    }

    pub fn disabled(&self) -> Style {
        self.finish(Style::modifiers(TextStyle::DIM).with_fg(MUTED))
    }

    /// Marker column of the selected list row.
    pub fn marker(&self, accent: &Color) -> Style {
        self.finish(Style::modifiers(TextStyle::BOLD).with_fg(accent.clone()))
    }

    pub fn selected(&self) -> Style {
        Style::modifiers(TextStyle::REVERSE)
    }

    pub fn badge(&self, accent: &Color) -> Style {
        self.finish(Style::new().with_fg(accent.clone()))
    }

    pub fn code(&self) -> Style {
        self.finish(Style::new().with_fg(CODE_FG).with_bg(CODE_BG))
    }

    pub fn code_header(&self) -> Style {
        self.finish(
            Style::modifiers(TextStyle::BOLD)
                .with_fg(CODE_FG)
                .with_bg(CODE_HEADER_BG),
        )
    }

    pub fn output(&self) -> Style {
        self.finish(Style::new().with_fg(OUTPUT_FG).with_bg(CODE_BG))
    }

    pub fn window_dot(&self, index: usize) -> Style {
        let color = WINDOW_DOTS[index % WINDOW_DOTS.len()].clone();
        self.finish(Style::new().with_fg(color).with_bg(CODE_HEADER_BG))
    }

    pub fn table_header(&self, accent: &Color) -> Style {
        self.finish(
            Style::modifiers(TextStyle::BOLD)
                .with_fg(accent.clone())
                .with_bg(accent.blend(&CODE_BG, 0.85)),
        )
    }

    pub fn drawer(&self) -> Style {
        self.finish(Style::new().with_bg(DRAWER_BG))
    }

    pub fn input(&self, focused: bool) -> Style {
        if focused {
            self.finish(Style::new().with_bg(CODE_HEADER_BG))
        } else {
            self.finish(Style::new().with_bg(CODE_BG))
        }
    }

    pub fn cursor(&self) -> Style {
        Style::modifiers(TextStyle::REVERSE)
    }

    /// How explanation markup is shown for a language.
    pub fn segment_styles(&self, accent: &Color) -> SegmentStyles {
        if self.color {
            SegmentStyles::with_accent(accent.clone())
        } else {
            SegmentStyles::monochrome()
        }
    }
}
