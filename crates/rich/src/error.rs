//! Error types for colors and styles.
//!
//! Formatting explanation text never fails, so there is no error type for
//! [`crate::format`].

use thiserror::Error;

/// Errors that can occur when parsing a color.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorParseError {
    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// Invalid hex color format.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// Invalid RGB color format.
    #[error("invalid RGB color: {0}")]
    InvalidRgb(String),
}

/// Errors that can occur when parsing a style.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StyleParseError {
    /// Invalid color in style.
    #[error("invalid color in style: {0}")]
    InvalidColor(#[from] ColorParseError),

    /// Unknown style modifier.
    #[error("unknown style modifier: {0}")]
    UnknownModifier(String),

    /// `on` without a following color.
    #[error("missing background color after 'on'")]
    MissingBackground,

    /// Empty style specification.
    #[error("empty style specification")]
    Empty,
}
