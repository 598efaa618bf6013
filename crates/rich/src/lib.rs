//! Inline markup for cheat-sheet explanation text.
//!
//! Explanations are authored as plain strings with two lightweight markers:
//!
//! - `**text**` - bold run
//! - `` `text` `` - highlighted (inline code) run
//!
//! [`format`] turns such a string into an ordered list of [`Segment`]s, each
//! tagged with a [`SegmentKind`]. A renderer then maps each kind to a
//! [`Style`] through [`SegmentStyles`].
//!
//! # Non-nesting
//!
//! Bold detection runs over the whole string first. Highlight detection then
//! runs only inside the plain parts, so a backtick inside a bold run is kept
//! as literal text. Unpaired markers are not validated: an odd marker turns
//! its style on until the end of the string.
//!
//! # Usage
//!
//! ```
//! use rich::{format, SegmentKind};
//!
//! let formatted = format("a **b** c `d` e");
//! assert_eq!(formatted.plain_text(), "a b c d e");
//! assert_eq!(formatted.segments()[1].kind, SegmentKind::Bold);
//! assert_eq!(formatted.segments()[3].kind, SegmentKind::Highlighted);
//! ```

pub mod color;
pub mod error;
pub mod markup;
pub mod parser;
pub mod segment;
pub mod style;

// Re-export main types at crate root
pub use color::Color;
pub use error::{ColorParseError, StyleParseError};
pub use markup::{FormattedText, format};
pub use segment::{Segment, SegmentKind};
pub use style::{SegmentStyles, Style, TextStyle};
