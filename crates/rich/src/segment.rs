//! Segment type for styled runs of explanation text.

use std::fmt;

/// How a run of text should be rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Ordinary text.
    Plain,
    /// Text between a pair of `**` markers.
    Bold,
    /// Text between a pair of backticks.
    Highlighted,
}

impl SegmentKind {
    /// Short lowercase name, used in debug output and snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Plain => "plain",
            SegmentKind::Bold => "bold",
            SegmentKind::Highlighted => "highlighted",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contiguous run of text tagged with a [`SegmentKind`].
///
/// Segments never contain marker characters that were consumed by the
/// formatter. A backtick can still appear inside a [`SegmentKind::Bold`]
/// segment because bold runs are not scanned for highlights.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

impl Segment {
    /// Create a new segment.
    pub fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Create a plain segment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Plain, text)
    }

    /// Create a bold segment.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Bold, text)
    }

    /// Create a highlighted segment.
    pub fn highlighted(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Highlighted, text)
    }

    /// Returns true if the segment carries no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind() {
        assert_eq!(Segment::plain("a").kind, SegmentKind::Plain);
        assert_eq!(Segment::bold("a").kind, SegmentKind::Bold);
        assert_eq!(Segment::highlighted("a").kind, SegmentKind::Highlighted);
    }

    #[test]
    fn display_shows_kind_and_text() {
        assert_eq!(Segment::bold("x y").to_string(), "bold(\"x y\")");
        assert_eq!(Segment::plain("").to_string(), "plain(\"\")");
    }

    #[test]
    fn empty_segment() {
        let segment = Segment::highlighted("");
        assert!(segment.is_empty());
        assert_eq!(segment.len(), 0);
    }
}
