//! FormattedText result type.
//!
//! This is the result of formatting explanation text.

use std::fmt;

use crate::parser::{bold_pass, highlight_pass};
use crate::segment::{Segment, SegmentKind};

/// Format explanation text into styled segments.
///
/// Runs the bold pass over the whole input, then the highlight pass over the
/// plain runs only. Total over all inputs: empty strings, unpaired markers and
/// adjacent markers all produce a result.
///
/// Empty runs are kept. `format("")` yields a single empty plain segment and
/// `format("**bold**")` yields `["", "bold", ""]`.
///
/// # Examples
///
/// ```
/// use rich::{format, Segment};
///
/// let formatted = format("**a`b`c**");
/// assert_eq!(
///     formatted.segments(),
///     &[Segment::plain(""), Segment::bold("a`b`c"), Segment::plain("")]
/// );
/// ```
pub fn format(text: &str) -> FormattedText {
    let runs = highlight_pass(bold_pass(text));
    let segments = runs
        .into_iter()
        .map(|run| Segment::new(run.kind, run.text))
        .collect();
    FormattedText { segments }
}

/// The ordered segments produced by one [`format`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormattedText {
    segments: Vec<Segment>,
}

impl FormattedText {
    /// Create a FormattedText from already-built segments.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// All segments in reading order, including empty ones.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Segments that carry text. Renderers use this to skip zero-width runs.
    pub fn non_empty(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| !s.is_empty())
    }

    /// Concatenated text with markers stripped.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Returns true if every segment is plain.
    pub fn is_plain(&self) -> bool {
        self.segments.iter().all(|s| s.kind == SegmentKind::Plain)
    }

    /// Total text length in bytes.
    pub fn len(&self) -> usize {
        self.segments.iter().map(Segment::len).sum()
    }

    /// Returns true if no segment carries text.
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(Segment::is_empty)
    }

    /// Split into lines on `\n`, keeping segment kinds.
    ///
    /// Explanations use `\n` for line breaks. A segment spanning a newline is
    /// cut in two, both halves keeping its kind. Empty pieces are dropped
    /// except that every line is present, so `"a\n\nb"` gives three lines.
    pub fn lines(&self) -> Vec<Vec<Segment>> {
        let mut lines = vec![Vec::new()];
        for segment in &self.segments {
            let mut pieces = segment.text.split('\n');
            if let Some(first) = pieces.next() {
                push_piece(&mut lines, segment.kind, first);
            }
            for piece in pieces {
                lines.push(Vec::new());
                push_piece(&mut lines, segment.kind, piece);
            }
        }
        lines
    }
}

fn push_piece(lines: &mut [Vec<Segment>], kind: SegmentKind, piece: &str) {
    if piece.is_empty() {
        return;
    }
    if let Some(line) = lines.last_mut() {
        line.push(Segment::new(kind, piece));
    }
}

impl fmt::Display for FormattedText {
    /// Compact form used in tests: `plain("a ") bold("b")`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a FormattedText {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
