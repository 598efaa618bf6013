//! The two marker passes behind [`crate::format`].
//!
//! Both passes use the same rule: split on the marker, then parts at even
//! indices keep their current kind and parts at odd indices take the
//! marker's kind. Empty parts are kept so that every marker is removed
//! exactly once and nothing else is lost.

use crate::segment::SegmentKind;

/// Marker that opens and closes a bold run.
pub const BOLD_MARKER: &str = "**";

/// Marker that opens and closes a highlighted run.
pub const HIGHLIGHT_MARKER: &str = "`";

/// A borrowed run of input text with its kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run<'a> {
    pub kind: SegmentKind,
    pub text: &'a str,
}

impl<'a> Run<'a> {
    pub fn new(kind: SegmentKind, text: &'a str) -> Self {
        Self { kind, text }
    }
}

/// Split `input` on `marker` and tag each part.
///
/// Even-indexed parts get `outside`, odd-indexed parts get `inside`. An odd
/// number of markers leaves the last part tagged `inside`.
pub fn split_toggled<'a>(
    input: &'a str,
    marker: &'a str,
    outside: SegmentKind,
    inside: SegmentKind,
) -> impl Iterator<Item = Run<'a>> + 'a {
    input.split(marker).enumerate().map(move |(index, part)| {
        let kind = if index % 2 == 0 { outside } else { inside };
        Run::new(kind, part)
    })
}

/// First pass: classify the whole input into plain and bold runs.
pub fn bold_pass(input: &str) -> Vec<Run<'_>> {
    split_toggled(input, BOLD_MARKER, SegmentKind::Plain, SegmentKind::Bold).collect()
}

/// Second pass: split plain runs on backticks. Bold runs pass through as-is.
pub fn highlight_pass<'a>(runs: Vec<Run<'a>>) -> Vec<Run<'a>> {
    let mut out = Vec::with_capacity(runs.len());
    for run in runs {
        match run.kind {
            SegmentKind::Plain => out.extend(split_toggled(
                run.text,
                HIGHLIGHT_MARKER,
                SegmentKind::Plain,
                SegmentKind::Highlighted,
            )),
            _ => out.push(run),
        }
    }
    out
}
