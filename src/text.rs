//! Styled text lines, grapheme helpers, and word wrapping.

use rich::{Segment, SegmentStyles, Style};
use unicode_display_width::width as display_width_impl;
use unicode_segmentation::UnicodeSegmentation;

const TAB_WIDTH: usize = 4;

pub fn display_width(text: &str) -> usize {
    display_width_impl(text) as usize
}

pub fn graphemes(text: &str) -> impl Iterator<Item = &str> {
    UnicodeSegmentation::graphemes(text, true)
}

/// Byte offset of the `grapheme_index`-th cluster, or the length when past the end.
pub(crate) fn grapheme_byte_index(text: &str, grapheme_index: usize) -> usize {
    UnicodeSegmentation::grapheme_indices(text, true)
        .nth(grapheme_index)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

/// Replace tabs with spaces so every cell has a known width.
pub fn expand_tabs(text: &str) -> String {
    text.replace('\t', &" ".repeat(TAB_WIDTH))
}

/// Cut `text` to at most `width` columns, ending with `…` when shortened.
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for g in graphemes(text) {
        let w = display_width(g);
        if used + w > width - 1 {
            break;
        }
        out.push_str(g);
        used += w;
    }
    out.push('…');
    out
}

/// [`truncate`] then pad with spaces to exactly `width` columns.
pub fn fit(text: &str, width: usize) -> String {
    let mut out = truncate(text, width);
    let used = display_width(&out);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}

/// A run of text in one style.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// One row of styled text.
///
/// `fill` paints the rest of the row after the spans, which is how code
/// blocks get a solid background.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Line {
    pub spans: Vec<Span>,
    pub fill: Option<Style>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self::new().with(text, style)
    }

    /// Append a span, merging it into the last one when the styles match.
    pub fn push(&mut self, text: &str, style: &Style) {
        if text.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.style == *style => last.text.push_str(text),
            _ => self.spans.push(Span::new(text, style.clone())),
        }
    }

    pub fn with(mut self, text: impl Into<String>, style: Style) -> Self {
        let text = text.into();
        self.push(&text, &style);
        self
    }

    pub fn filled(mut self, style: Style) -> Self {
        self.fill = Some(style);
        self
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| display_width(&s.text)).sum()
    }

    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Style formatter segments for display, skipping zero-width runs.
///
/// Each segment gets `base` overlaid with the style for its kind.
pub fn styled_segments(segments: &[Segment], styles: &SegmentStyles, base: &Style) -> Vec<Span> {
    segments
        .iter()
        .filter(|segment| !segment.is_empty())
        .map(|segment| Span::new(segment.text.clone(), base.apply(styles.get(segment.kind))))
        .collect()
}

/// Greedy word wrap of a styled run to `width` columns.
///
/// Breaks after spaces. A word wider than the whole line is split between
/// grapheme clusters. Spaces at the start of a continuation line are
/// dropped; indentation of the first line is kept. Always returns at least
/// one line.
pub fn wrap(spans: &[Span], width: usize) -> Vec<Line> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = Line::new();
    let mut used = 0;
    let mut continuation = false;

    for span in spans {
        for word in span.text.split_inclusive(' ') {
            let visible = display_width(word.trim_end_matches(' '));
            if used > 0 && used + visible > width {
                lines.push(std::mem::take(&mut current));
                used = 0;
                continuation = true;
            }

            let word = if used == 0 && continuation {
                word.trim_start_matches(' ')
            } else {
                word
            };
            if word.is_empty() {
                continue;
            }

            if display_width(word.trim_end_matches(' ')) <= width {
                current.push(word, &span.style);
                used += display_width(word);
                continue;
            }

            for g in graphemes(word) {
                let w = display_width(g);
                if used > 0 && used + w > width {
                    lines.push(std::mem::take(&mut current));
                    used = 0;
                    continuation = true;
                    if g == " " {
                        continue;
                    }
                }
                current.push(g, &span.style);
                used += w;
            }
        }
    }

    if !current.spans.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
