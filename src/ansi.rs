//! Styled lines as terminal escape sequences, for printing to stdout.

use crossterm::style::ContentStyle;
use rich::{FormattedText, SegmentStyles, Style};

use crate::canvas::{ATTRIBUTES, to_crossterm_color};
use crate::text::{Line, styled_segments};

fn content_style(style: &Style) -> ContentStyle {
    let mut content = ContentStyle::new();
    content.foreground_color = style.fg.as_ref().map(to_crossterm_color);
    content.background_color = style.bg.as_ref().map(to_crossterm_color);
    for (flag, attribute) in ATTRIBUTES {
        if style.text.contains(flag) {
            content.attributes.set(attribute);
        }
    }
    content
}

fn push_styled(out: &mut String, text: &str, style: &Style, color: bool) {
    if !color || style.is_empty() {
        out.push_str(text);
    } else {
        out.push_str(&content_style(style).apply(text).to_string());
    }
}

/// One output line per [`Line`], joined with `\n`.
///
/// With `color` off the result is plain text. With it on, a line's `fill`
/// pads it to `width` columns in the fill style.
pub fn render_lines(lines: &[Line], width: usize, color: bool) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for span in &line.spans {
            push_styled(&mut out, &span.text, &span.style, color);
        }
        if let (true, Some(fill)) = (color, &line.fill) {
            let pad = width.saturating_sub(line.width());
            push_styled(&mut out, &" ".repeat(pad), fill, color);
        }
    }
    out
}

/// Formatter output on a single line, each segment in its kind's style.
pub fn render_formatted(text: &FormattedText, styles: &SegmentStyles, color: bool) -> String {
    let mut out = String::new();
    for span in styled_segments(text.segments(), styles, &Style::new()) {
        push_styled(&mut out, &span.text, &span.style, color);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rich::{Color, TextStyle, format};

    #[test]
    fn plain_output_has_no_escapes() {
        let lines = vec![
            Line::styled("bold", Style::modifiers(TextStyle::BOLD)),
            Line::styled("code", Style::new().with_bg(Color::Rgb(0, 0, 0)))
                .filled(Style::new().with_bg(Color::Rgb(0, 0, 0))),
        ];
        let out = render_lines(&lines, 10, false);
        assert_eq!(out, "bold\ncode");
    }

    #[test]
    fn colored_output_wraps_styled_spans() {
        let lines = vec![Line::styled("hi", Style::modifiers(TextStyle::BOLD))];
        let out = render_lines(&lines, 2, true);
        assert!(out.contains("\u{1b}[1m"));
        assert!(out.contains("hi"));
    }

    #[test]
    fn fill_pads_to_width() {
        let fill = Style::new().with_bg(Color::Rgb(0, 0, 0));
        let lines = vec![Line::styled("ab", fill.clone()).filled(fill)];
        let out = render_lines(&lines, 6, true);
        assert!(out.contains("    "));
    }

    #[test]
    fn formatted_text_without_color_is_the_plain_text() {
        let formatted = format("Use **print** and `len()`");
        let out = render_formatted(&formatted, &SegmentStyles::monochrome(), false);
        assert_eq!(out, formatted.plain_text());
        let colored = render_formatted(&formatted, &SegmentStyles::monochrome(), true);
        assert_ne!(colored, out);
    }
}
