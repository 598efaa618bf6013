//! Example pages and screen banners laid out as styled lines.
//!
//! The terminal UI draws these lines onto the canvas with a scroll offset,
//! and the `show` command prints them through [`crate::ansi`].

use catalog::{Example, Table};
use rich::{Color, Style, format};

use crate::text::{Line, Span, expand_tabs, fit, styled_segments, wrap};
use crate::theme::Theme;

const CODE_INDENT: &str = "  ";

/// Title over a wrapped description, as shown at the top of list screens.
pub fn banner(title: &str, description: &str, accent: &Color, theme: &Theme, width: usize) -> Vec<Line> {
    let mut lines = wrap(&[Span::new(title, theme.title(accent))], width);
    if !description.is_empty() {
        lines.extend(wrap(&[Span::new(description, theme.muted())], width));
    }
    lines
}

/// Everything shown for one example, top to bottom.
///
/// Blocks without content (an empty code string, no output, no table) are
/// left out entirely.
pub fn example_lines(example: &Example, accent: &Color, theme: &Theme, width: usize) -> Vec<Line> {
    let mut lines = banner(&example.title, &example.description, accent, theme, width);

    if !example.code.trim().is_empty() {
        lines.push(Line::new());
        lines.extend(code_block("Code Example", &example.code, theme, &theme.code()));
    }

    if let Some(output) = &example.output {
        lines.push(Line::new());
        lines.extend(code_block("Output", output, theme, &theme.output()));
    }

    if let Some(table) = &example.table {
        lines.push(Line::new());
        lines.extend(table_lines(table, accent, theme, width));
    }

    if !example.explanation.is_empty() {
        lines.push(Line::new());
        lines.push(Line::styled("Explanation:", theme.title(accent)));
        lines.extend(explanation_lines(&example.explanation, accent, theme, width));
    }

    lines
}

/// A header bar with window dots followed by the unwrapped body lines.
fn code_block(label: &str, body: &str, theme: &Theme, body_style: &Style) -> Vec<Line> {
    let header_style = theme.code_header();
    let mut header = Line::styled(" ", header_style.clone());
    for dot in 0..3 {
        header.push("●", &theme.window_dot(dot));
        header.push(" ", &header_style);
    }
    header.push(&format!(" {label}"), &header_style);

    let mut lines = vec![header.filled(header_style)];
    lines.extend(body.lines().map(|code| {
        Line::styled(format!("{CODE_INDENT}{}", expand_tabs(code)), body_style.clone())
            .filled(body_style.clone())
    }));
    lines
}

/// The explanation with inline markup applied, wrapped to `width`.
///
/// Line breaks in the source are kept; an empty source line stays blank.
pub fn explanation_lines(text: &str, accent: &Color, theme: &Theme, width: usize) -> Vec<Line> {
    let styles = theme.segment_styles(accent);
    format(text)
        .lines()
        .iter()
        .flat_map(|segments| wrap(&styled_segments(segments, &styles, &Style::new()), width))
        .collect()
}

/// Header row, rule, and body rows with equal column widths.
///
/// Cells longer than their column are cut with `…`. Rows with fewer cells
/// than the header are padded with blanks.
pub fn table_lines(table: &Table, accent: &Color, theme: &Theme, width: usize) -> Vec<Line> {
    let columns = table.columns();
    if columns == 0 {
        return Vec::new();
    }
    let separators = columns - 1;
    let column_width = (width.saturating_sub(separators) / columns).max(3);

    let header_style = theme.table_header(accent);
    let separator_style = theme.muted();
    let row = |cells: &[String], cell_style: &Style| {
        let mut line = Line::new();
        for column in 0..columns {
            if column > 0 {
                line.push("│", &separator_style);
            }
            let text = cells.get(column).map(String::as_str).unwrap_or("");
            line.push(&fit(text, column_width), cell_style);
        }
        line
    };

    let mut lines = vec![row(&table.headers, &header_style)];
    let rule_width = column_width * columns + separators;
    lines.push(Line::styled("─".repeat(rule_width), separator_style.clone()));
    lines.extend(table.rows.iter().map(|cells| row(cells, &Style::new())));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::display_width;
    use catalog::Catalog;
    use rich::TextStyle;

    fn texts(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.plain_text().trim_end().to_string())
            .collect()
    }

    fn example(code: &str, output: Option<&str>, explanation: &str) -> Example {
        Example {
            id: "e".into(),
            title: "Title".into(),
            description: "Short description".into(),
            code: code.into(),
            output: output.map(str::to_string),
            table: None,
            explanation: explanation.into(),
        }
    }

    #[test]
    fn example_page_layout() {
        let example = example("x = 1\nprint(x)", Some("1"), "Assign with `=`.");
        let lines = example_lines(&example, &Color::Rgb(1, 2, 3), &Theme::monochrome(), 40);
        assert_eq!(
            texts(&lines),
            vec![
                "Title",
                "Short description",
                "",
                " ● ● ●  Code Example",
                "  x = 1",
                "  print(x)",
                "",
                " ● ● ●  Output",
                "  1",
                "",
                "Explanation:",
                "Assign with =.",
            ]
        );
    }

    #[test]
    fn empty_code_block_is_skipped() {
        let example = example("   ", None, "");
        let lines = example_lines(&example, &Color::Rgb(1, 2, 3), &Theme::monochrome(), 40);
        assert_eq!(texts(&lines), vec!["Title", "Short description"]);
    }

    #[test]
    fn code_lines_are_filled() {
        let example = example("a", None, "");
        let theme = Theme::default();
        let lines = example_lines(&example, &Color::Rgb(1, 2, 3), &theme, 40);
        assert_eq!(lines[4].fill, Some(theme.code()));
    }

    #[test]
    fn explanation_markup_is_styled() {
        let lines = explanation_lines(
            "**Key**: use `len()`\n\nsecond",
            &Color::Rgb(1, 2, 3),
            &Theme::monochrome(),
            40,
        );
        assert_eq!(texts(&lines), vec!["Key: use len()", "", "second"]);
        let first = &lines[0].spans;
        assert_eq!(first[0].text, "Key");
        assert!(first[0].style.text.contains(TextStyle::BOLD));
        assert_eq!(first[2].text, "len()");
        assert!(first[2].style.text.contains(TextStyle::REVERSE));
    }

    #[test]
    fn table_columns_share_width() {
        let table = Table {
            headers: vec!["Type".into(), "Example".into()],
            rows: vec![
                vec!["str".into(), "\"hello\"".into()],
                vec!["a very long cell".into()],
            ],
        };
        let lines = table_lines(&table, &Color::Rgb(1, 2, 3), &Theme::monochrome(), 11);
        assert_eq!(
            texts(&lines),
            vec!["Type │Exam…", "───────────", "str  │\"hel…", "a ve…│"]
        );
        assert_eq!(lines.iter().map(Line::width).max(), Some(11));
    }

    #[test]
    fn html_table_example_renders_without_code() {
        let catalog = Catalog::embedded().unwrap();
        let html = catalog.language("html").unwrap();
        let examples = html.category("html_basics").unwrap().flat_examples().unwrap();
        let with_table = examples.iter().find(|e| e.table.is_some()).unwrap();
        let lines = example_lines(with_table, &Color::Rgb(1, 2, 3), &Theme::monochrome(), 60);
        let text = texts(&lines);
        assert!(!text.iter().any(|l| l.contains("Code Example")));
        assert!(text.iter().any(|l| l.starts_with("Data Type")));
        assert!(display_width(&text[0]) <= 60);
    }
}
