//! Side drawer with app information and key bindings.

use super::{Context, count};
use crate::canvas::{Canvas, Region};
use crate::navigation::APP_TITLE;
use crate::text::{Line, Span, wrap};

pub const DRAWER_WIDTH: i32 = 34;

const ABOUT: &str = "Quick reference cheat sheets for programmers. Pick a language, \
                     browse its topics, and page through short examples.";

const KEYS: [(&str, &str); 8] = [
    ("↑ ↓", "move / scroll"),
    ("Enter", "open"),
    ("Esc", "back"),
    ("/", "search languages"),
    ("n p", "next / previous example"),
    ("Tab", "this menu"),
    ("q", "quit"),
    ("Ctrl-C", "quit"),
];

pub fn region(body: Region) -> Region {
    Region::new(body.x, body.y, DRAWER_WIDTH.min(body.width), body.height)
}

pub fn lines(ctx: Context<'_>, width: usize) -> Vec<Line> {
    let theme = ctx.theme;
    let accent = theme.primary();
    let mut lines = vec![
        Line::styled(APP_TITLE, theme.title(&accent)),
        Line::styled(format!("Version {}", env!("CARGO_PKG_VERSION")), theme.muted()),
        Line::new(),
        Line::styled("About", theme.heading()),
    ];
    lines.extend(wrap(&[Span::new(ABOUT, Default::default())], width));

    let languages = ctx.catalog.languages.len();
    let examples = ctx.catalog.example_count();
    lines.push(Line::styled(
        format!(
            "{}, {}",
            count(languages, "language", "languages"),
            count(examples, "example", "examples")
        ),
        theme.muted(),
    ));

    lines.push(Line::new());
    lines.push(Line::styled("Keys", theme.heading()));
    for (key, action) in KEYS {
        lines.push(
            Line::new()
                .with(format!("{key:<8}"), theme.badge(&accent))
                .with(action, Default::default()),
        );
    }
    lines
}

pub fn render(ctx: Context<'_>, canvas: &mut Canvas, body: Region) {
    let area = region(body);
    canvas.fill(area, &ctx.theme.drawer());
    let inner = area.inset(1).skip_rows(1);
    canvas.put_lines(inner, &lines(ctx, inner.width.max(1) as usize), 0);
}
