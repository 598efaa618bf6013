//! One example per page, with prev/next paging and vertical scroll.

use catalog::{Catalog, ExamplePager, Language};

use super::Context;
use crate::canvas::{Canvas, Region};
use crate::document::example_lines;
use crate::navigation::{Route, detail_examples};
use crate::text::{Line, display_width};

const PREV: &str = "‹ prev";
const NEXT: &str = "next ›";

/// The language and a pager positioned at the route's example.
///
/// `None` when the route is not a detail route or its ids are stale.
pub fn resolve<'a>(catalog: &'a Catalog, route: &Route) -> Option<(&'a Language, ExamplePager<'a>)> {
    let Route::Detail {
        language,
        category,
        subcategory,
        example_index,
    } = route
    else {
        return None;
    };
    let examples = detail_examples(catalog, language, category, subcategory.as_deref())?;
    let language = catalog.language(language)?;
    Some((language, ExamplePager::new(examples, *example_index)))
}

pub fn document_region(body: Region) -> Region {
    body.skip_rows(2).inset(1)
}

/// Page content for the pager's current example, laid out for `body`.
pub fn lines(ctx: Context<'_>, language: &Language, pager: &ExamplePager<'_>, body: Region) -> Vec<Line> {
    let width = document_region(body).width.max(1) as usize;
    match pager.current() {
        Some(example) => example_lines(example, &ctx.theme.accent(language), ctx.theme, width),
        None => vec![Line::styled("No examples yet.", ctx.theme.muted())],
    }
}

/// Largest scroll offset that still fills the region.
pub fn max_scroll(line_count: usize, body: Region) -> usize {
    line_count.saturating_sub(document_region(body).height.max(0) as usize)
}

fn render_pager_bar(ctx: Context<'_>, canvas: &mut Canvas, body: Region, language: &Language, pager: &ExamplePager<'_>) {
    let bar = body.inset(1).take_rows(1);
    let accent = ctx.theme.accent(language);
    let active = ctx.theme.badge(&accent);
    let inactive = ctx.theme.disabled();

    canvas.put_str(bar.x, bar.y, PREV, if pager.has_prev() { &active } else { &inactive });

    let label = pager.position_label();
    let label_x = bar.x + (bar.width - display_width(&label) as i32).max(0) / 2;
    canvas.put_str(label_x, bar.y, &label, &ctx.theme.muted());

    let next_x = bar.x + bar.width - display_width(NEXT) as i32;
    canvas.put_str(next_x, bar.y, NEXT, if pager.has_next() { &active } else { &inactive });
}

pub fn render(
    ctx: Context<'_>,
    canvas: &mut Canvas,
    body: Region,
    language: &Language,
    pager: &ExamplePager<'_>,
    scroll: usize,
) {
    render_pager_bar(ctx, canvas, body, language, pager);
    let lines = lines(ctx, language, pager, body);
    let scroll = scroll.min(max_scroll(lines.len(), body));
    canvas.put_lines(document_region(body), &lines, scroll);
}
