//! Subcategories of a nested category.

use catalog::{Category, Language};

use super::{Context, banner_width, count, render_list_screen};
use crate::canvas::{Canvas, Region};
use crate::document::banner;
use crate::navigation::Page;
use crate::text::Line;
use crate::widget::list_view::ListItem;

pub fn items(ctx: Context<'_>, language: &Language, category: &Category) -> Vec<ListItem> {
    let accent = ctx.theme.accent(language);
    category
        .subcategories()
        .iter()
        .map(|subcategory| ListItem {
            title: subcategory.title.clone(),
            detail: subcategory.description.clone(),
            badge: count(subcategory.examples.len(), "example", "examples"),
            accent: accent.clone(),
            dimmed: subcategory.examples.is_empty(),
        })
        .collect()
}

pub fn header(ctx: Context<'_>, language: &Language, category: &Category, body: Region) -> Vec<Line> {
    let accent = ctx.theme.accent(language);
    banner(&category.title, &category.description, &accent, ctx.theme, banner_width(body))
}

pub fn render(
    ctx: Context<'_>,
    canvas: &mut Canvas,
    body: Region,
    language: &Language,
    category: &Category,
    page: &Page,
) {
    let lines = header(ctx, language, category, body);
    render_list_screen(ctx, canvas, body, &lines, items(ctx, language, category), page);
}
