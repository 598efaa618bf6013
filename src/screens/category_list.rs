//! Categories of one language.

use catalog::{Category, Language};

use super::{Context, banner_width, count, render_list_screen};
use crate::canvas::{Canvas, Region};
use crate::document::banner;
use crate::navigation::Page;
use crate::text::Line;
use crate::widget::list_view::ListItem;

fn badge(category: &Category) -> String {
    if category.is_flat() {
        count(category.section_count(), "example", "examples")
    } else {
        count(category.section_count(), "subcategory", "subcategories")
    }
}

pub fn items(ctx: Context<'_>, language: &Language) -> Vec<ListItem> {
    let accent = ctx.theme.accent(language);
    language
        .categories
        .iter()
        .map(|category| ListItem {
            title: category.title.clone(),
            detail: category.description.clone(),
            badge: badge(category),
            accent: accent.clone(),
            dimmed: category.example_count() == 0,
        })
        .collect()
}

pub fn header(ctx: Context<'_>, language: &Language, body: Region) -> Vec<Line> {
    let accent = ctx.theme.accent(language);
    banner(&language.name, &language.description, &accent, ctx.theme, banner_width(body))
}

pub fn render(ctx: Context<'_>, canvas: &mut Canvas, body: Region, language: &Language, page: &Page) {
    let lines = header(ctx, language, body);
    render_list_screen(ctx, canvas, body, &lines, items(ctx, language), page);
}
