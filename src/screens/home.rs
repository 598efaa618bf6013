//! Language picker with a search field.

use catalog::Language;
use catalog::search::filter_searchable;

use super::{Context, count, list_view};
use crate::canvas::{Canvas, Region};
use crate::navigation::Page;
use crate::widget::Widget;
use crate::widget::list_view::ListItem;
use crate::widget::search_input::SearchInput;

pub const PLACEHOLDER: &str = "Search programming languages...";

/// Languages whose name matches `query`, in catalog order.
pub fn languages<'a>(ctx: Context<'a>, query: &str) -> Vec<&'a Language> {
    filter_searchable(&ctx.catalog.languages, query)
}

pub fn items(ctx: Context<'_>, languages: &[&Language]) -> Vec<ListItem> {
    languages
        .iter()
        .map(|language| ListItem {
            title: language.name.clone(),
            detail: language.description.clone(),
            badge: if language.is_empty() {
                "coming soon".to_string()
            } else {
                count(language.categories.len(), "category", "categories")
            },
            accent: ctx.theme.accent(language),
            dimmed: language.is_empty(),
        })
        .collect()
}

pub fn search_region(body: Region) -> Region {
    body.inset(1).take_rows(1)
}

pub fn list_region(body: Region) -> Region {
    body.skip_rows(2).inset(1)
}

pub fn render(ctx: Context<'_>, canvas: &mut Canvas, body: Region, search: &SearchInput, page: &Page) {
    search.render(canvas, search_region(body));

    let region = list_region(body);
    let languages = languages(ctx, search.value());
    if languages.is_empty() {
        let message = format!("No languages match \"{}\"", search.value());
        canvas.put_str(region.x, region.y, &message, &ctx.theme.muted());
        return;
    }
    list_view(ctx, items(ctx, &languages), page, region).render(canvas, region);
}
