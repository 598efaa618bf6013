//! One module per screen. Each draws into the body region between the
//! header and footer bars.

pub mod category_list;
pub mod detail;
pub mod drawer;
pub mod home;
pub mod subcategory_list;

use catalog::Catalog;

use crate::canvas::{Canvas, Region};
use crate::navigation::Page;
use crate::text::Line;
use crate::theme::Theme;
use crate::widget::Widget;
use crate::widget::list_view::{ListItem, ListView};

/// What every screen reads from.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub catalog: &'a Catalog,
    pub theme: &'a Theme,
}

/// "1 example", "3 examples".
pub fn count(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// Region of the list under a banner of `header_rows` lines and a blank row.
pub fn list_region(body: Region, header_rows: usize) -> Region {
    body.skip_rows(header_rows as i32 + 1).inset(1)
}

/// Width available to a banner drawn in `body`.
pub fn banner_width(body: Region) -> usize {
    body.inset(1).width.max(1) as usize
}

/// Build the list widget for `page` sized to `region`.
pub fn list_view(ctx: Context<'_>, items: Vec<ListItem>, page: &Page, region: Region) -> ListView {
    ListView::new(items, ctx.theme.clone())
        .with_height(region.height.max(0) as usize)
        .with_state(page.selected, page.scroll)
}

/// A banner over a selectable list, the layout shared by the category and
/// subcategory screens.
pub fn render_list_screen(
    ctx: Context<'_>,
    canvas: &mut Canvas,
    body: Region,
    banner: &[Line],
    items: Vec<ListItem>,
    page: &Page,
) {
    canvas.put_lines(body.inset(1), banner, 0);
    let region = list_region(body, banner.len());
    if items.is_empty() {
        canvas.put_str(region.x, region.y, "Nothing here yet.", &ctx.theme.muted());
        return;
    }
    list_view(ctx, items, page, region).render(canvas, region);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_pluralize() {
        assert_eq!(count(1, "example", "examples"), "1 example");
        assert_eq!(count(0, "example", "examples"), "0 examples");
        assert_eq!(count(6, "subcategory", "subcategories"), "6 subcategories");
    }

    #[test]
    fn list_sits_below_banner() {
        let body = Region::new(0, 1, 40, 20);
        assert_eq!(list_region(body, 2), Region::new(1, 4, 38, 17));
        assert_eq!(banner_width(body), 38);
    }
}
