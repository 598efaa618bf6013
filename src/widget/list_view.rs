//! Selectable list of two-line rows (title over detail) with a right-hand badge.

use crossterm::event::KeyCode;
use rich::Color;

use crate::canvas::{Canvas, Region, Size};
use crate::text::{display_width, truncate};
use crate::theme::Theme;
use crate::widget::Widget;

/// Rows per item: title, detail, spacer.
pub const ITEM_HEIGHT: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct ListItem {
    pub title: String,
    pub detail: String,
    /// Short right-aligned note such as "3 categories".
    pub badge: String,
    pub accent: Color,
    /// Shown greyed out; still selectable.
    pub dimmed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListMessage {
    /// Enter pressed on the item at this index.
    Activated(usize),
}

pub struct ListView {
    items: Vec<ListItem>,
    selected: usize,
    offset: usize,
    /// Items that fit in the viewport.
    visible: usize,
    theme: Theme,
}

impl ListView {
    pub fn new(items: Vec<ListItem>, theme: Theme) -> Self {
        Self {
            items,
            selected: 0,
            offset: 0,
            visible: 1,
            theme,
        }
    }

    /// Restore the selection and scroll offset saved from a previous frame.
    pub fn with_state(mut self, selected: usize, offset: usize) -> Self {
        self.selected = selected.min(self.items.len().saturating_sub(1));
        self.offset = offset;
        self.scroll_into_view();
        self
    }

    /// Size the viewport to `height` rows.
    pub fn with_height(mut self, height: usize) -> Self {
        self.visible = (height / ITEM_HEIGHT).max(1);
        self.scroll_into_view();
        self
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.items.len().saturating_sub(1));
        self.scroll_into_view();
    }

    fn scroll_into_view(&mut self) {
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + self.visible {
            self.offset = self.selected + 1 - self.visible;
        }
        let max_offset = self.items.len().saturating_sub(self.visible);
        self.offset = self.offset.min(max_offset);
    }

    fn render_item(&self, canvas: &mut Canvas, region: Region, item: &ListItem, selected: bool) {
        let theme = &self.theme;
        let marker_style = theme.marker(&item.accent);
        let (title_style, detail_style, badge_style) = if item.dimmed {
            (theme.disabled(), theme.disabled(), theme.disabled())
        } else if selected {
            (theme.title(&item.accent), theme.muted(), theme.badge(&item.accent))
        } else {
            (theme.heading(), theme.muted(), theme.badge(&item.accent))
        };

        if selected {
            canvas.put_str(region.x, region.y, "▌", &marker_style);
            canvas.put_str(region.x, region.y + 1, "▌", &marker_style);
        }

        let width = region.width.max(0) as usize;
        let badge_width = display_width(&item.badge);
        let title_room = width.saturating_sub(2 + badge_width + 2);
        canvas.put_str(region.x + 2, region.y, &truncate(&item.title, title_room), &title_style);
        if badge_width > 0 && badge_width + 3 <= width {
            let badge_x = region.x + (width - badge_width - 1) as i32;
            canvas.put_str(badge_x, region.y, &item.badge, &badge_style);
        }

        let detail_room = width.saturating_sub(3);
        canvas.put_str(region.x + 2, region.y + 1, &truncate(&item.detail, detail_room), &detail_style);
    }
}

impl Widget<ListMessage> for ListView {
    fn render(&self, canvas: &mut Canvas, region: Region) {
        canvas.push_clip(region);
        let rows = self.items.iter().enumerate().skip(self.offset).take(self.visible);
        for (row, (index, item)) in rows.enumerate() {
            let y = region.y + (row * ITEM_HEIGHT) as i32;
            let item_region = Region::new(region.x, y, region.width, 2);
            self.render_item(canvas, item_region, item, index == self.selected);
        }
        canvas.pop_clip();
    }

    fn desired_size(&self) -> Size {
        let width = self
            .items
            .iter()
            .map(|item| display_width(&item.title) + display_width(&item.badge) + 5)
            .max()
            .unwrap_or(0);
        Size::new(
            width.min(u16::MAX as usize) as u16,
            (self.items.len() * ITEM_HEIGHT).min(u16::MAX as usize) as u16,
        )
    }

    fn on_event(&mut self, key: KeyCode) -> Option<ListMessage> {
        let last = self.items.len().saturating_sub(1);
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.select(self.selected.saturating_sub(1)),
            KeyCode::Down | KeyCode::Char('j') => self.select((self.selected + 1).min(last)),
            KeyCode::PageUp => self.select(self.selected.saturating_sub(self.visible)),
            KeyCode::PageDown => self.select((self.selected + self.visible).min(last)),
            KeyCode::Home | KeyCode::Char('g') => self.select(0),
            KeyCode::End | KeyCode::Char('G') => self.select(last),
            KeyCode::Enter if !self.items.is_empty() => {
                return Some(ListMessage::Activated(self.selected));
            }
            _ => {}
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<ListItem> {
        (0..n)
            .map(|i| ListItem {
                title: format!("Item {i}"),
                detail: format!("detail {i}"),
                badge: format!("{i} things"),
                accent: Color::Rgb(0, 0, 0),
                dimmed: false,
            })
            .collect()
    }

    #[test]
    fn moves_and_clamps_selection() {
        let mut list = ListView::new(items(3), Theme::monochrome()).with_height(9);
        assert_eq!(list.on_event(KeyCode::Up), None);
        assert_eq!(list.selected(), 0);
        list.on_event(KeyCode::Down);
        list.on_event(KeyCode::Char('j'));
        list.on_event(KeyCode::Down);
        assert_eq!(list.selected(), 2);
        assert_eq!(list.on_event(KeyCode::Enter), Some(ListMessage::Activated(2)));
    }

    #[test]
    fn scrolls_to_keep_selection_visible() {
        let mut list = ListView::new(items(10), Theme::monochrome()).with_height(6);
        for _ in 0..4 {
            list.on_event(KeyCode::Down);
        }
        assert_eq!(list.selected(), 4);
        assert_eq!(list.offset(), 3);
        list.on_event(KeyCode::Up);
        assert_eq!(list.offset(), 3);
        list.on_event(KeyCode::Home);
        assert_eq!(list.offset(), 0);
    }

    #[test]
    fn enter_on_empty_list_does_nothing() {
        let mut list = ListView::new(Vec::new(), Theme::monochrome());
        assert_eq!(list.on_event(KeyCode::Enter), None);
        assert!(list.is_empty());
    }

    #[test]
    fn restored_state_is_clamped() {
        let list = ListView::new(items(2), Theme::monochrome()).with_state(7, 5);
        assert_eq!(list.selected(), 1);
        assert_eq!(list.offset(), 1);
        let list = list.with_height(6);
        assert_eq!(list.offset(), 0);
    }

    #[test]
    fn renders_rows_with_badges() {
        let list = ListView::new(items(2), Theme::monochrome()).with_height(6);
        let mut canvas = Canvas::new(24, 5);
        let area = canvas.area();
        list.render(&mut canvas, area);
        insta::assert_snapshot!(canvas.to_text(), @r"
        ▌ Item 0       0 things
        ▌ detail 0

          Item 1       1 things
          detail 1
        ");
    }
}
