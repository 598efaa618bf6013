//! Single-line text input used to filter the language list.

use crossterm::event::KeyCode;

use crate::canvas::{Canvas, Region, Size};
use crate::text::{display_width, grapheme_byte_index, graphemes, truncate};
use crate::theme::Theme;
use crate::widget::Widget;

const PROMPT: &str = " / ";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputMessage {
    /// The text changed; carries the new value.
    Changed(String),
    Submitted,
    Cancelled,
}

#[derive(Clone, Debug)]
pub struct SearchInput {
    value: String,
    /// Cursor position in grapheme clusters.
    cursor: usize,
    placeholder: String,
    focused: bool,
    theme: Theme,
}

impl SearchInput {
    pub fn new(placeholder: impl Into<String>, theme: Theme) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            placeholder: placeholder.into(),
            focused: false,
            theme,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns true when there was something to clear.
    pub fn clear(&mut self) -> bool {
        let had_text = !self.value.is_empty();
        self.value.clear();
        self.cursor = 0;
        had_text
    }

    fn grapheme_count(&self) -> usize {
        graphemes(&self.value).count()
    }

    fn byte_index(&self, grapheme: usize) -> usize {
        grapheme_byte_index(&self.value, grapheme)
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        // A combining mark joins the previous cluster and leaves the count unchanged.
        self.cursor = self.cursor.saturating_add(1).min(self.grapheme_count());
    }

    fn delete_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = self.byte_index(self.cursor - 1);
        let end = self.byte_index(self.cursor);
        self.value.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    fn delete_at_cursor(&mut self) -> bool {
        if self.cursor >= self.grapheme_count() {
            return false;
        }
        let start = self.byte_index(self.cursor);
        let end = self.byte_index(self.cursor + 1);
        self.value.replace_range(start..end, "");
        true
    }

    fn changed(&self) -> Option<InputMessage> {
        Some(InputMessage::Changed(self.value.clone()))
    }
}

impl Widget<InputMessage> for SearchInput {
    fn render(&self, canvas: &mut Canvas, region: Region) {
        if region.is_empty() {
            return;
        }
        let field = Region::new(region.x, region.y, region.width, 1);
        canvas.push_clip(field);
        canvas.fill(field, &self.theme.input(self.focused));

        let text_x = canvas.put_str(field.x, field.y, PROMPT, &self.theme.muted());
        let room = (field.x + field.width - text_x - 1).max(0) as usize;

        if self.value.is_empty() {
            canvas.put_str(text_x, field.y, &truncate(&self.placeholder, room), &self.theme.muted());
            if self.focused {
                canvas.put_str(text_x, field.y, " ", &self.theme.cursor());
            }
        } else {
            let before: String = graphemes(&self.value).take(self.cursor).collect();
            // Keep the cursor in view by dropping text from the left.
            let skip = display_width(&before).saturating_sub(room);
            let mut x = text_x;
            let mut hidden = 0;
            for (i, g) in graphemes(&self.value).enumerate() {
                if hidden < skip {
                    hidden += display_width(g);
                    continue;
                }
                let style = if self.focused && i == self.cursor {
                    self.theme.cursor()
                } else {
                    Default::default()
                };
                x = canvas.put_str(x, field.y, g, &style);
            }
            if self.focused && self.cursor >= self.grapheme_count() {
                canvas.put_str(x, field.y, " ", &self.theme.cursor());
            }
        }
        canvas.pop_clip();
    }

    fn desired_size(&self) -> Size {
        let width = display_width(PROMPT) + display_width(&self.value).max(display_width(&self.placeholder)) + 1;
        Size::new(width.min(u16::MAX as usize) as u16, 1)
    }

    fn set_focus(&mut self, is_focused: bool) {
        self.focused = is_focused;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn on_event(&mut self, key: KeyCode) -> Option<InputMessage> {
        match key {
            KeyCode::Char(c) => {
                self.insert(c);
                self.changed()
            }
            KeyCode::Backspace if self.delete_before_cursor() => self.changed(),
            KeyCode::Delete if self.delete_at_cursor() => self.changed(),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.grapheme_count());
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = self.grapheme_count();
                None
            }
            KeyCode::Enter => Some(InputMessage::Submitted),
            KeyCode::Esc => Some(InputMessage::Cancelled),
            _ => None,
        }
    }
}
