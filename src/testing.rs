//! Helpers for driving an [`App`] without a terminal.
//!
//! ```
//! use codesheets::testing::{Harness, key};
//! use codesheets::{CodeSheets, KeyCode, Route};
//! use codesheets::theme::Theme;
//!
//! let catalog = catalog::Catalog::embedded().unwrap();
//! let mut harness = Harness::new(CodeSheets::new(&catalog, Theme::monochrome()), 60, 20);
//! harness.press(KeyCode::Enter);
//! assert!(matches!(harness.app().navigator().current(), Route::CategoryList { .. }));
//! assert!(harness.render().to_text().contains("Basics & Syntax"));
//! # let _ = key('q');
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::App;
use crate::canvas::{Canvas, Size};

/// A plain key press for a character.
pub fn key(c: char) -> KeyCode {
    KeyCode::Char(c)
}

/// An app with a fixed screen size, fed one key at a time.
pub struct Harness<A: App> {
    app: A,
    size: Size,
}

impl<A: App> Harness<A> {
    pub fn new(mut app: A, width: u16, height: u16) -> Self {
        let size = Size::new(width, height);
        app.on_resize(size);
        Self { app, size }
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    /// Deliver a key press and apply the message it produces.
    pub fn press(&mut self, code: KeyCode) -> &mut Self {
        self.press_with(code, KeyModifiers::NONE)
    }

    pub fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) -> &mut Self {
        if let Some(message) = self.app.on_key(KeyEvent::new(code, modifiers)) {
            self.app.handle_message(message);
        }
        self
    }

    /// Type each character of `text`.
    pub fn type_text(&mut self, text: &str) -> &mut Self {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
        self
    }

    pub fn render(&self) -> Canvas {
        let mut canvas = Canvas::new(self.size.width, self.size.height);
        self.app.render(&mut canvas);
        canvas
    }
}
