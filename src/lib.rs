//! CodeSheets: programming-language cheat sheets in the terminal.
//!
//! The catalog and inline markup live in the `catalog` and `rich` crates.
//! This crate holds the interactive browser ([`app::CodeSheets`]), the
//! command-line interface, and the rendering pieces they share.

pub mod ansi;
pub mod app;
pub mod canvas;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod log_init;
pub mod navigation;
pub mod screens;
pub mod testing;
pub mod text;
pub mod theme;
pub mod widget;

use std::time::Duration;

pub use crossterm::event::{Event, KeyCode, KeyEvent};
use crossterm::{cursor, event, execute, terminal};

pub use app::CodeSheets;
pub use canvas::{Canvas, Region, Size};
pub use error::{AppError, Result};
pub use navigation::{Navigator, Route};
pub use widget::Widget;

/// A full-screen terminal application.
///
/// `on_key` turns a key press into an optional message; `handle_message`
/// applies it. Rendering reads state only.
pub trait App {
    type Message;

    /// Draw the whole screen.
    fn render(&self, canvas: &mut Canvas);

    /// Handle a key event and optionally return a message.
    fn on_key(&mut self, key: KeyEvent) -> Option<Self::Message>;

    /// Apply a message produced by `on_key`.
    fn handle_message(&mut self, message: Self::Message);

    /// Called with the terminal size before the first frame and on resize.
    fn on_resize(&mut self, _size: Size) {}

    /// Return true when the application should exit.
    fn should_quit(&self) -> bool;

    /// Run the application event loop.
    ///
    /// The terminal is put back into its normal state even when the loop
    /// fails; the loop's error wins over a cleanup error.
    fn run(&mut self) -> Result<()> {
        let mut stdout = std::io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.event_loop();

        // Cleanup: Restore terminal state on exit
        let restored = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)
            .and_then(|()| terminal::disable_raw_mode());

        result?;
        restored?;
        Ok(())
    }

    /// Render, wait for input, repeat until `should_quit`.
    fn event_loop(&mut self) -> Result<()> {
        let (cols, rows) = terminal::size()?;
        let mut canvas = Canvas::new(cols, rows);
        self.on_resize(Size::new(cols, rows));
        log::debug!("terminal {cols}x{rows}");

        let mut dirty = true;
        while !self.should_quit() {
            if dirty {
                canvas.clear();
                self.render(&mut canvas);
                canvas.flush()?;
                dirty = false;
            }

            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key_event) => {
                        if let Some(msg) = self.on_key(key_event) {
                            self.handle_message(msg);
                        }
                        dirty = true;
                    }
                    Event::Resize(cols, rows) => {
                        canvas.resize(cols, rows);
                        self.on_resize(Size::new(cols, rows));
                        dirty = true;
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}
