use crossterm::{
    cursor, execute,
    style::{Attribute, Color as TermColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
};
use rich::{Color, Style, TextStyle};
use std::io::{BufWriter, Write};

use crate::text::{Line, display_width, graphemes};

/// The physical dimensions of a widget or terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    /// Create a new Size with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A signed rectangular region for layout and clipping.
///
/// Coordinates are signed (i32) to allow off-screen positioning (e.g. scrolling).
/// Width and height are clamped to be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// Create a new region, clamping width and height to be non-negative.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Returns the intersection of this region with another.
    /// If there is no overlap, returns an empty region.
    pub fn intersection(&self, other: &Region) -> Region {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.x.saturating_add(self.width).min(other.x.saturating_add(other.width));
        let y2 = self.y.saturating_add(self.height).min(other.y.saturating_add(other.height));

        if x2 > x1 && y2 > y1 {
            Region::new(x1, y1, x2 - x1, y2 - y1)
        } else {
            Region::default()
        }
    }

    /// Returns true if the region has no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Rows `top..` of this region, dropping `top` rows from the start.
    pub fn skip_rows(&self, top: i32) -> Region {
        let top = top.clamp(0, self.height);
        Region::new(self.x, self.y + top, self.width, self.height - top)
    }

    /// The first `rows` rows of this region.
    pub fn take_rows(&self, rows: i32) -> Region {
        Region::new(self.x, self.y, self.width, rows.min(self.height))
    }

    /// Shrink by `dx` columns on each side.
    pub fn inset(&self, dx: i32) -> Region {
        Region::new(self.x + dx, self.y, self.width - 2 * dx, self.height)
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    /// One grapheme cluster.
    pub symbol: String,
    pub fg: Option<TermColor>,
    pub bg: Option<TermColor>,
    pub attrs: TextStyle,
    /// Right half of a double-width grapheme drawn in the cell to the left.
    pub continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: " ".to_string(),
            fg: None,
            bg: None,
            attrs: TextStyle::empty(),
            continuation: false,
        }
    }
}

pub fn to_crossterm_color(color: &Color) -> TermColor {
    let (r, g, b) = color.to_rgb();
    TermColor::Rgb { r, g, b }
}

pub struct Canvas {
    size: Size,
    cells: Vec<Cell>,
    /// Previous frame's cells for differential rendering.
    /// Only cells that differ from prev_cells are written to the terminal.
    prev_cells: Vec<Cell>,
    /// Whether this is the first flush (requires full redraw).
    first_flush: bool,
    /// Stack of clipping regions. The active clip is the intersection of all.
    clip_stack: Vec<Region>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        let cell_count = width as usize * height as usize;
        Self {
            size: Size { width, height },
            cells: vec![Cell::default(); cell_count],
            prev_cells: vec![Cell::default(); cell_count],
            first_flush: true,
            clip_stack: Vec::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The whole canvas as a region.
    pub fn area(&self) -> Region {
        Region::new(0, 0, self.size.width as i32, self.size.height as i32)
    }

    /// Resize to the new terminal size, forcing a full redraw.
    pub fn resize(&mut self, width: u16, height: u16) {
        *self = Canvas::new(width, height);
    }

    // === Clipping ===

    /// Pushes a new clipping region onto the stack.
    /// The effective clip becomes the intersection of current clip and new region.
    pub fn push_clip(&mut self, region: Region) {
        let current = self.current_clip();
        let intersection = region.intersection(&current);
        self.clip_stack.push(intersection);
    }

    /// Removes the most recent clipping region.
    pub fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }

    /// Returns the current effective clipping region.
    /// If stack is empty, returns the full screen.
    fn current_clip(&self) -> Region {
        self.clip_stack.last().copied().unwrap_or_else(|| self.area())
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.size.width as i32 || y < 0 || y >= self.size.height as i32 {
            return None;
        }
        Some(y as usize * self.size.width as usize + x as usize)
    }

    // === Drawing ===

    /// Writes a string to the canvas at (x, y), one grapheme per cell.
    ///
    /// Double-width graphemes take two cells and are dropped whole when the
    /// second cell would fall outside the clip. A style without a background
    /// keeps the background already on the canvas. Returns the column after
    /// the last grapheme, clipped or not.
    pub fn put_str(&mut self, x: i32, y: i32, s: &str, style: &Style) -> i32 {
        let clip = self.current_clip();
        let mut current_x = x;

        if y < clip.y || y >= clip.bottom() {
            return current_x + display_width(s) as i32;
        }

        let fg = style.fg.as_ref().map(to_crossterm_color);
        let bg = style.bg.as_ref().map(to_crossterm_color);

        for g in graphemes(s) {
            let width = display_width(g) as i32;
            if width == 0 {
                continue;
            }
            if current_x >= clip.x + clip.width {
                current_x += width;
                continue;
            }
            let fits = current_x >= clip.x && current_x + width <= clip.x + clip.width;
            if let (true, Some(index)) = (fits, self.index(current_x, y)) {
                // Preserve existing background if new bg is None
                let new_bg = bg.or(self.cells[index].bg);
                self.cells[index] = Cell {
                    symbol: g.to_string(),
                    fg,
                    bg: new_bg,
                    attrs: style.text,
                    continuation: false,
                };
                if width == 2 {
                    if let Some(next) = self.index(current_x + 1, y) {
                        self.cells[next] = Cell {
                            symbol: String::new(),
                            bg: new_bg,
                            continuation: true,
                            ..Cell::default()
                        };
                    }
                }
            }
            current_x += width;
        }
        current_x
    }

    /// Paint every cell of `region` (within the clip) with `style`'s background.
    pub fn fill(&mut self, region: Region, style: &Style) {
        let area = region.intersection(&self.current_clip());
        let blank = Cell {
            bg: style.bg.as_ref().map(to_crossterm_color),
            fg: style.fg.as_ref().map(to_crossterm_color),
            attrs: style.text,
            ..Cell::default()
        };
        for y in area.y..area.bottom() {
            for x in area.x..area.x + area.width {
                if let Some(index) = self.index(x, y) {
                    self.cells[index] = blank.clone();
                }
            }
        }
    }

    /// Draw a styled line at (x, y) clipped to `width` columns.
    ///
    /// A line with a `fill` style paints the whole width first.
    pub fn put_line(&mut self, x: i32, y: i32, width: i32, line: &Line) {
        self.push_clip(Region::new(x, y, width, 1));
        if let Some(fill) = &line.fill {
            self.fill(Region::new(x, y, width, 1), fill);
        }
        let mut current_x = x;
        for span in &line.spans {
            current_x = self.put_str(current_x, y, &span.text, &span.style);
        }
        self.pop_clip();
    }

    /// Draw `lines` into `region`, starting from line `scroll`.
    pub fn put_lines(&mut self, region: Region, lines: &[Line], scroll: usize) {
        for (row, line) in lines.iter().skip(scroll).take(region.height as usize).enumerate() {
            self.put_line(region.x, region.y + row as i32, region.width, line);
        }
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        // Use BufWriter with locked stdout to batch writes and reduce syscalls.
        let stdout = std::io::stdout();
        let mut out = BufWriter::with_capacity(8192, stdout.lock());

        // First flush requires full redraw
        if self.first_flush {
            self.flush_full(&mut out)?;
            self.first_flush = false;
        } else {
            self.flush_diff(&mut out)?;
        }

        // Keep this frame for the next diff
        self.prev_cells.clone_from(&self.cells);

        out.flush()?;
        Ok(())
    }

    fn reset<W: Write>(out: &mut W) -> std::io::Result<()> {
        execute!(
            out,
            SetForegroundColor(TermColor::Reset),
            SetBackgroundColor(TermColor::Reset),
            SetAttribute(Attribute::Reset)
        )
    }

    /// Full flush - redraws entire screen (used on first render).
    fn flush_full<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let width = self.size.width as usize;
        if width == 0 {
            return Ok(());
        }
        Self::reset(out)?;

        let mut last = Pen::reset();
        for (row_idx, row) in self.cells.chunks(width).enumerate() {
            execute!(out, cursor::MoveTo(0, row_idx as u16))?;
            for cell in row.iter().filter(|cell| !cell.continuation) {
                Self::emit_cell(out, cell, &mut last)?;
            }
        }
        Ok(())
    }

    /// Differential flush - only redraws changed cells.
    fn flush_diff<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        // Start from a known style baseline so the first changed cell does
        // not inherit stale colors.
        Self::reset(out)?;

        let mut last = Pen::unknown();
        let mut cursor_pos: Option<(usize, usize)> = None;
        let width = self.size.width as usize;

        for (i, (cell, prev)) in self.cells.iter().zip(self.prev_cells.iter()).enumerate() {
            if cell == prev || cell.continuation {
                continue;
            }

            let x = i % width;
            let y = i / width;

            if cursor_pos != Some((x, y)) {
                execute!(out, cursor::MoveTo(x as u16, y as u16))?;
                Self::reset(out)?;
                last = Pen::unknown();
            }

            Self::emit_cell(out, cell, &mut last)?;
            cursor_pos = Some((x + display_width(&cell.symbol).max(1), y));
        }

        Ok(())
    }

    /// Emit a single cell, sending escape codes only for what changed.
    fn emit_cell<W: Write>(out: &mut W, cell: &Cell, last: &mut Pen) -> std::io::Result<()> {
        if last.attrs != Some(cell.attrs) {
            execute!(out, SetAttribute(Attribute::Reset))?;
            for (flag, attribute) in ATTRIBUTES {
                if cell.attrs.contains(flag) {
                    execute!(out, SetAttribute(attribute))?;
                }
            }
            last.attrs = Some(cell.attrs);
            // Attribute reset clears colors too
            last.fg = None;
            last.bg = None;
        }

        if last.fg != Some(cell.fg) {
            execute!(out, SetForegroundColor(cell.fg.unwrap_or(TermColor::Reset)))?;
            last.fg = Some(cell.fg);
        }
        if last.bg != Some(cell.bg) {
            execute!(out, SetBackgroundColor(cell.bg.unwrap_or(TermColor::Reset)))?;
            last.bg = Some(cell.bg);
        }

        write!(out, "{}", cell.symbol)?;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
        self.clip_stack.clear();
    }

    /// Force a full redraw on the next flush.
    /// Call this after resize or when the terminal state is unknown.
    pub fn invalidate(&mut self) {
        self.first_flush = true;
    }

    // === Test helpers ===

    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|index| &self.cells[index])
    }

    /// Get all symbols in a row as a string for testing.
    pub fn row_str(&self, y: i32) -> String {
        if y < 0 || y >= self.size.height as i32 {
            return String::new();
        }
        let start = y as usize * self.size.width as usize;
        let end = start + self.size.width as usize;
        self.cells[start..end]
            .iter()
            .map(|c| c.symbol.as_str())
            .collect()
    }

    /// Serialize canvas to plain text for snapshot testing.
    /// Each row becomes a line, trimmed of trailing whitespace.
    pub fn to_text(&self) -> String {
        (0..self.size.height as i32)
            .map(|y| self.row_str(y).trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub(crate) const ATTRIBUTES: [(TextStyle, Attribute); 6] = [
    (TextStyle::BOLD, Attribute::Bold),
    (TextStyle::DIM, Attribute::Dim),
    (TextStyle::ITALIC, Attribute::Italic),
    (TextStyle::UNDERLINE, Attribute::Underlined),
    (TextStyle::STRIKE, Attribute::CrossedOut),
    (TextStyle::REVERSE, Attribute::Reverse),
];

/// Terminal style state as last emitted. `None` means unknown.
struct Pen {
    fg: Option<Option<TermColor>>,
    bg: Option<Option<TermColor>>,
    attrs: Option<TextStyle>,
}

impl Pen {
    fn unknown() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// State right after a full reset.
    fn reset() -> Self {
        Self {
            fg: Some(None),
            bg: Some(None),
            attrs: Some(TextStyle::empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_clips_to_canvas() {
        let mut canvas = Canvas::new(5, 1);
        let end = canvas.put_str(2, 0, "hello", &Style::new());
        assert_eq!(end, 7);
        assert_eq!(canvas.row_str(0), "  hel");
    }

    #[test]
    fn clip_stack_limits_drawing() {
        let mut canvas = Canvas::new(10, 2);
        canvas.push_clip(Region::new(1, 0, 3, 1));
        canvas.put_str(0, 0, "abcdef", &Style::new());
        canvas.put_str(0, 1, "abcdef", &Style::new());
        canvas.pop_clip();
        assert_eq!(canvas.to_text(), " bcd\n");
    }

    #[test]
    fn wide_graphemes_take_two_cells() {
        let mut canvas = Canvas::new(6, 1);
        let end = canvas.put_str(0, 0, "日本x", &Style::new());
        assert_eq!(end, 5);
        assert_eq!(canvas.to_text(), "日本x");
        assert!(canvas.cell(1, 0).unwrap().continuation);
    }

    #[test]
    fn wide_grapheme_cut_by_clip_is_dropped() {
        let mut canvas = Canvas::new(3, 1);
        canvas.put_str(0, 0, "a日本", &Style::new());
        assert_eq!(canvas.to_text(), "a日");
    }

    #[test]
    fn put_str_keeps_background() {
        let mut canvas = Canvas::new(4, 1);
        let bg = Style::new().with_bg(Color::Rgb(1, 2, 3));
        canvas.fill(canvas.area(), &bg);
        canvas.put_str(0, 0, "x", &Style::modifiers(TextStyle::BOLD));
        let cell = canvas.cell(0, 0).unwrap();
        assert_eq!(cell.bg, Some(TermColor::Rgb { r: 1, g: 2, b: 3 }));
        assert!(cell.attrs.contains(TextStyle::BOLD));
    }

    #[test]
    fn put_lines_scrolls() {
        let mut canvas = Canvas::new(4, 2);
        let lines: Vec<Line> = ["one", "two", "six"]
            .iter()
            .map(|t| Line::styled(*t, Style::new()))
            .collect();
        canvas.put_lines(canvas.area(), &lines, 1);
        assert_eq!(canvas.to_text(), "two\nsix");
    }

    #[test]
    fn region_helpers() {
        let region = Region::new(0, 2, 10, 5);
        assert_eq!(region.skip_rows(2), Region::new(0, 4, 10, 3));
        assert_eq!(region.take_rows(9), region);
        assert_eq!(region.inset(1), Region::new(1, 2, 8, 5));
        assert!(Region::new(0, 0, 5, 5).intersection(&Region::new(6, 6, 1, 1)).is_empty());
    }
}
