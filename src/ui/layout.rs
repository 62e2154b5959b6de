use crate::ui::canvas::Surface;
use crate::ui::screen::text_width;

/// Rows reserved at the bottom of the terminal for the key-hint bar.
pub const BOTTOM_BAR_ROWS: u16 = 3;

const BORDER_HORIZONTAL: char = '─';
const BORDER_VERTICAL: char = '│';
const BORDER_TOP_LEFT: char = '┌';
const BORDER_TOP_RIGHT: char = '┐';
const BORDER_BOTTOM_LEFT: char = '└';
const BORDER_BOTTOM_RIGHT: char = '┘';

/// A rectangular region of the physical terminal, in device cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Split the terminal into a main region and a fixed-height bottom region.
    ///
    /// Both span the full width. When `reserved_bottom_rows` is at least the
    /// total height the main region collapses to zero rows and the bottom
    /// region takes whatever height exists.
    pub fn partition(total_width: u16, total_height: u16, reserved_bottom_rows: u16) -> (Self, Self) {
        let bottom_height = reserved_bottom_rows.min(total_height);
        let main_height = total_height - bottom_height;
        (
            Self::new(0, 0, total_width, main_height),
            Self::new(0, main_height, total_width, bottom_height),
        )
    }

    pub fn move_and_resize(&mut self, x: u16, y: u16, width: u16, height: u16) {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
    }

    pub fn contains_local(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Write a glyph at viewport-local coordinates. Out-of-bounds writes are a no-op.
    pub fn write_cell<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x: u16,
        y: u16,
        glyph: char,
        fg: u8,
        bg: u8,
    ) {
        if !self.contains_local(x, y) {
            return;
        }
        surface.put(self.x.saturating_add(x), self.y.saturating_add(y), glyph, fg, bg);
    }

    /// Blank every cell of the viewport, then draw the border if requested.
    pub fn clear<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        background: u8,
        border_color: Option<u8>,
    ) {
        for y in 0..self.height {
            for x in 0..self.width {
                self.write_cell(surface, x, y, ' ', background, background);
            }
        }
        if let Some(color) = border_color {
            self.draw_border(surface, color, background);
        }
    }

    fn draw_border<S: Surface + ?Sized>(&self, surface: &mut S, fg: u8, bg: u8) {
        if self.width < 2 || self.height < 2 {
            return;
        }
        let right = self.width - 1;
        let bottom = self.height - 1;
        for x in 1..right {
            self.write_cell(surface, x, 0, BORDER_HORIZONTAL, fg, bg);
            self.write_cell(surface, x, bottom, BORDER_HORIZONTAL, fg, bg);
        }
        for y in 1..bottom {
            self.write_cell(surface, 0, y, BORDER_VERTICAL, fg, bg);
            self.write_cell(surface, right, y, BORDER_VERTICAL, fg, bg);
        }
        self.write_cell(surface, 0, 0, BORDER_TOP_LEFT, fg, bg);
        self.write_cell(surface, right, 0, BORDER_TOP_RIGHT, fg, bg);
        self.write_cell(surface, 0, bottom, BORDER_BOTTOM_LEFT, fg, bg);
        self.write_cell(surface, right, bottom, BORDER_BOTTOM_RIGHT, fg, bg);
    }
}

/// Gap between two hints on the same line.
const HINT_GAP: &str = "  ";

/// Pack key hints greedily into lines whose display width fits `width`.
/// A hint wider than `width` still gets a line of its own; drawing clips it.
pub fn pack_hint_lines(hints: &[&str], width: u16) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for hint in hints.iter().filter(|hint| !hint.is_empty()) {
        if !current.is_empty() {
            let joined = text_width(&current)
                .saturating_add(text_width(HINT_GAP))
                .saturating_add(text_width(hint));
            if joined <= width {
                current.push_str(HINT_GAP);
                current.push_str(hint);
                continue;
            }
            lines.push(std::mem::take(&mut current));
        }
        current.push_str(hint);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
