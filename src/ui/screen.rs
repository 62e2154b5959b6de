use unicode_width::UnicodeWidthChar;

use crate::ui::canvas::Surface;
use crate::ui::layout::Viewport;

/// Appearance of a screen, fixed when the screen is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Style {
    pub show_border: bool,
    pub border_color: u8,
    pub background: u8,
}

impl Style {
    pub const fn bordered(border_color: u8, background: u8) -> Self {
        Self {
            show_border: true,
            border_color,
            background,
        }
    }

    pub const fn plain(background: u8) -> Self {
        Self {
            show_border: false,
            border_color: 0,
            background,
        }
    }
}

/// A styled drawing surface bound to one viewport.
///
/// Screens hold no derived text between frames; panels redraw everything
/// from application state each cycle.
#[derive(Clone, Debug)]
pub struct Screen {
    viewport: Viewport,
    style: Style,
}

impl Screen {
    pub fn new(viewport: Viewport, style: Style) -> Self {
        Self { viewport, style }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn width(&self) -> u16 {
        self.viewport.width
    }

    pub fn height(&self) -> u16 {
        self.viewport.height
    }

    pub fn move_and_resize(&mut self, viewport: Viewport) {
        self.viewport
            .move_and_resize(viewport.x, viewport.y, viewport.width, viewport.height);
    }

    pub fn clear<S: Surface + ?Sized>(&self, surface: &mut S) {
        let border = self.style.show_border.then_some(self.style.border_color);
        self.viewport.clear(surface, self.style.background, border);
    }

    /// Clear the screen and run `draw` against it in local coordinates.
    ///
    /// Does not flip the device buffer; the caller presents the frame once
    /// every screen for the cycle has drawn.
    pub fn render<S, F>(&self, surface: &mut S, draw: F)
    where
        S: Surface + ?Sized,
        F: FnOnce(&mut Canvas<'_, S>),
    {
        self.clear(surface);
        let mut canvas = Canvas {
            viewport: self.viewport,
            background: self.style.background,
            surface,
        };
        draw(&mut canvas);
    }
}

/// Display width of `text` in cells.
pub fn text_width(text: &str) -> u16 {
    let width: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    u16::try_from(width).unwrap_or(u16::MAX)
}

/// Local-coordinate drawing handle passed to panel render callbacks.
pub struct Canvas<'a, S: Surface + ?Sized> {
    viewport: Viewport,
    background: u8,
    surface: &'a mut S,
}

impl<S: Surface + ?Sized> Canvas<'_, S> {
    pub fn width(&self) -> u16 {
        self.viewport.width
    }

    pub fn height(&self) -> u16 {
        self.viewport.height
    }

    pub fn background(&self) -> u8 {
        self.background
    }

    /// Draw `text` starting at local (`x`, `y`), advancing by each glyph's
    /// display width. No wrapping: glyphs that do not fit are clipped.
    pub fn render_text(&mut self, text: &str, x: u16, y: u16, fg: u8, bg: u8) {
        if y >= self.viewport.height {
            return;
        }
        let mut column = x;
        for glyph in text.chars() {
            let width = glyph.width().unwrap_or(0) as u16;
            if width == 0 {
                continue;
            }
            match column.checked_add(width) {
                Some(end) if end <= self.viewport.width => {}
                _ => break,
            }
            self.viewport
                .write_cell(&mut *self.surface, column, y, glyph, fg, bg);
            column += width;
        }
    }

    pub fn put(&mut self, x: u16, y: u16, glyph: char, fg: u8, bg: u8) {
        self.viewport.write_cell(&mut *self.surface, x, y, glyph, fg, bg);
    }
}
