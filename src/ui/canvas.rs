use ratatui::buffer::Buffer;
use ratatui::style::Color;

/// Device-level drawing capability: a grid of styled cells addressed in
/// physical terminal coordinates.
pub trait Surface {
    /// Device width and height in cells.
    fn size(&self) -> (u16, u16);

    /// Write one styled glyph at device coordinates. Writes outside the
    /// device area are ignored.
    fn put(&mut self, x: u16, y: u16, glyph: char, fg: u8, bg: u8);
}

impl Surface for Buffer {
    fn size(&self) -> (u16, u16) {
        (self.area.width, self.area.height)
    }

    fn put(&mut self, x: u16, y: u16, glyph: char, fg: u8, bg: u8) {
        if let Some(cell) = self.cell_mut((x, y)) {
            cell.set_char(glyph)
                .set_fg(Color::Indexed(fg))
                .set_bg(Color::Indexed(bg));
        }
    }
}

/// Read a horizontal run of glyphs back out of a buffer. Test helper.
#[cfg(test)]
pub fn row_text(buf: &Buffer, y: u16) -> String {
    let area = buf.area;
    (area.x..area.x + area.width)
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect()
}
