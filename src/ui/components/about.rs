use crate::ui::canvas::Surface;
use crate::ui::components::{MARGIN_X, PanelContext};
use crate::ui::screen::Canvas;

const DESCRIPTION: &str = "DailyVocab presents a word of the day in different languages.";
const GRID_TOP: u16 = 6;
const COLUMN_WIDTH: u16 = 4;

/// Draw all 256 palette entries in columns, first as foreground then as
/// background colors. Columns that run off the right edge are clipped.
fn render_color_grid<S: Surface + ?Sized>(canvas: &mut Canvas<'_, S>, fg: u8, bg: u8) {
    // Stop three rows above the bottom so the grid clears the border.
    let last_row = canvas.height().saturating_sub(4);
    if last_row <= GRID_TOP {
        return;
    }
    let rows_per_column = last_row - GRID_TOP + 1;

    let mut column = MARGIN_X;
    let mut row = 0;
    for code in 0..=u8::MAX {
        canvas.render_text(&code.to_string(), column, GRID_TOP + row, code, bg);
        row += 1;
        if row >= rows_per_column {
            row = 0;
            column = column.saturating_add(COLUMN_WIDTH);
        }
    }

    column = column.saturating_add(COLUMN_WIDTH + 2);
    row = 0;
    for code in 0..=u8::MAX {
        canvas.render_text(&code.to_string(), column, GRID_TOP + row, fg, code);
        row += 1;
        if row >= rows_per_column {
            row = 0;
            column = column.saturating_add(COLUMN_WIDTH);
        }
    }
}

pub fn render<S: Surface + ?Sized>(canvas: &mut Canvas<'_, S>, ctx: &PanelContext<'_>) {
    let colors = &ctx.theme.colors;
    let bg = canvas.background();

    canvas.render_text("About", MARGIN_X, 1, colors.accent, bg);
    canvas.render_text(DESCRIPTION, MARGIN_X, 3, colors.fg, bg);
    canvas.render_text("Colors", MARGIN_X, 5, colors.accent, bg);
    render_color_grid(canvas, colors.fg, bg);
}
