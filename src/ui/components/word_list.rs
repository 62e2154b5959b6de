use crate::ui::canvas::Surface;
use crate::ui::components::{MARGIN_X, PanelContext};
use crate::ui::screen::Canvas;
use crate::vocabulary::Word;

const FIRST_ROW: u16 = 5;
const VIEWED_GLYPH: char = '*';

/// Number of word rows that fit in a word-list screen of `height` rows.
pub fn visible_rows(height: u16) -> usize {
    // Last usable row sits above the bottom border.
    height.saturating_sub(FIRST_ROW + 1) as usize
}

pub fn format_row(word: &Word, native: &str) -> String {
    format!(
        "[{}] {} (in {} languages)",
        word.id,
        native,
        word.translations.len()
    )
}

pub fn render<S: Surface + ?Sized>(canvas: &mut Canvas<'_, S>, ctx: &PanelContext<'_>) {
    let colors = &ctx.theme.colors;
    let bg = canvas.background();
    let language = ctx.config.default_language();
    let words = ctx.vocabulary.words();

    canvas.render_text("Word List", MARGIN_X, 1, colors.accent, bg);
    let viewed_count = ctx.viewed_count();
    let summary = format!(
        "Language: {language}   Viewed: {viewed_count}/{}",
        words.len()
    );
    canvas.render_text(&summary, MARGIN_X, 3, colors.muted, bg);

    let capacity = visible_rows(canvas.height());
    let offset = ctx.word_list_offset.min(words.len().saturating_sub(1));
    let remaining = words.len() - offset.min(words.len());
    // Keep the last row for the overflow note when everything does not fit.
    let shown = if remaining > capacity {
        capacity.saturating_sub(1)
    } else {
        remaining
    };

    for (i, word) in words.iter().skip(offset).take(shown).enumerate() {
        let y = FIRST_ROW + i as u16;
        let viewed = ctx.config.is_viewed(word.id);
        if viewed {
            canvas.put(MARGIN_X, y, VIEWED_GLYPH, colors.viewed, bg);
        }
        let native = ctx.vocabulary.get_word_in_language(word.id, language);
        let fg = if viewed { colors.viewed } else { colors.fg };
        canvas.render_text(&format_row(word, native), MARGIN_X + 2, y, fg, bg);
    }

    if shown < remaining && capacity > 0 {
        let more = format!("... {} more", remaining - shown);
        canvas.render_text(&more, MARGIN_X + 2, FIRST_ROW + shown as u16, colors.muted, bg);
    }
}
