use crate::ui::canvas::Surface;
use crate::ui::components::{MARGIN_X, PanelContext};
use crate::ui::screen::Canvas;

pub fn render<S: Surface + ?Sized>(canvas: &mut Canvas<'_, S>, ctx: &PanelContext<'_>) {
    let colors = &ctx.theme.colors;
    let bg = canvas.background();
    let language = ctx.config.default_language();

    canvas.render_text("Word of the Day", MARGIN_X, 1, colors.accent, bg);
    let date = ctx.today.format("%A, %B %-d, %Y").to_string();
    canvas.render_text(&date, MARGIN_X, 2, colors.muted, bg);

    let Some(word) = ctx.vocabulary.word_of_the_day(ctx.today) else {
        canvas.render_text("No words loaded.", MARGIN_X, 4, colors.fg, bg);
        return;
    };

    let native = ctx.vocabulary.get_word_in_language(word.id, language);
    let headline = if native.is_empty() {
        format!("{language}: (no translation)")
    } else {
        format!("{language}: {native}")
    };
    canvas.render_text(&headline, MARGIN_X, 4, colors.fg, bg);

    let mut y = 6;
    for translation in word.translations.iter().filter(|t| t.language_code != language) {
        let line = if translation.anglicized.is_empty() {
            format!("{:<10} {}", translation.language_code, translation.native_form)
        } else {
            format!(
                "{:<10} {} ({})",
                translation.language_code, translation.native_form, translation.anglicized
            )
        };
        canvas.render_text(&line, MARGIN_X + 2, y, colors.fg, bg);
        y += 1;
    }

    if !word.usages.is_empty() {
        y += 1;
        canvas.render_text("Usage", MARGIN_X, y, colors.accent, bg);
        y += 1;
        for usage in &word.usages {
            let line = format!("{}: {}", usage.kind, usage.meaning);
            canvas.render_text(&line, MARGIN_X + 2, y, colors.fg, bg);
            y += 1;
        }
    }

    if let Some(at) = ctx.config.viewed_index().viewed_at(word.id) {
        let footer = format!("First viewed {at}");
        canvas.render_text(&footer, MARGIN_X, canvas.height().saturating_sub(2), colors.muted, bg);
    }
}
