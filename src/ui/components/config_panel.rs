use crate::ui::canvas::Surface;
use crate::ui::components::{MARGIN_X, PanelContext};
use crate::ui::screen::{Canvas, text_width};

pub fn render<S: Surface + ?Sized>(canvas: &mut Canvas<'_, S>, ctx: &PanelContext<'_>) {
    let colors = &ctx.theme.colors;
    let bg = canvas.background();
    let current = ctx.config.default_language();

    canvas.render_text("Config", MARGIN_X, 1, colors.accent, bg);
    canvas.render_text(
        &format!("Default language: {current}"),
        MARGIN_X,
        3,
        colors.fg,
        bg,
    );

    let languages = ctx.vocabulary.languages();
    canvas.render_text("Available languages:", MARGIN_X, 5, colors.fg, bg);
    let mut x = MARGIN_X + 2;
    for language in &languages {
        let fg = if *language == current {
            colors.accent
        } else {
            colors.muted
        };
        canvas.render_text(language, x, 6, fg, bg);
        x = x.saturating_add(text_width(language).saturating_add(2));
    }
    if languages.is_empty() {
        canvas.render_text("(none)", MARGIN_X + 2, 6, colors.muted, bg);
    }

    let viewed = format!(
        "Words viewed: {} of {}",
        ctx.viewed_count(),
        ctx.vocabulary.len()
    );
    canvas.render_text(&viewed, MARGIN_X, 8, colors.fg, bg);

    if let Some(path) = ctx.config_path {
        let line = format!("Config file: {}", path.display());
        canvas.render_text(&line, MARGIN_X, 10, colors.muted, bg);
    }

    canvas.render_text(
        "Press [l] to switch the default language.",
        MARGIN_X,
        12,
        colors.muted,
        bg,
    );
}
