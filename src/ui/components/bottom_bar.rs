use crate::app::Panel;
use crate::ui::canvas::Surface;
use crate::ui::components::PanelContext;
use crate::ui::layout::pack_hint_lines;
use crate::ui::screen::Canvas;

const GLOBAL_HINTS: &[&str] = &[
    "[d] Daily word",
    "[w] Word list",
    "[c] Config",
    "[?] About",
    "[q] Quit",
];

fn panel_hints(panel: Panel) -> &'static [&'static str] {
    match panel {
        Panel::WordList => &["[j/k] Scroll"],
        Panel::Config => &["[l] Language"],
        Panel::DailyWord | Panel::About => &[],
    }
}

pub fn render<S: Surface + ?Sized>(canvas: &mut Canvas<'_, S>, ctx: &PanelContext<'_>) {
    let colors = &ctx.theme.colors;
    let bg = canvas.background();

    let title = format!(" DailyVocab | {}", ctx.panel.title());
    canvas.render_text(&title, 0, 0, colors.accent, bg);

    let hints: Vec<&str> = panel_hints(ctx.panel)
        .iter()
        .chain(GLOBAL_HINTS)
        .copied()
        .collect();
    // Hints share the title's one-cell indent.
    let lines = pack_hint_lines(&hints, canvas.width().saturating_sub(1));
    for (i, line) in lines.iter().enumerate() {
        let Ok(row) = u16::try_from(i + 1) else {
            break;
        };
        canvas.render_text(line, 1, row, colors.bottom_bar_fg, bg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::ui::canvas::row_text;
    use crate::ui::layout::Viewport;
    use crate::ui::screen::{Screen, Style};
    use crate::ui::theme::{Theme, ThemeColors};
    use crate::vocabulary::Vocabulary;
    use chrono::NaiveDate;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    fn draw(panel: Panel, width: u16) -> Vec<String> {
        let config = AppConfig::default();
        let vocabulary = Vocabulary::default();
        let theme = Theme {
            name: "test".to_string(),
            colors: ThemeColors::default(),
        };
        let ctx = PanelContext {
            panel,
            config: &config,
            config_path: None,
            vocabulary: &vocabulary,
            theme: &theme,
            today: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            word_list_offset: 0,
        };
        let mut buf = Buffer::empty(Rect::new(0, 0, width, 3));
        Screen::new(Viewport::new(0, 0, width, 3), Style::plain(236))
            .render(&mut buf, |canvas| render(canvas, &ctx));
        (0..3).map(|y| row_text(&buf, y)).collect()
    }

    #[test]
    fn names_active_panel_and_lists_keys() {
        let rows = draw(Panel::WordList, 120);
        assert!(rows[0].contains("DailyVocab | Word List"));
        assert!(rows[1].contains("[j/k] Scroll"));
        assert!(rows[1].contains("[q] Quit"));
    }

    #[test]
    fn narrow_bar_wraps_then_clips() {
        let rows = draw(Panel::DailyWord, 30);
        assert!(rows[1].starts_with(" [d] Daily word  [w] Word list"));
        assert!(rows[2].contains("[c] Config"));
        assert!(!rows.join("").contains("[q] Quit"));
    }
}
