use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::config::AppConfig;
use crate::event::{Dispatch, EventListener, InputSource};
use crate::ui::canvas::Surface;
use crate::ui::components::{self, PanelContext};
use crate::ui::layout::{BOTTOM_BAR_ROWS, Viewport};
use crate::ui::screen::Screen;
use crate::ui::theme::Theme;
use crate::vocabulary::Vocabulary;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    DailyWord,
    WordList,
    Config,
    About,
}

impl Panel {
    pub fn title(self) -> &'static str {
        match self {
            Panel::DailyWord => "Word of the Day",
            Panel::WordList => "Word List",
            Panel::Config => "Config",
            Panel::About => "About",
        }
    }
}

/// One screen per panel plus the bottom bar, sharing two viewports.
pub struct Screens {
    daily_word: Screen,
    word_list: Screen,
    config: Screen,
    about: Screen,
    bottom_bar: Screen,
}

impl Screens {
    pub fn new(width: u16, height: u16, theme: &Theme) -> Self {
        let (main, bottom) = Viewport::partition(width, height, BOTTOM_BAR_ROWS);
        Self {
            daily_word: Screen::new(main, theme.daily_word_style()),
            word_list: Screen::new(main, theme.word_list_style()),
            config: Screen::new(main, theme.config_style()),
            about: Screen::new(main, theme.about_style()),
            bottom_bar: Screen::new(bottom, theme.bottom_bar_style()),
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        let (main, bottom) = Viewport::partition(width, height, BOTTOM_BAR_ROWS);
        for screen in [
            &mut self.daily_word,
            &mut self.word_list,
            &mut self.config,
            &mut self.about,
        ] {
            screen.move_and_resize(main);
        }
        self.bottom_bar.move_and_resize(bottom);
    }

    pub fn panel(&self, panel: Panel) -> &Screen {
        match panel {
            Panel::DailyWord => &self.daily_word,
            Panel::WordList => &self.word_list,
            Panel::Config => &self.config,
            Panel::About => &self.about,
        }
    }

    pub fn bottom_bar(&self) -> &Screen {
        &self.bottom_bar
    }
}

pub struct App {
    panel: Panel,
    /// Panel to return to when About is toggled off.
    previous_panel: Panel,
    running: bool,
    config: AppConfig,
    /// Where configuration changes are persisted; `None` keeps them in memory.
    config_path: Option<PathBuf>,
    /// Set when the configuration changed with nowhere to write it yet.
    unsaved: bool,
    vocabulary: Vocabulary,
    theme: Theme,
    screens: Screens,
    word_list_offset: usize,
    today: NaiveDate,
}

impl App {
    /// Build the app on the daily-word panel for `today` and mark that day's
    /// word viewed.
    pub fn new(
        config: AppConfig,
        vocabulary: Vocabulary,
        theme: Theme,
        (width, height): (u16, u16),
        today: NaiveDate,
    ) -> Self {
        let screens = Screens::new(width, height, &theme);
        let mut app = Self {
            panel: Panel::DailyWord,
            previous_panel: Panel::DailyWord,
            running: true,
            config,
            config_path: None,
            unsaved: false,
            vocabulary,
            theme,
            screens,
            word_list_offset: 0,
            today,
        };
        app.mark_daily_word_viewed();
        app
    }

    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        if self.unsaved {
            self.persist_config();
        }
        self
    }

    pub fn register_keypress_handlers<I: InputSource>(listener: &mut EventListener<App, I>) {
        listener.register_keypress_handler('d', App::show_daily_word);
        listener.register_keypress_handler('w', App::show_word_list);
        listener.register_keypress_handler('c', App::show_config);
        listener.register_keypress_handler('?', App::toggle_about);
        listener.register_keypress_handler('q', App::quit);
        listener.register_keypress_handler('l', App::cycle_language);
        listener.register_keypress_handler('j', App::scroll_down);
        listener.register_keypress_handler('k', App::scroll_up);
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn screens(&self) -> &Screens {
        &self.screens
    }

    pub fn word_list_offset(&self) -> usize {
        self.word_list_offset
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    fn switch_to(&mut self, panel: Panel) {
        if self.panel != panel {
            log::debug!("panel {:?} -> {:?}", self.panel, panel);
        }
        self.panel = panel;
    }

    pub fn show_daily_word(&mut self) {
        self.switch_to(Panel::DailyWord);
        self.mark_daily_word_viewed();
    }

    pub fn show_word_list(&mut self) {
        self.switch_to(Panel::WordList);
    }

    pub fn show_config(&mut self) {
        self.switch_to(Panel::Config);
    }

    pub fn toggle_about(&mut self) {
        if self.panel == Panel::About {
            match self.previous_panel {
                Panel::DailyWord => self.show_daily_word(),
                panel => self.switch_to(panel),
            }
        } else {
            self.previous_panel = self.panel;
            self.switch_to(Panel::About);
        }
    }

    pub fn quit(&mut self) {
        log::info!("quit requested");
        self.running = false;
    }

    /// Advance the default language to the next one the vocabulary knows.
    /// Only acts while the Config panel is showing.
    pub fn cycle_language(&mut self) {
        if self.panel != Panel::Config {
            return;
        }
        let languages = self.vocabulary.languages();
        if languages.is_empty() {
            return;
        }
        let next = languages
            .iter()
            .position(|l| *l == self.config.default_language())
            .map_or(0, |i| (i + 1) % languages.len());
        let language = languages[next].to_string();
        log::info!("default language set to {language}");
        self.config.set_default_language(&language);
        self.persist_config();
    }

    pub fn scroll_down(&mut self) {
        if self.panel == Panel::WordList {
            let last = self.vocabulary.len().saturating_sub(1);
            self.word_list_offset = (self.word_list_offset + 1).min(last);
        }
    }

    pub fn scroll_up(&mut self) {
        if self.panel == Panel::WordList {
            self.word_list_offset = self.word_list_offset.saturating_sub(1);
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        log::debug!("terminal resized to {width}x{height}");
        self.screens.resize(width, height);
    }

    fn mark_daily_word_viewed(&mut self) {
        let Some(id) = self.vocabulary.word_of_the_day(self.today).map(|w| w.id) else {
            return;
        };
        if self.config.mark_viewed_now(id) {
            log::info!("marked word {id} viewed");
            self.persist_config();
        }
    }

    fn persist_config(&mut self) {
        let Some(path) = &self.config_path else {
            self.unsaved = true;
            return;
        };
        match self.config.save(path) {
            Ok(()) => self.unsaved = false,
            Err(err) => log::error!("failed to save configuration: {err}"),
        }
    }

    fn context(&self) -> PanelContext<'_> {
        PanelContext {
            panel: self.panel,
            config: &self.config,
            config_path: self.config_path.as_deref(),
            vocabulary: &self.vocabulary,
            theme: &self.theme,
            today: self.today,
            word_list_offset: self.word_list_offset,
        }
    }

    /// Draw the active panel and then the bottom bar. Presenting the frame is
    /// left to the caller.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let ctx = self.context();
        let screen = self.screens.panel(self.panel);
        match self.panel {
            Panel::DailyWord => {
                screen.render(surface, |canvas| components::daily_word::render(canvas, &ctx))
            }
            Panel::WordList => {
                screen.render(surface, |canvas| components::word_list::render(canvas, &ctx))
            }
            Panel::Config => {
                screen.render(surface, |canvas| components::config_panel::render(canvas, &ctx))
            }
            Panel::About => screen.render(surface, |canvas| components::about::render(canvas, &ctx)),
        }
        self.screens
            .bottom_bar()
            .render(surface, |canvas| components::bottom_bar::render(canvas, &ctx));
    }

    /// Render one full frame and flip the terminal buffer once.
    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<(), B::Error> {
        terminal.draw(|frame| self.render(frame.buffer_mut()))?;
        Ok(())
    }
}

/// Main loop: one blocking wait, one render, until quit.
///
/// Keystrokes and config saves never end the loop. Only device failures do:
/// an error reading input or presenting a frame is returned to the caller,
/// whose terminal guard still restores the terminal.
pub fn run<B, I>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    listener: &mut EventListener<App, I>,
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    I: InputSource,
{
    app.draw(terminal)?;
    while app.is_running() {
        let dispatch = listener.wait_for_event(app).inspect_err(|err| {
            log::error!("input device failed: {err}");
        })?;
        match dispatch {
            Dispatch::Resized(width, height) => app.resize(width, height),
            Dispatch::Interrupted => app.quit(),
            Dispatch::Handled(_) | Dispatch::Ignored => {}
        }
        app.draw(terminal)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ScriptedInput;
    use crate::ui::canvas::row_text;
    use crate::ui::theme::ThemeColors;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    fn theme() -> Theme {
        Theme {
            name: "test".to_string(),
            colors: ThemeColors::default(),
        }
    }

    fn vocabulary() -> Vocabulary {
        Vocabulary::load(
            br#"[
                {"id": 1, "translations": [
                    {"languageCode": "english", "native": "hello"},
                    {"languageCode": "spanish", "native": "hola"}
                ]},
                {"id": 2, "translations": [{"languageCode": "english", "native": "water"}]}
            ]"#,
        )
        .unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn app() -> App {
        App::new(AppConfig::default(), vocabulary(), theme(), (80, 24), day())
    }

    #[test]
    fn starts_on_daily_word_and_marks_it_viewed() {
        let app = app();
        assert_eq!(app.panel(), Panel::DailyWord);
        assert!(app.is_running());
        let id = app.vocabulary().word_of_the_day(app.today()).unwrap().id;
        assert!(app.config().is_viewed(id));
        assert_eq!(app.config().viewed_words().len(), 1);
    }

    #[test]
    fn construction_marks_only_the_given_days_word() {
        let next = day().succ_opt().unwrap();
        let app = App::new(AppConfig::default(), vocabulary(), theme(), (80, 24), next);
        let expected = app.vocabulary().word_of_the_day(next).unwrap().id;
        let ids: Vec<i64> = app.config().viewed_words().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![expected]);
        assert_eq!(app.today(), next);
    }

    #[test]
    fn toggling_about_twice_returns_to_daily_word() {
        let mut app = app();
        app.toggle_about();
        assert_eq!(app.panel(), Panel::About);
        app.toggle_about();
        assert_eq!(app.panel(), Panel::DailyWord);
    }

    #[test]
    fn about_toggle_restores_previous_panel() {
        let mut app = app();
        app.show_config();
        app.toggle_about();
        app.toggle_about();
        assert_eq!(app.panel(), Panel::Config);
    }

    #[test]
    fn direct_navigation_is_unconditional() {
        let mut app = app();
        app.show_word_list();
        assert_eq!(app.panel(), Panel::WordList);
        app.toggle_about();
        app.show_config();
        assert_eq!(app.panel(), Panel::Config);
        app.show_daily_word();
        assert_eq!(app.panel(), Panel::DailyWord);
    }

    #[test]
    fn cycle_language_only_on_config_panel() {
        let mut app = app();
        app.cycle_language();
        assert_eq!(app.config().default_language(), "english");
        app.show_config();
        app.cycle_language();
        assert_eq!(app.config().default_language(), "spanish");
        app.cycle_language();
        assert_eq!(app.config().default_language(), "english");
    }

    #[test]
    fn scroll_is_clamped() {
        let mut app = app();
        app.scroll_down();
        assert_eq!(app.word_list_offset(), 0);
        app.show_word_list();
        app.scroll_up();
        assert_eq!(app.word_list_offset(), 0);
        for _ in 0..5 {
            app.scroll_down();
        }
        assert_eq!(app.word_list_offset(), 1);
    }

    #[test]
    fn render_draws_panel_and_bottom_bar() {
        let mut app = app();
        app.show_word_list();
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 24));
        app.render(&mut buf);
        let rows: Vec<String> = (0..24).map(|y| row_text(&buf, y)).collect();
        assert!(rows[0].starts_with('┌'));
        assert!(rows[20].starts_with('└'));
        assert!(rows.iter().any(|r| r.contains("[1] hello (in 2 languages)")));
        assert!(rows[21].contains("DailyVocab | Word List"));
    }

    #[test]
    fn resize_repartitions_screens() {
        let mut app = app();
        app.resize(100, 40);
        assert_eq!(app.screens().panel(Panel::About).viewport(), Viewport::new(0, 0, 100, 37));
        assert_eq!(app.screens().bottom_bar().viewport(), Viewport::new(0, 37, 100, 3));
    }

    #[test]
    fn quit_key_ends_loop_after_one_cycle() {
        use ratatui::backend::TestBackend;

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = app();
        let mut listener = EventListener::new(ScriptedInput::keys("wq?"));
        App::register_keypress_handlers(&mut listener);
        run(&mut terminal, &mut app, &mut listener).unwrap();
        assert!(!app.is_running());
        assert_eq!(app.panel(), Panel::WordList);
        assert_eq!(listener.input().remaining(), 1);
    }

    #[test]
    fn input_failure_ends_loop_with_error() {
        use ratatui::backend::TestBackend;

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = app();
        let mut listener = EventListener::new(ScriptedInput::keys("w"));
        App::register_keypress_handlers(&mut listener);
        let err = run(&mut terminal, &mut app, &mut listener).unwrap_err();
        let io = err.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::UnexpectedEof);
        assert_eq!(app.panel(), Panel::WordList);
        assert!(app.is_running());
    }

    #[test]
    fn persists_marks_to_config_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(".dailyvocab");
        let app = app().with_config_path(path.clone());
        let on_disk = AppConfig::load_or_create(&path).unwrap();
        assert_eq!(on_disk.viewed_words(), app.config().viewed_words());
    }
}
