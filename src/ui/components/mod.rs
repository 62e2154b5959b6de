pub mod about;
pub mod bottom_bar;
pub mod config_panel;
pub mod daily_word;
pub mod word_list;

use std::path::Path;

use chrono::NaiveDate;

use crate::app::Panel;
use crate::config::AppConfig;
use crate::ui::theme::Theme;
use crate::vocabulary::Vocabulary;

/// Read-only view of application state handed to panel renderers.
pub struct PanelContext<'a> {
    pub panel: Panel,
    pub config: &'a AppConfig,
    pub config_path: Option<&'a Path>,
    pub vocabulary: &'a Vocabulary,
    pub theme: &'a Theme,
    pub today: NaiveDate,
    pub word_list_offset: usize,
}

/// Left margin used by every bordered panel.
pub(crate) const MARGIN_X: u16 = 2;

impl PanelContext<'_> {
    /// Vocabulary words marked viewed. Viewed ids the word list no longer
    /// carries are not counted.
    pub fn viewed_count(&self) -> usize {
        self.vocabulary
            .words()
            .iter()
            .filter(|word| self.config.is_viewed(word.id))
            .count()
    }
}
