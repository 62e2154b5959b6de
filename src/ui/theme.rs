use std::fs;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};

use crate::ui::screen::Style;

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

pub const DEFAULT_THEME: &str = "classic";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// 256-color palette indices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub bg: u8,
    pub fg: u8,
    pub accent: u8,
    pub muted: u8,
    pub viewed: u8,
    pub daily_word_border: u8,
    pub word_list_border: u8,
    pub config_border: u8,
    pub about_border: u8,
    pub bottom_bar_fg: u8,
    pub bottom_bar_bg: u8,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("dailyvocab")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                match toml::from_str::<Theme>(&content) {
                    Ok(theme) => return Some(theme),
                    Err(err) => log::warn!("ignoring theme {}: {err}", user_theme_path.display()),
                }
            }
        }

        let filename = format!("{name}.toml");
        let file = ThemeAssets::get(&filename)?;
        let content = std::str::from_utf8(file.data.as_ref()).ok()?;
        toml::from_str::<Theme>(content).ok()
    }

    pub fn available_themes() -> Vec<String> {
        ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect()
    }

    pub fn daily_word_style(&self) -> Style {
        Style::bordered(self.colors.daily_word_border, self.colors.bg)
    }

    pub fn word_list_style(&self) -> Style {
        Style::bordered(self.colors.word_list_border, self.colors.bg)
    }

    pub fn config_style(&self) -> Style {
        Style::bordered(self.colors.config_border, self.colors.bg)
    }

    pub fn about_style(&self) -> Style {
        Style::bordered(self.colors.about_border, self.colors.bg)
    }

    pub fn bottom_bar_style(&self) -> Style {
        Style::plain(self.colors.bottom_bar_bg)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load(DEFAULT_THEME).unwrap_or_else(|| Self {
            name: DEFAULT_THEME.to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: 0,
            fg: 255,
            accent: 214,
            muted: 244,
            viewed: 114,
            daily_word_border: 100,
            word_list_border: 100,
            config_border: 200,
            about_border: 218,
            bottom_bar_fg: 255,
            bottom_bar_bg: 236,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_themes_parse() {
        let names = Theme::available_themes();
        assert!(names.contains(&DEFAULT_THEME.to_string()));
        for name in names {
            let theme = Theme::load(&name);
            assert!(theme.is_some(), "bundled theme {name} failed to parse");
        }
    }

    #[test]
    fn unknown_theme_is_none() {
        assert!(Theme::load("no-such-theme").is_none());
    }

    #[test]
    fn partial_colors_fall_back_to_defaults() {
        let theme: Theme = toml::from_str(
            r#"
name = "partial"
[colors]
fg = 15
"#,
        )
        .unwrap();
        assert_eq!(theme.colors.fg, 15);
        assert_eq!(theme.colors.about_border, 218);
    }

    #[test]
    fn styles_carry_border_colors() {
        let theme = Theme {
            name: "t".to_string(),
            colors: ThemeColors::default(),
        };
        assert!(theme.about_style().show_border);
        assert_eq!(theme.about_style().border_color, 218);
        assert!(!theme.bottom_bar_style().show_border);
    }
}
