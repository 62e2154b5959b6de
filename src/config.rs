use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::viewed::{ViewedWord, ViewedWords};

/// Dotfile in the user's home directory holding the configuration.
pub const CONFIG_FILE_NAME: &str = ".dailyvocab";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to access configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed configuration file {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unable to encode configuration: {0}")]
    Encode(#[source] serde_json::Error),
}

/// On-disk shape of the configuration file.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredConfig {
    #[serde(default = "default_language")]
    default_language: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    viewed_words: Vec<ViewedWord>,
}

fn default_language() -> String {
    "english".to_string()
}

/// Application configuration.
///
/// Owns the canonical viewed-word list together with the index derived from
/// it. Every path that changes the list, deserialization included, rebuilds
/// the index before returning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredConfig", into = "StoredConfig")]
pub struct AppConfig {
    default_language: String,
    viewed_words: Vec<ViewedWord>,
    viewed_index: ViewedWords,
}

impl From<StoredConfig> for AppConfig {
    fn from(stored: StoredConfig) -> Self {
        let viewed_index = ViewedWords::build(&stored.viewed_words);
        Self {
            default_language: stored.default_language,
            viewed_words: stored.viewed_words,
            viewed_index,
        }
    }
}

impl From<AppConfig> for StoredConfig {
    fn from(config: AppConfig) -> Self {
        Self {
            default_language: config.default_language,
            viewed_words: config.viewed_words,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        StoredConfig {
            default_language: default_language(),
            viewed_words: Vec::new(),
        }
        .into()
    }
}

impl AppConfig {
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn set_default_language(&mut self, language_code: &str) {
        self.default_language = language_code.to_string();
    }

    pub fn viewed_words(&self) -> &[ViewedWord] {
        &self.viewed_words
    }

    pub fn viewed_index(&self) -> &ViewedWords {
        &self.viewed_index
    }

    pub fn is_viewed(&self, id: i64) -> bool {
        self.viewed_index.is_viewed(id)
    }

    /// Record `id` as viewed at `timestamp`, replacing any earlier record for
    /// the same id, and rebuild the index.
    pub fn mark_viewed(&mut self, id: i64, timestamp: impl Into<String>) {
        self.viewed_words.retain(|v| v.id != id);
        self.viewed_words.push(ViewedWord {
            id,
            marked_viewed_at: timestamp.into(),
        });
        self.viewed_index = ViewedWords::build(&self.viewed_words);
    }

    /// Mark `id` viewed with the current time unless it already is.
    /// Returns true when the list changed.
    pub fn mark_viewed_now(&mut self, id: i64) -> bool {
        if self.is_viewed(id) {
            return false;
        }
        self.mark_viewed(id, Utc::now().to_rfc3339());
        true
    }

    pub fn from_json(bytes: &[u8], path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_slice(bytes).map_err(|source| ConfigError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read the configuration, writing the default file first if none exists.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("writing default configuration to {}", path.display());
            Self::default().save(path)?;
        }
        let bytes = fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&bytes, path)?;
        log::debug!(
            "configuration loaded: language={} viewed={}",
            config.default_language,
            config.viewed_words.len()
        );
        Ok(config)
    }

    /// Write via a temporary file and rename so a crash never leaves a
    /// truncated configuration behind.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        let json = serde_json::to_string_pretty(self).map_err(ConfigError::Encode)?;
        let tmp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&tmp_path).map_err(io_err)?;
        file.write_all(json.as_bytes()).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;
        fs::rename(&tmp_path, path).map_err(io_err)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE_NAME)
    }
}
