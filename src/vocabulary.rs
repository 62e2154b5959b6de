use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Word-list file looked up relative to the working directory.
pub const WORD_LIST_FILE_NAME: &str = "wordlist.json";

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("unable to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed word list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A word written in one language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedWord {
    pub language_code: String,
    #[serde(rename = "native")]
    pub native_form: String,
    /// Latin-alphabet spelling for non-Latin scripts.
    #[serde(default)]
    pub anglicized: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordUsage {
    #[serde(rename = "type")]
    pub kind: String,
    pub meaning: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: i64,
    #[serde(default)]
    pub translations: Vec<LocalizedWord>,
    #[serde(default, rename = "usage")]
    pub usages: Vec<WordUsage>,
}

impl Word {
    /// Native form in `language_code`, if this word has that translation.
    pub fn translation(&self, language_code: &str) -> Option<&LocalizedWord> {
        self.translations
            .iter()
            .rev()
            .find(|t| t.language_code == language_code)
    }
}

/// The word corpus, loaded once at startup and read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    words: Vec<Word>,
}

impl Vocabulary {
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Decode a JSON array of word records.
    pub fn load(bytes: &[u8]) -> Result<Self, VocabularyError> {
        let words: Vec<Word> = serde_json::from_slice(bytes)?;
        let vocabulary = Self { words };
        for id in vocabulary.duplicate_ids() {
            log::warn!("word id {id} appears more than once; the last entry wins");
        }
        Ok(vocabulary)
    }

    pub fn load_file(path: &Path) -> Result<Self, VocabularyError> {
        let bytes = fs::read(path).map_err(|source| VocabularyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let vocabulary = Self::load(&bytes)?;
        log::info!("loaded {} words from {}", vocabulary.len(), path.display());
        Ok(vocabulary)
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up a word by id. With duplicate ids the last record wins.
    pub fn get_word(&self, id: i64) -> Option<&Word> {
        self.words.iter().rev().find(|w| w.id == id)
    }

    /// Native form of word `id` in `language_code`, or an empty string when
    /// either the word or that translation is missing.
    pub fn get_word_in_language(&self, id: i64, language_code: &str) -> &str {
        self.get_word(id)
            .and_then(|w| w.translation(language_code))
            .map(|t| t.native_form.as_str())
            .unwrap_or("")
    }

    /// Distinct language codes in first-seen order.
    pub fn languages(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for translation in self.words.iter().flat_map(|w| &w.translations) {
            if !seen.contains(&translation.language_code.as_str()) {
                seen.push(&translation.language_code);
            }
        }
        seen
    }

    /// Ids carried by more than one record, ascending.
    pub fn duplicate_ids(&self) -> Vec<i64> {
        let mut counts: HashMap<i64, usize> = HashMap::new();
        for word in &self.words {
            *counts.entry(word.id).or_default() += 1;
        }
        let mut dupes: Vec<i64> = counts
            .into_iter()
            .filter(|&(_, n)| n > 1)
            .map(|(id, _)| id)
            .collect();
        dupes.sort_unstable();
        dupes
    }

    /// Deterministic pick for a calendar day; stable for the whole day.
    pub fn word_of_the_day(&self, date: NaiveDate) -> Option<&Word> {
        if self.words.is_empty() {
            return None;
        }
        let day = date.num_days_from_ce().unsigned_abs() as usize;
        self.words.get(day % self.words.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"id": 1, "translations": [
            {"languageCode": "en", "native": "hello"},
            {"languageCode": "ja", "native": "こんにちは", "anglicized": "konnichiwa"}
        ], "usage": [{"type": "interjection", "meaning": "a greeting"}]},
        {"id": 2, "translations": [{"languageCode": "en", "native": "water"}]},
        {"id": 3, "translations": [{"languageCode": "fr", "native": "merci"}], "usage": []}
    ]"#;

    fn sample() -> Vocabulary {
        Vocabulary::load(SAMPLE.as_bytes()).unwrap()
    }

    #[test]
    fn load_decodes_all_fields() {
        let vocab = sample();
        assert_eq!(vocab.len(), 3);
        let hello = vocab.get_word(1).unwrap();
        assert_eq!(hello.translations[1].anglicized, "konnichiwa");
        assert_eq!(hello.usages[0].kind, "interjection");
        assert!(vocab.get_word(2).unwrap().usages.is_empty());
    }

    #[test]
    fn get_word_returns_matching_id_for_every_record() {
        let vocab = sample();
        for word in vocab.words() {
            assert_eq!(vocab.get_word(word.id).unwrap().id, word.id);
        }
        assert!(vocab.get_word(42).is_none());
    }

    #[test]
    fn missing_translation_is_empty_string() {
        let vocab = sample();
        assert_eq!(vocab.get_word_in_language(1, "en"), "hello");
        assert_eq!(vocab.get_word_in_language(1, "fr"), "");
        assert_eq!(vocab.get_word_in_language(99, "en"), "");
    }

    #[test]
    fn malformed_input_is_decode_error() {
        let err = Vocabulary::load(b"{\"id\": 1").unwrap_err();
        assert!(matches!(err, VocabularyError::Decode(_)));
        let err = Vocabulary::load(br#"[{"translations": []}]"#).unwrap_err();
        assert!(matches!(err, VocabularyError::Decode(_)));
    }

    #[test]
    fn duplicate_ids_last_record_wins() {
        let json = r#"[
            {"id": 7, "translations": [{"languageCode": "en", "native": "first"}]},
            {"id": 8, "translations": []},
            {"id": 7, "translations": [{"languageCode": "en", "native": "second"}]}
        ]"#;
        let vocab = Vocabulary::load(json.as_bytes()).unwrap();
        assert_eq!(vocab.duplicate_ids(), vec![7]);
        assert_eq!(vocab.get_word_in_language(7, "en"), "second");
    }

    #[test]
    fn languages_in_first_seen_order() {
        assert_eq!(sample().languages(), vec!["en", "ja", "fr"]);
    }

    #[test]
    fn word_of_the_day_is_stable_and_cycles() {
        let vocab = sample();
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let next = day.succ_opt().unwrap();
        let a = vocab.word_of_the_day(day).unwrap().id;
        assert_eq!(vocab.word_of_the_day(day).unwrap().id, a);
        assert_ne!(vocab.word_of_the_day(next).unwrap().id, a);
        assert!(Vocabulary::default().word_of_the_day(day).is_none());
    }

    #[test]
    fn load_file_reports_missing_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Vocabulary::load_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, VocabularyError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }
}
