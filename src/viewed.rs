use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Persisted record of a word the user has seen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewedWord {
    pub id: i64,
    #[serde(rename = "markedViewedAt")]
    pub marked_viewed_at: String,
}

/// Derived id -> timestamp lookup over the persisted viewed-word list.
///
/// Only `AppConfig` builds one of these, and it rebuilds it on every change
/// to the list it is derived from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewedWords {
    by_id: HashMap<i64, String>,
}

impl ViewedWords {
    /// Later entries for the same id overwrite earlier ones.
    pub fn build(viewed: &[ViewedWord]) -> Self {
        let mut by_id = HashMap::with_capacity(viewed.len());
        for entry in viewed {
            by_id.insert(entry.id, entry.marked_viewed_at.clone());
        }
        Self { by_id }
    }

    pub fn is_viewed(&self, id: i64) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn viewed_at(&self, id: i64) -> Option<&str> {
        self.by_id.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
