//! Passage input record

use serde::{Deserialize, Serialize};

/// One ayah of source text with its mushaf position metadata, as delivered
/// by the passage source (one record per ayah on a fetched page). Immutable
/// once loaded into the pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    /// Uthmani script text of the ayah
    pub text: String,
    /// Mushaf page number (1..=604)
    pub page: i32,
    /// Position of the ayah within its surah
    #[serde(default)]
    pub number_in_surah: i32,
    /// Global ayah number across the whole mushaf
    #[serde(default)]
    pub number: i32,
    /// Surah identifier
    #[serde(default)]
    pub surah: String,
}

impl Passage {
    pub fn new(text: impl Into<String>, page: i32) -> Self {
        Self {
            text: text.into(),
            page,
            number_in_surah: 0,
            number: 0,
            surah: String::new(),
        }
    }

    /// Whitespace-separated words of the passage text. Empty tokens never
    /// appear in the result.
    pub fn words(&self) -> Vec<&str> {
        self.text.split_whitespace().collect()
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
