//! Quiz question data structures
//!
//! Questions are plain data: the host renders them however it likes and
//! feeds answers back through the session.

use crate::config::QuestionKind;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Option list for completion questions: the correct answer plus one
/// distractor, in randomized order
pub type OptionList = SmallVec<[String; 2]>;

/// A generated quiz question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Question {
    /// "Choose the correct completion of the ayah"
    CompleteAyah {
        /// Display prompt embedding the first five words of the ayah
        prompt: String,
        /// Two answer options in randomized order
        options: OptionList,
        /// The correct completion (the ayah's words from the sixth onward)
        answer: String,
        /// Mushaf page of the source ayah
        page: i32,
    },
    /// "Arrange the words to form a correct ayah"
    OrderWords {
        prompt: String,
        /// The ayah's words in shuffled order; guaranteed to differ from
        /// the original order
        shuffled_words: Vec<String>,
        /// The full original ayah text
        answer: String,
        page: i32,
    },
}

impl Question {
    pub fn kind(&self) -> QuestionKind {
        match self {
            Question::CompleteAyah { .. } => QuestionKind::CompleteAyah,
            Question::OrderWords { .. } => QuestionKind::OrderWords,
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            Question::CompleteAyah { prompt, .. } | Question::OrderWords { prompt, .. } => prompt,
        }
    }

    pub fn answer(&self) -> &str {
        match self {
            Question::CompleteAyah { answer, .. } | Question::OrderWords { answer, .. } => answer,
        }
    }

    pub fn page(&self) -> i32 {
        match self {
            Question::CompleteAyah { page, .. } | Question::OrderWords { page, .. } => *page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_accessors() {
        let q = Question::CompleteAyah {
            prompt: "اختر التكملة الصحيحة".to_string(),
            options: smallvec!["أ".to_string(), "ب".to_string()],
            answer: "أ".to_string(),
            page: 600,
        };
        assert_eq!(q.kind(), QuestionKind::CompleteAyah);
        assert_eq!(q.answer(), "أ");
        assert_eq!(q.page(), 600);
    }

    #[test]
    fn test_serde_tagging() {
        let q = Question::OrderWords {
            prompt: "رتب الكلمات".to_string(),
            shuffled_words: vec!["الصمد".to_string(), "الله".to_string()],
            answer: "الله الصمد".to_string(),
            page: 604,
        };
        let json = serde_json::to_string(&q).unwrap();
        assert!(json.contains("\"kind\":\"order_words\""));
        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }
}
