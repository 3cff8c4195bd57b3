//! Quiz settings and question kind identifiers

use crate::error::{QuizError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of questions the generator can synthesize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Show the first words of an ayah, offer two completions
    CompleteAyah,
    /// Show the ayah's words shuffled, ask for the original order
    OrderWords,
}

impl QuestionKind {
    /// Wire name used by hosts and stored settings
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::CompleteAyah => "complete_ayah",
            QuestionKind::OrderWords => "order_words",
        }
    }

    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "complete_ayah" => Ok(QuestionKind::CompleteAyah),
            "order_words" => Ok(QuestionKind::OrderWords),
            other => Err(QuizError::InvalidQuestionKind(other.to_string())),
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a list of wire names into kinds, rejecting unknown names
pub fn parse_kinds(names: &[String]) -> Result<Vec<QuestionKind>> {
    names.iter().map(|n| QuestionKind::parse(n)).collect()
}

/// Host-chosen quiz parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSettings {
    pub kinds: Vec<QuestionKind>,
    pub question_count: usize,
}

impl QuizSettings {
    pub fn new(kinds: Vec<QuestionKind>, question_count: usize) -> Result<Self> {
        if kinds.is_empty() {
            return Err(QuizError::InvalidSettings(
                "at least one question kind is required".to_string(),
            ));
        }
        Ok(Self {
            kinds,
            question_count,
        })
    }
}
