//! Order-selection tracking for word-ordering questions
//!
//! The host shows one button per shuffled word; each button is identified
//! by its index into `shuffled_words` (its handle). Users may deselect any
//! word, not just the most recent one, and the remaining selections keep
//! their relative order and renumber.

use crate::error::{QuizError, Result};

/// Tracks which word handles are selected and in what order
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    /// Selected handles in selection order
    selected: Vec<usize>,
    /// Number of valid handles for the live question
    handle_count: usize,
}

impl SelectionTracker {
    pub fn new(handle_count: usize) -> Self {
        Self {
            selected: Vec::with_capacity(handle_count),
            handle_count,
        }
    }

    /// Reset for a new question with `handle_count` words
    pub fn reset(&mut self, handle_count: usize) {
        self.selected.clear();
        self.handle_count = handle_count;
    }

    /// Toggle a word: deselect it if selected (remaining selections shift
    /// down), otherwise append it to the end of the selection
    pub fn toggle(&mut self, handle: usize) -> Result<()> {
        if handle >= self.handle_count {
            return Err(QuizError::WordHandleOutOfRange(handle));
        }
        if let Some(pos) = self.selected.iter().position(|&h| h == handle) {
            self.selected.remove(pos);
        } else {
            self.selected.push(handle);
        }
        Ok(())
    }

    /// Handles currently selected, in selection order
    pub fn selected_handles(&self) -> &[usize] {
        &self.selected
    }

    /// 1-based display number of a selected handle, or None if unselected
    pub fn ordinal_of(&self, handle: usize) -> Option<usize> {
        self.selected.iter().position(|&h| h == handle).map(|p| p + 1)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The pending answer: selected words joined by single spaces
    pub fn joined(&self, words: &[String]) -> String {
        self.selected
            .iter()
            .filter_map(|&h| words.get(h).map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
