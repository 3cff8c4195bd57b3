//! Quiz session state machine and Python-facing session handle
//!
//! Exactly one session is live per handle. The host walks it question by
//! question: render `current_question`, feed the answer through
//! `submit_answer`, then `advance`. Side effects the host must persist
//! (per-page statistics, session completion) arrive as queued events the
//! host drains, in order, exactly once.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};
use std::collections::VecDeque;

use crate::config::QuestionKind;
use crate::error::{QuizError, Result};
use crate::question::Question;
use crate::session::checker;
use crate::session::selection::SelectionTracker;
use serde::{Deserialize, Serialize};

/// Raw session outcome; reward derivation happens outside the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResults {
    pub score: u32,
    pub total_questions: usize,
}

/// Engine notifications the host polls for
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Fired exactly once per question, synchronously after scoring
    AnswerChecked {
        question: Question,
        is_correct: bool,
    },
    /// Fired exactly once, when the session advances past its last question
    SessionFinished,
}

/// A single live quiz session
#[pyclass(name = "QuizSession")]
#[derive(Debug, Default)]
pub struct Session {
    pub(crate) questions: Vec<Question>,
    pub(crate) current_index: usize,
    pub(crate) score: u32,
    pub(crate) selection: SelectionTracker,
    pub(crate) answered_current: bool,
    pub(crate) finished_fired: bool,
    pub(crate) events: VecDeque<SessionEvent>,
}

impl Session {
    /// Install a freshly generated question sequence. A session over zero
    /// questions is finished from the start.
    pub fn start(questions: Vec<Question>) -> Self {
        let mut session = Self {
            questions,
            ..Default::default()
        };
        session.arm_current_question();
        if session.questions.is_empty() {
            session.finished_fired = true;
            session.events.push_back(SessionEvent::SessionFinished);
        }
        session
    }

    /// Clear all session state, as before starting a new quiz
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// Move to the next question, clearing the pending word selection.
    /// Advancing past the last question fires `SessionFinished` once;
    /// further calls are no-ops.
    pub fn advance(&mut self) {
        if self.finished_fired {
            return;
        }
        self.current_index += 1;
        self.answered_current = false;
        self.arm_current_question();
        if self.current_index >= self.questions.len() {
            self.finished_fired = true;
            self.events.push_back(SessionEvent::SessionFinished);
        }
    }

    /// Check the submitted answer against the live question. For ordering
    /// questions the pending word selection is the answer and `submitted`
    /// is ignored.
    pub fn submit_answer(&mut self, submitted: Option<&str>) -> Result<checker::CheckOutcome> {
        checker::check_answer(self, submitted)
    }

    /// Toggle a word of the live ordering question by its handle
    pub fn toggle_word(&mut self, handle: usize) -> Result<()> {
        let question = self
            .current_question()
            .ok_or_else(|| QuizError::SessionState("no live question".to_string()))?;
        if self.answered_current {
            return Err(QuizError::SessionState(
                "question already answered".to_string(),
            ));
        }
        if question.kind() != QuestionKind::OrderWords {
            return Err(QuizError::SessionState(
                "word selection only applies to order_words questions".to_string(),
            ));
        }
        self.selection.toggle(handle)
    }

    /// Valid at any point, including mid-session
    pub fn results(&self) -> SessionResults {
        SessionResults {
            score: self.score,
            total_questions: self.questions.len(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished_fired
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    /// Take all queued events, oldest first
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.events.drain(..).collect()
    }

    /// Size the selection tracker for the question now at `current_index`
    fn arm_current_question(&mut self) {
        let handles = match self.current_question() {
            Some(Question::OrderWords { shuffled_words, .. }) => shuffled_words.len(),
            _ => 0,
        };
        self.selection.reset(handles);
    }
}

// ============================================================================
// PyMethods Implementation
// ============================================================================

#[pymethods]
impl Session {
    #[getter]
    fn score(&self) -> u32 {
        self.score
    }

    #[getter]
    fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// 1-based number of the live question, or None when finished
    #[getter]
    fn question_number(&self) -> Option<usize> {
        if self.current_index < self.questions.len() {
            Some(self.current_index + 1)
        } else {
            None
        }
    }

    #[getter(is_finished)]
    fn py_is_finished(&self) -> bool {
        self.finished_fired
    }

    /// The live question as a dict, or None when the session is complete.
    /// The correct answer is not included; it is revealed by `submit_answer`.
    #[pyo3(name = "current_question")]
    fn py_current_question(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        match self.current_question() {
            Some(question) => Ok(question_to_dict(py, question, false)?.into()),
            None => Ok(py.None()),
        }
    }

    /// Submit an answer for the live question
    ///
    /// # Arguments
    /// * `answer` - the chosen option text for completion questions; omit it
    ///   for ordering questions (the pending word selection is used)
    ///
    /// # Returns
    /// Dict with `is_correct` and `correct_answer`
    #[pyo3(name = "submit_answer", signature = (answer=None))]
    fn py_submit_answer(&mut self, py: Python<'_>, answer: Option<String>) -> PyResult<Py<PyAny>> {
        let outcome = self.submit_answer(answer.as_deref())?;
        let dict = PyDict::new(py);
        dict.set_item("is_correct", outcome.is_correct)?;
        dict.set_item("correct_answer", &outcome.correct_answer)?;
        Ok(dict.into())
    }

    /// Toggle a word button by its index into `shuffled_words`
    ///
    /// # Returns
    /// The word's new 1-based display number, or None if it was deselected
    #[pyo3(name = "toggle_word")]
    fn py_toggle_word(&mut self, handle: usize) -> PyResult<Option<usize>> {
        self.toggle_word(handle)?;
        Ok(self.selection.ordinal_of(handle))
    }

    /// Selected word handles in selection order
    fn selection_order(&self) -> Vec<usize> {
        self.selection.selected_handles().to_vec()
    }

    /// The pending ordering answer as display text
    fn selection_preview(&self) -> String {
        match self.current_question() {
            Some(Question::OrderWords { shuffled_words, .. }) => {
                self.selection.joined(shuffled_words)
            }
            _ => String::new(),
        }
    }

    #[pyo3(name = "advance")]
    fn py_advance(&mut self) {
        self.advance();
    }

    /// Clear all session state, as before starting a new quiz
    #[pyo3(name = "reset")]
    fn py_reset(&mut self) {
        self.reset();
    }

    #[pyo3(name = "results")]
    fn py_results(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let results = self.results();
        let dict = PyDict::new(py);
        dict.set_item("score", results.score)?;
        dict.set_item("total_questions", results.total_questions)?;
        Ok(dict.into())
    }

    /// Take all queued engine events, oldest first
    ///
    /// Event dicts carry `type` (`"answer_checked"` or `"session_finished"`);
    /// answer events additionally carry `question` and `is_correct`.
    #[pyo3(name = "drain_events")]
    fn py_drain_events(&mut self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let list = PyList::empty(py);
        for event in self.drain_events() {
            let dict = PyDict::new(py);
            match event {
                SessionEvent::AnswerChecked {
                    question,
                    is_correct,
                } => {
                    dict.set_item("type", "answer_checked")?;
                    dict.set_item("question", question_to_dict(py, &question, true)?)?;
                    dict.set_item("is_correct", is_correct)?;
                }
                SessionEvent::SessionFinished => {
                    dict.set_item("type", "session_finished")?;
                }
            }
            list.append(dict)?;
        }
        Ok(list.into())
    }
}

// ============================================================================
// Private Helper Functions
// ============================================================================

/// Convert a Question to a Python dict
fn question_to_dict<'py>(
    py: Python<'py>,
    question: &Question,
    include_answer: bool,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("kind", question.kind().as_str())?;
    dict.set_item("prompt", question.prompt())?;
    dict.set_item("page", question.page())?;
    match question {
        Question::CompleteAyah { options, .. } => {
            dict.set_item("options", options.to_vec())?;
        }
        Question::OrderWords { shuffled_words, .. } => {
            dict.set_item("shuffled_words", shuffled_words.clone())?;
        }
    }
    if include_answer {
        dict.set_item("answer", question.answer())?;
    }
    Ok(dict)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn completion_question(tag: &str) -> Question {
        Question::CompleteAyah {
            prompt: format!("اختر التكملة الصحيحة للآية: \"{}...\"", tag),
            options: smallvec!["الإجابة الصحيحة".to_string(), "إجابة خاطئة".to_string()],
            answer: "الإجابة الصحيحة".to_string(),
            page: 590,
        }
    }

    fn order_question() -> Question {
        Question::OrderWords {
            prompt: "رتب الكلمات التالية لتكوين آية صحيحة:".to_string(),
            shuffled_words: vec![
                "الصمد".to_string(),
                "الله".to_string(),
            ],
            answer: "الله الصمد".to_string(),
            page: 604,
        }
    }

    #[test]
    fn test_empty_session_finishes_immediately() {
        let mut session = Session::start(vec![]);
        assert!(session.is_finished());
        assert_eq!(session.drain_events(), vec![SessionEvent::SessionFinished]);
        // Advancing a finished session does nothing
        session.advance();
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_full_session_flow() {
        let mut session = Session::start(vec![completion_question("أ"), completion_question("ب")]);
        assert_eq!(session.results().total_questions, 2);

        let outcome = session.submit_answer(Some("الإجابة الصحيحة")).unwrap();
        assert!(outcome.is_correct);
        session.advance();

        let outcome = session.submit_answer(Some("إجابة خاطئة")).unwrap();
        assert!(!outcome.is_correct);
        assert_eq!(outcome.correct_answer, "الإجابة الصحيحة");
        session.advance();

        assert!(session.is_finished());
        let results = session.results();
        assert_eq!(results.score, 1);
        assert_eq!(results.total_questions, 2);

        let events = session.drain_events();
        assert_eq!(events.len(), 3);
        assert!(matches!(
            events[0],
            SessionEvent::AnswerChecked { is_correct: true, .. }
        ));
        assert!(matches!(
            events[1],
            SessionEvent::AnswerChecked { is_correct: false, .. }
        ));
        assert_eq!(events[2], SessionEvent::SessionFinished);
    }

    #[test]
    fn test_finish_fires_once() {
        let mut session = Session::start(vec![completion_question("أ")]);
        session.submit_answer(Some("الإجابة الصحيحة")).unwrap();
        session.advance();
        assert!(session.is_finished());
        let score_before = session.results().score;

        // A stray extra advance must not re-fire or change anything
        session.advance();
        session.advance();
        assert_eq!(session.results().score, score_before);
        let finish_count = session
            .drain_events()
            .into_iter()
            .filter(|e| *e == SessionEvent::SessionFinished)
            .count();
        assert_eq!(finish_count, 1);
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let mut session = Session::start(vec![completion_question("أ")]);
        session.submit_answer(Some("إجابة خاطئة")).unwrap();
        let err = session.submit_answer(Some("الإجابة الصحيحة")).unwrap_err();
        assert!(matches!(err, QuizError::SessionState(_)));
        assert_eq!(session.results().score, 0);
        // Only one AnswerChecked was queued
        let answered = session
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, SessionEvent::AnswerChecked { .. }))
            .count();
        assert_eq!(answered, 1);
    }

    #[test]
    fn test_order_question_uses_selection() {
        let mut session = Session::start(vec![order_question()]);
        // Select "الله" (handle 1) then "الصمد" (handle 0)
        session.toggle_word(1).unwrap();
        session.toggle_word(0).unwrap();
        let outcome = session.submit_answer(None).unwrap();
        assert!(outcome.is_correct);
        assert_eq!(session.results().score, 1);
    }

    #[test]
    fn test_advance_clears_selection() {
        let mut session = Session::start(vec![order_question(), order_question()]);
        session.toggle_word(0).unwrap();
        session.submit_answer(None).unwrap();
        session.advance();
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_toggle_word_on_completion_question() {
        let mut session = Session::start(vec![completion_question("أ")]);
        let err = session.toggle_word(0).unwrap_err();
        assert!(matches!(err, QuizError::SessionState(_)));
    }

    #[test]
    fn test_completion_requires_an_option() {
        let mut session = Session::start(vec![completion_question("أ")]);
        let err = session.submit_answer(None).unwrap_err();
        assert!(matches!(err, QuizError::SessionState(_)));
    }

    #[test]
    fn test_mid_session_partial_results() {
        let mut session = Session::start(vec![
            completion_question("أ"),
            completion_question("ب"),
            completion_question("ج"),
        ]);
        session.submit_answer(Some("الإجابة الصحيحة")).unwrap();
        session.advance();
        let partial = session.results();
        assert_eq!(partial.score, 1);
        assert_eq!(partial.total_questions, 3);
        assert!(!session.is_finished());
    }
}
