//! Answer checking and scoring
//!
//! Comparison is diacritic- and whitespace-insensitive. Checking a question
//! marks it answered and queues exactly one `AnswerChecked` event for the
//! host's statistics collaborator.

use crate::error::{QuizError, Result};
use crate::normalize;
use crate::question::Question;
use crate::session::state::{Session, SessionEvent};

/// Outcome of checking one answer
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub is_correct: bool,
    /// Canonical correct-answer text, for display on a wrong answer (for
    /// ordering questions this is the original unshuffled ayah)
    pub correct_answer: String,
}

/// Check `submitted` against the session's live question
///
/// `submitted` is the chosen option for completion questions and is ignored
/// for ordering questions, where the pending word selection joined by
/// spaces is the answer.
pub fn check_answer(session: &mut Session, submitted: Option<&str>) -> Result<CheckOutcome> {
    let question = session
        .current_question()
        .cloned()
        .ok_or_else(|| QuizError::SessionState("no live question".to_string()))?;
    if session.answered_current {
        return Err(QuizError::SessionState(
            "question already answered".to_string(),
        ));
    }

    let user_answer = match &question {
        Question::OrderWords { shuffled_words, .. } => session.selection.joined(shuffled_words),
        Question::CompleteAyah { .. } => submitted
            .ok_or_else(|| {
                QuizError::SessionState("an option must be chosen for this question".to_string())
            })?
            .to_string(),
    };
    let correct_answer = question.answer().to_string();

    let is_correct = normalize::matches(&user_answer, &correct_answer);
    if is_correct {
        session.score += 1;
    }
    session.answered_current = true;
    session.events.push_back(SessionEvent::AnswerChecked {
        question,
        is_correct,
    });

    Ok(CheckOutcome {
        is_correct,
        correct_answer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn completion() -> Question {
        Question::CompleteAyah {
            prompt: "اختر التكملة الصحيحة للآية: \"إنا أعطيناك الكوثر فصل لربك...\"".to_string(),
            options: smallvec!["وَانْحَرْ".to_string(), "خطأ".to_string()],
            answer: "وَانْحَرْ".to_string(),
            page: 602,
        }
    }

    #[test]
    fn test_diacritic_insensitive_match() {
        let mut session = Session::start(vec![completion()]);
        // Bare (undiacritized) rendering of the correct option still counts
        let outcome = session.submit_answer(Some("وانحر")).unwrap();
        assert!(outcome.is_correct);
        assert_eq!(session.results().score, 1);
    }

    #[test]
    fn test_whitespace_insensitive_match() {
        let q = Question::OrderWords {
            prompt: "رتب الكلمات التالية لتكوين آية صحيحة:".to_string(),
            shuffled_words: vec!["الصمد".to_string(), "الله".to_string()],
            answer: "الله  الصمد".to_string(), // double space in the source text
            page: 604,
        };
        let mut session = Session::start(vec![q]);
        session.toggle_word(1).unwrap();
        session.toggle_word(0).unwrap();
        assert!(session.submit_answer(None).unwrap().is_correct);
    }

    #[test]
    fn test_wrong_answer_reveals_correct_text() {
        let mut session = Session::start(vec![completion()]);
        let outcome = session.submit_answer(Some("خطأ")).unwrap();
        assert!(!outcome.is_correct);
        assert_eq!(outcome.correct_answer, "وَانْحَرْ");
        assert_eq!(session.results().score, 0);
    }

    #[test]
    fn test_check_after_session_end() {
        let mut session = Session::start(vec![completion()]);
        session.submit_answer(Some("خطأ")).unwrap();
        session.advance();
        let err = session.submit_answer(Some("وَانْحَرْ")).unwrap_err();
        assert!(matches!(err, QuizError::SessionState(_)));
    }
}
