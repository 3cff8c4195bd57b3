//! Property tests for the session module
//!
//! Covers: score bounds, exactly-once event delivery, and selection
//! tracker renumbering under arbitrary toggle sequences.

use proptest::prelude::*;
use smallvec::smallvec;

use crate::question::Question;
use crate::session::{Session, SessionEvent};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

/// A completion question with a unique prompt tag and known answer
fn completion_question_strategy() -> impl Strategy<Value = Question> {
    ("[a-z]{4,10}", 1i32..=604i32).prop_map(|(tag, page)| Question::CompleteAyah {
        prompt: format!("اختر التكملة الصحيحة للآية: \"{}...\"", tag),
        options: smallvec!["صحيح".to_string(), "خطأ".to_string()],
        answer: "صحيح".to_string(),
        page,
    })
}

fn question_list_strategy() -> impl Strategy<Value = Vec<Question>> {
    proptest::collection::vec(completion_question_strategy(), 0..=12)
}

/// Answers as booleans: true submits the correct option
fn answer_plan_strategy() -> impl Strategy<Value = Vec<bool>> {
    proptest::collection::vec(any::<bool>(), 0..=12)
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Score equals the number of correct submissions and never exceeds the
    /// question count
    #[test]
    fn prop_score_counts_correct_answers(
        questions in question_list_strategy(),
        plan in answer_plan_strategy()
    ) {
        let total = questions.len();
        let mut session = Session::start(questions);
        let mut expected_score = 0u32;

        for &correct in plan.iter().take(total) {
            let choice = if correct { "صحيح" } else { "خطأ" };
            let outcome = session.submit_answer(Some(choice)).unwrap();
            prop_assert_eq!(outcome.is_correct, correct);
            if correct {
                expected_score += 1;
            }
            session.advance();
        }

        let results = session.results();
        prop_assert_eq!(results.total_questions, total);
        prop_assert!(results.score <= total as u32);
        if plan.len() >= total {
            prop_assert_eq!(results.score, expected_score);
        }
    }

    /// Exactly one SessionFinished and exactly one AnswerChecked per
    /// answered question, regardless of extra advance calls
    #[test]
    fn prop_events_fire_exactly_once(
        questions in question_list_strategy(),
        extra_advances in 0usize..=5usize
    ) {
        let total = questions.len();
        let mut session = Session::start(questions);

        for _ in 0..total {
            session.submit_answer(Some("صحيح")).unwrap();
            session.advance();
        }
        for _ in 0..extra_advances {
            session.advance();
        }

        let events = session.drain_events();
        let answered = events
            .iter()
            .filter(|e| matches!(e, SessionEvent::AnswerChecked { .. }))
            .count();
        let finished = events
            .iter()
            .filter(|e| matches!(e, SessionEvent::SessionFinished))
            .count();
        prop_assert_eq!(answered, total);
        prop_assert_eq!(finished, 1);
        // AnswerChecked events arrive before the finish marker
        prop_assert_eq!(events.last(), Some(&SessionEvent::SessionFinished));
    }

    /// Toggling an arbitrary sequence of handles keeps the selection a
    /// duplicate-free subsequence of valid handles, correctly renumbered
    #[test]
    fn prop_selection_stays_consistent(
        toggles in proptest::collection::vec(0usize..6, 0..40)
    ) {
        let question = Question::OrderWords {
            prompt: "رتب الكلمات التالية لتكوين آية صحيحة:".to_string(),
            shuffled_words: (0..6).map(|i| format!("كلمة{}", i)).collect(),
            answer: (0..6).map(|i| format!("كلمة{}", i)).collect::<Vec<_>>().join(" "),
            page: 1,
        };
        let mut session = Session::start(vec![question]);

        for &handle in &toggles {
            session.toggle_word(handle).unwrap();
        }

        let selected = session.selection().selected_handles().to_vec();
        // No duplicates
        let mut dedup = selected.clone();
        dedup.sort_unstable();
        dedup.dedup();
        prop_assert_eq!(dedup.len(), selected.len());
        // Ordinals are 1..=len in selection order
        for (pos, &handle) in selected.iter().enumerate() {
            prop_assert_eq!(session.selection().ordinal_of(handle), Some(pos + 1));
        }
        // A handle toggled an even number of times ends unselected
        for handle in 0..6 {
            let count = toggles.iter().filter(|&&h| h == handle).count();
            prop_assert_eq!(selected.contains(&handle), count % 2 == 1);
        }
    }
}
