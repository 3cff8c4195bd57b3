//! Batch question generation
//!
//! One attempt budget covers the whole batch, so a pathological pool costs
//! a bounded amount of work rather than a bounded amount per question.

use crate::config::{Passage, QuestionKind};
use crate::error::{QuizError, Result};
use crate::generator::synth::{synth_complete_ayah, synth_order_words};
use crate::question::Question;
use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;

/// Total synthesis attempts allowed for one batch
pub const BATCH_ATTEMPTS: usize = 100;

/// Pools smaller than this cannot yield meaningful distractors
pub const MIN_POOL_SIZE: usize = 3;

fn ensure_pool(passages: &[Passage]) -> Result<()> {
    if passages.len() < MIN_POOL_SIZE {
        return Err(QuizError::EmptyPool(passages.len()));
    }
    Ok(())
}

/// Generate up to `target_count` questions from the passage pool
///
/// Each attempt picks one kind uniformly at random, synthesizes one
/// question, and keeps it unless an already-accepted question has the same
/// prompt text. Synthesis failures are logged and consume an attempt.
/// A pool with fewer than 3 passages yields an empty batch. Returning fewer
/// questions than requested is not an error; the host decides whether to
/// warn the user.
pub fn generate(
    passages: &[Passage],
    kinds: &[QuestionKind],
    target_count: usize,
) -> Vec<Question> {
    let mut rng = rand::thread_rng();
    generate_with_rng(passages, kinds, target_count, &mut rng)
}

pub fn generate_with_rng<R: Rng>(
    passages: &[Passage],
    kinds: &[QuestionKind],
    target_count: usize,
    rng: &mut R,
) -> Vec<Question> {
    if let Err(e) = ensure_pool(passages) {
        warn!("quiz generation skipped: {}", e);
        return Vec::new();
    }
    if kinds.is_empty() {
        return Vec::new();
    }

    let mut questions: Vec<Question> = Vec::with_capacity(target_count.min(BATCH_ATTEMPTS));
    let mut attempts = 0;

    while questions.len() < target_count && attempts < BATCH_ATTEMPTS {
        // Safe unwrap-free choice: kinds is non-empty here
        let kind = kinds.choose(rng).copied().unwrap_or(QuestionKind::CompleteAyah);
        match synthesize(passages, kind, rng) {
            Ok(question) => {
                // Duplicate suppression is by prompt text: two passages that
                // render the same prompt count as the same question
                if !questions.iter().any(|q| q.prompt() == question.prompt()) {
                    questions.push(question);
                }
            }
            Err(e) => warn!("failed to synthesize a {} question: {}", kind, e),
        }
        attempts += 1;
    }

    questions
}

fn synthesize<R: Rng>(passages: &[Passage], kind: QuestionKind, rng: &mut R) -> Result<Question> {
    match kind {
        QuestionKind::CompleteAyah => synth_complete_ayah(passages, rng),
        QuestionKind::OrderWords => synth_order_words(passages, rng),
    }
}
