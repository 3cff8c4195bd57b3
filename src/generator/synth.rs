//! Per-kind question synthesis
//!
//! Both kinds pick their source passage by rejection sampling: draw
//! uniformly at random and retry until the passage qualifies, giving up
//! with `InsufficientMaterial` once the retry budget is spent.

use crate::config::Passage;
use crate::error::{QuizError, Result};
use crate::question::{OptionList, Question};
use rand::seq::SliceRandom;
use rand::Rng;

/// Retry budget for one rejection-sampling loop
pub const SAMPLE_RETRIES: usize = 50;

/// Completion questions need a prompt of 5 words plus a non-trivial tail
const COMPLETION_MIN_WORDS: usize = 7;
/// Ordering questions stay solvable in this word-count range
const ORDER_MIN_WORDS: usize = 5;
const ORDER_MAX_WORDS: usize = 10;

/// Draw passages until one satisfies `qualifies`, within the retry budget
fn sample_passage<'a, R, F>(
    passages: &'a [Passage],
    rng: &mut R,
    kind_name: &'static str,
    mut qualifies: F,
) -> Result<&'a Passage>
where
    R: Rng,
    F: FnMut(&Passage) -> bool,
{
    let mut attempts = 0;
    loop {
        let candidate = passages
            .choose(rng)
            .ok_or(QuizError::InsufficientMaterial(kind_name))?;
        if qualifies(candidate) {
            return Ok(candidate);
        }
        attempts += 1;
        if attempts > SAMPLE_RETRIES {
            return Err(QuizError::InsufficientMaterial(kind_name));
        }
    }
}

/// Synthesize a "complete the ayah" question
///
/// The prompt shows the ayah's first five words; the answer is the rest.
/// The distractor is the tail of a different passage, falling back to that
/// passage's full text when its tail is too short to be a plausible option.
pub fn synth_complete_ayah<R: Rng>(passages: &[Passage], rng: &mut R) -> Result<Question> {
    let kind_name = "complete_ayah";
    let source = sample_passage(passages, rng, kind_name, |p| {
        p.word_count() >= COMPLETION_MIN_WORDS
    })?;
    let words = source.words();

    let first_part = words[..5].join(" ");
    let answer = words[5..].join(" ");

    let distractor_source = sample_passage(passages, rng, kind_name, |p| p.text != source.text)?;
    let distractor_tail = distractor_source
        .words()
        .into_iter()
        .skip(5)
        .collect::<Vec<_>>()
        .join(" ");
    // A tail of 3 characters or fewer makes a useless option; show the
    // distractor's full text instead. This can in rare cases coincide with
    // the correct answer; kept as-is deliberately.
    let wrong = if distractor_tail.chars().count() > 3 {
        distractor_tail
    } else {
        distractor_source.text.clone()
    };

    let mut options: OptionList = OptionList::new();
    options.push(answer.clone());
    options.push(wrong);
    options.shuffle(rng);

    Ok(Question::CompleteAyah {
        prompt: format!("اختر التكملة الصحيحة للآية: \"{}...\"", first_part),
        options,
        answer,
        page: source.page,
    })
}

/// Synthesize an "order the words" question
///
/// The answer is the passage's full original text. The displayed word order
/// is a uniform shuffle, with the first two words swapped if the shuffle
/// happens to reproduce the original order.
pub fn synth_order_words<R: Rng>(passages: &[Passage], rng: &mut R) -> Result<Question> {
    let source = sample_passage(passages, rng, "order_words", |p| {
        let n = p.word_count();
        (ORDER_MIN_WORDS..=ORDER_MAX_WORDS).contains(&n)
    })?;

    let answer = source.text.clone();
    let mut shuffled_words: Vec<String> = source.words().into_iter().map(String::from).collect();
    shuffled_words.shuffle(rng);
    if shuffled_words.join(" ") == answer {
        shuffled_words.swap(0, 1);
    }

    Ok(Question::OrderWords {
        prompt: "رتب الكلمات التالية لتكوين آية صحيحة:".to_string(),
        shuffled_words,
        answer,
        page: source.page,
    })
}
