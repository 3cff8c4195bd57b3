//! Reward derivation from raw session results
//!
//! The session only ever reports `{score, total_questions}`; everything a
//! host credits to the user account is computed here.

use crate::session::SessionResults;
use serde::{Deserialize, Serialize};

/// XP granted per correctly answered question
pub const XP_PER_CORRECT: u32 = 3;
/// Bonus XP for a perfect session (all correct, at least one question)
pub const PERFECT_BONUS_XP: u32 = 15;
/// Diamonds granted for the first login of a day
pub const DAILY_LOGIN_DIAMONDS: u32 = 2;

/// Rewards derived from one finished (or abandoned) session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRewards {
    pub xp: u32,
    pub diamonds: u32,
    pub perfect: bool,
}

impl SessionRewards {
    pub fn for_results(results: &SessionResults) -> Self {
        let perfect =
            results.total_questions > 0 && results.score as usize == results.total_questions;
        let mut xp = results.score * XP_PER_CORRECT;
        if perfect {
            xp += PERFECT_BONUS_XP;
        }
        Self {
            xp,
            // Quizzes themselves grant no diamonds; those come from the
            // daily login bonus and other host-side sources
            diamonds: 0,
            perfect,
        }
    }
}

/// Lifetime counters of a user profile, as persisted by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileTotals {
    pub total_xp: u32,
    pub diamonds: u32,
    pub tests_completed: u32,
    pub total_correct_answers: u32,
    pub total_questions_answered: u32,
}

impl ProfileTotals {
    /// Roll one session's results and rewards into the lifetime counters
    pub fn apply_session(&mut self, results: &SessionResults, rewards: &SessionRewards) {
        self.total_xp += rewards.xp;
        self.diamonds += rewards.diamonds;
        self.tests_completed += 1;
        self.total_correct_answers += results.score;
        self.total_questions_answered += results.total_questions as u32;
    }

    /// Credit the once-per-day login bonus
    pub fn apply_daily_login(&mut self) {
        self.diamonds += DAILY_LOGIN_DIAMONDS;
    }

    pub fn total_wrong_answers(&self) -> u32 {
        self.total_questions_answered
            .saturating_sub(self.total_correct_answers)
    }
}
