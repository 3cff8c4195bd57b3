//! Spaced-repetition review intervals
//!
//! A page's review level rises with successful reviews and falls back to
//! zero on a failed one; the level indexes into a fixed interval table.

/// Days until the next review, by review level
pub const REVIEW_INTERVALS: [u32; 9] = [1, 2, 4, 7, 14, 30, 90, 180, 365];

/// Highest attainable review level
pub const MAX_REVIEW_LEVEL: u8 = (REVIEW_INTERVALS.len() - 1) as u8;

/// Days until the next review for a level; levels beyond the table clamp
/// to the longest interval
pub fn interval_days(level: u8) -> u32 {
    let idx = (level as usize).min(REVIEW_INTERVALS.len() - 1);
    REVIEW_INTERVALS[idx]
}

/// Review level of one memorized page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewLevel(pub u8);

impl ReviewLevel {
    /// Successful review: move one level up, capped at the table's end
    pub fn promote(self) -> Self {
        Self(self.0.saturating_add(1).min(MAX_REVIEW_LEVEL))
    }

    /// Failed review: start over at level zero
    pub fn reset(self) -> Self {
        Self(0)
    }

    pub fn interval_days(self) -> u32 {
        interval_days(self.0)
    }
}
