//! Per-page answer performance aggregation
//!
//! The host persists these aggregates (one row per user and page); the
//! engine side only folds `AnswerChecked` events into counters and ranks
//! pages for the profile's best/worst lists and the memorization-map
//! shading.

use crate::session::SessionEvent;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Answer counters for one mushaf page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagePerformance {
    pub page: i32,
    pub correct: u32,
    pub total: u32,
}

impl PagePerformance {
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.total)
        }
    }
}

/// Aggregated per-page performance for one user
#[derive(Debug, Clone, Default)]
pub struct PerformanceBook {
    pages: AHashMap<i32, PagePerformance>,
}

impl PerformanceBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recover a book from persisted rows
    pub fn from_rows(rows: impl IntoIterator<Item = PagePerformance>) -> Self {
        let mut book = Self::new();
        for row in rows {
            book.pages.insert(row.page, row);
        }
        book
    }

    /// Fold one answered question into its page's counters
    pub fn record(&mut self, page: i32, is_correct: bool) {
        let entry = self.pages.entry(page).or_insert(PagePerformance {
            page,
            correct: 0,
            total: 0,
        });
        entry.total += 1;
        if is_correct {
            entry.correct += 1;
        }
    }

    /// Fold a drained session event; non-answer events are ignored
    pub fn apply(&mut self, event: &SessionEvent) {
        if let SessionEvent::AnswerChecked {
            question,
            is_correct,
        } = event
        {
            self.record(question.page(), *is_correct);
        }
    }

    pub fn get(&self, page: i32) -> Option<&PagePerformance> {
        self.pages.get(&page)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// All pages ordered by accuracy, best first. Ties keep a stable page
    /// order so repeated calls render identically.
    pub fn ranked(&self) -> Vec<PagePerformance> {
        let mut rows: Vec<PagePerformance> = self.pages.values().copied().collect();
        rows.sort_by(|a, b| {
            b.accuracy()
                .partial_cmp(&a.accuracy())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.page.cmp(&b.page))
        });
        rows
    }

    /// The `n` most accurate pages
    pub fn best_pages(&self, n: usize) -> Vec<PagePerformance> {
        let mut rows = self.ranked();
        rows.truncate(n);
        rows
    }

    /// The `n` least accurate pages, worst first
    pub fn worst_pages(&self, n: usize) -> Vec<PagePerformance> {
        let ranked = self.ranked();
        ranked.into_iter().rev().take(n).collect()
    }

    /// Highest per-page answer count, for intensity scaling
    pub fn max_total(&self) -> u32 {
        self.pages.values().map(|p| p.total).max().unwrap_or(0)
    }
}

/// Shading intensity for a page cell on the memorization map: a floor of
/// 0.1 so tested pages are visible, scaling to 1.0 for the most-tested page
pub fn coverage_intensity(count: u32, max_count: u32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    0.1 + 0.9 * f64::from(count) / f64::from(max_count.max(1))
}
