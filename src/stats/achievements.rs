//! Fixed achievement set and unlock checking

use crate::stats::rewards::ProfileTotals;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The application's fixed achievements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    /// Completed a first quiz
    FirstTest,
    /// Completed ten quizzes
    TenTests,
    /// Scored a perfect quiz
    PerfectScore,
    /// Made a first store purchase
    FirstPurchase,
}

impl AchievementId {
    pub fn title(&self) -> &'static str {
        match self {
            AchievementId::FirstTest => "الخطوة الأولى",
            AchievementId::TenTests => "مثابر",
            AchievementId::PerfectScore => "إتقان",
            AchievementId::FirstPurchase => "داعم المعرفة",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AchievementId::FirstTest => "أكملت أول اختبار لك بنجاح!",
            AchievementId::TenTests => "أكملت 10 اختبارات.",
            AchievementId::PerfectScore => "حصلت على درجة كاملة في اختبار.",
            AchievementId::FirstPurchase => "قمت بأول عملية شراء من المتجر.",
        }
    }
}

/// Quiz-driven achievements newly earned by the latest session. Purchase
/// achievements are granted by the host's store flow, not here.
pub fn check_achievements(
    totals: &ProfileTotals,
    perfect_session: bool,
    already: &HashSet<AchievementId>,
) -> Vec<AchievementId> {
    let mut unlocked = Vec::new();
    let mut consider = |id: AchievementId, earned: bool| {
        if earned && !already.contains(&id) {
            unlocked.push(id);
        }
    };

    consider(AchievementId::FirstTest, totals.tests_completed >= 1);
    consider(AchievementId::TenTests, totals.tests_completed >= 10);
    consider(AchievementId::PerfectScore, perfect_session);

    unlocked
}
