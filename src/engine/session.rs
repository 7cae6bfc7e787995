//! Per-day session context
//!
//! Rebuilt at the start of each calendar day and mutated by every
//! completion, in submission order.

use ahash::AHashSet;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::calendar::days_between;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySession {
    /// Calendar day the daily counters belong to
    pub day: Option<NaiveDate>,
    /// Distinct categories completed today
    pub categories_today: AHashSet<String>,
    /// Quests completed today
    pub quests_today: u32,
    /// Consecutive calendar days with at least one completion
    pub streak: u32,
    /// Last day with at least one completion
    pub last_engaged: Option<NaiveDate>,
}

impl DailySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll the session over to `today`
    ///
    /// Returns true when a new day started. A skipped calendar day breaks
    /// the engagement streak.
    pub fn begin_day(&mut self, today: NaiveDate) -> bool {
        if self.day == Some(today) {
            return false;
        }
        self.day = Some(today);
        self.reset_daily();

        if let Some(last) = self.last_engaged {
            if days_between(last, today) >= 2 && self.streak > 0 {
                tracing::debug!("Engagement streak of {} days broken", self.streak);
                self.streak = 0;
            }
        }
        true
    }

    /// Clear today's counters without touching the streak
    pub fn reset_daily(&mut self) {
        self.categories_today.clear();
        self.quests_today = 0;
    }

    pub fn is_first_quest_of_day(&self) -> bool {
        self.quests_today == 0
    }

    /// Record one completion in `category` on `today`
    pub fn register(&mut self, category: &str, today: NaiveDate) {
        match self.last_engaged {
            Some(last) if last == today => {}
            Some(last) if days_between(last, today) == 1 => {
                self.streak = self.streak.saturating_add(1);
            }
            _ => self.streak = 1,
        }
        self.last_engaged = Some(today);

        self.categories_today.insert(category.to_string());
        self.quests_today = self.quests_today.saturating_add(1);
    }

    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self.categories_today.iter().cloned().collect();
        categories.sort();
        categories
    }
}
