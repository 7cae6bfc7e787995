//! Per-quest activity records and their day-granularity transitions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::calendar::days_between;
use crate::core::types::QuestId;

/// Completion recency and consecutive-day count for one quest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub quest_id: QuestId,
    pub last_completed: NaiveDate,
    /// Consecutive calendar days completed, >= 1 once a completion exists
    /// (maintenance may clear it to 0)
    pub consecutive_days: u32,
    pub total_completions: u32,
}

impl ActivityRecord {
    /// Record for a quest's first-ever completion
    pub fn first(quest_id: QuestId, today: NaiveDate) -> Self {
        Self {
            quest_id,
            last_completed: today,
            consecutive_days: 1,
            total_completions: 1,
        }
    }

    pub fn days_idle(&self, today: NaiveDate) -> i64 {
        days_between(self.last_completed, today)
    }
}

/// Whether repeat completions on the same day advance the streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompletionMode {
    #[default]
    Normal,
    /// Repeat completions without daily cooldown; each one counts as a
    /// further consecutive day
    Endless,
}

impl CompletionMode {
    pub fn from_endless(endless: bool) -> Self {
        if endless {
            CompletionMode::Endless
        } else {
            CompletionMode::Normal
        }
    }
}

/// How the last completion relates to today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayRelation {
    SameDay,
    Yesterday,
    /// Two or more calendar days since the last completion
    Gap(i64),
    /// Last completion dated after today
    Future(i64),
}

impl DayRelation {
    pub fn between(last_completed: NaiveDate, today: NaiveDate) -> Self {
        match days_between(last_completed, today) {
            0 => DayRelation::SameDay,
            1 => DayRelation::Yesterday,
            days if days >= 2 => DayRelation::Gap(days),
            days => DayRelation::Future(-days),
        }
    }
}

/// Record after completing `quest_id` on `today`
pub fn record_completion(
    previous: Option<&ActivityRecord>,
    quest_id: &QuestId,
    today: NaiveDate,
    mode: CompletionMode,
) -> ActivityRecord {
    let Some(previous) = previous else {
        return ActivityRecord::first(quest_id.clone(), today);
    };
    let total_completions = previous.total_completions.saturating_add(1);

    match DayRelation::between(previous.last_completed, today) {
        DayRelation::SameDay => match mode {
            CompletionMode::Normal => ActivityRecord {
                total_completions,
                ..previous.clone()
            },
            CompletionMode::Endless => ActivityRecord {
                consecutive_days: previous.consecutive_days.saturating_add(1),
                total_completions,
                ..previous.clone()
            },
        },
        DayRelation::Yesterday => ActivityRecord {
            quest_id: previous.quest_id.clone(),
            last_completed: today,
            consecutive_days: previous.consecutive_days.saturating_add(1),
            total_completions,
        },
        DayRelation::Gap(days) => {
            tracing::debug!(
                "Quest {} streak broken after {} idle days",
                previous.quest_id,
                days
            );
            ActivityRecord {
                quest_id: previous.quest_id.clone(),
                last_completed: today,
                consecutive_days: 1,
                total_completions,
            }
        }
        // Clock went backwards: start the streak over from today
        DayRelation::Future(days) => {
            tracing::warn!(
                "Quest {} last completed {} days after today, restarting streak",
                previous.quest_id,
                days
            );
            ActivityRecord {
                quest_id: previous.quest_id.clone(),
                last_completed: today,
                consecutive_days: 1,
                total_completions,
            }
        }
    }
}

/// Whether a quest idle since `last_completed` should lose its
/// consecutive-day bonus (two or more calendar days of inactivity)
pub fn should_reset_multiplier(last_completed: NaiveDate, today: NaiveDate) -> bool {
    should_reset_after(last_completed, today, 2)
}

/// `should_reset_multiplier` with a configurable gap
pub fn should_reset_after(last_completed: NaiveDate, today: NaiveDate, gap_days: i64) -> bool {
    days_between(last_completed, today) >= gap_days
}
