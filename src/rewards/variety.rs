//! Variety score: share of the known categories touched recently
//!
//! A reporting statistic only. It does not feed the reward multipliers.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::config::ProgressionConfig;
use crate::core::types::{Difficulty, QuestId};

/// A completed quest, as kept in the player's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestCompletion {
    pub quest_id: QuestId,
    pub category: String,
    pub difficulty: Difficulty,
    pub base_xp: f64,
    pub completed_at: NaiveDateTime,
}

/// Percentage (0 to 100) of `known_categories` seen within the last
/// `window_days` before `now`
///
/// Labels outside the known set are ignored.
pub fn variety_score(
    completions: &[QuestCompletion],
    now: NaiveDateTime,
    window_days: i64,
    known_categories: &[String],
) -> f64 {
    if known_categories.is_empty() {
        return 0.0;
    }
    let cutoff = Duration::try_days(window_days)
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(NaiveDateTime::MIN);

    let seen = known_categories
        .iter()
        .filter(|known| {
            completions
                .iter()
                .any(|c| c.completed_at >= cutoff && &c.category == *known)
        })
        .count();

    100.0 * seen as f64 / known_categories.len() as f64
}

/// Variety score over the config's window and category universe
pub fn variety_score_with(
    completions: &[QuestCompletion],
    now: NaiveDateTime,
    config: &ProgressionConfig,
) -> f64 {
    variety_score(
        completions,
        now,
        config.variety_window_days,
        &config.known_categories,
    )
}
