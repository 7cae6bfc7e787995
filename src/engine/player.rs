//! Everything the engine threads between completions for one player

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::activity::ActivityLog;
use crate::core::config::ProgressionConfig;
use crate::core::types::Xp;
use crate::engine::achievements::{achievements_met, Achievement, AchievementProgress, ALL_ACHIEVEMENTS};
use crate::engine::session::DailySession;
use crate::leveling::{level_for_xp, progress_snapshot, threshold_for_level, LevelProgress};
use crate::rewards::{variety_score_with, QuestCompletion};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub total_xp: Xp,
    pub session: DailySession,
    pub activities: ActivityLog,
    pub history: Vec<QuestCompletion>,
    pub achievements: BTreeSet<Achievement>,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> u32 {
        level_for_xp(self.total_xp)
    }

    pub fn progress(&self) -> LevelProgress {
        progress_snapshot(self.total_xp)
    }

    pub fn variety_score(&self, now: NaiveDateTime, config: &ProgressionConfig) -> f64 {
        variety_score_with(&self.history, now, config)
    }

    pub fn achievement_progress(&self) -> AchievementProgress {
        AchievementProgress {
            completions: self.history.len(),
            streak: self.session.streak,
            level: self.level(),
            total_xp: self.total_xp,
        }
    }

    /// Unlock every achievement whose condition now holds, returning the new ones
    pub fn unlock_achievements(&mut self) -> Vec<Achievement> {
        let progress = self.achievement_progress();
        let mut unlocked = Vec::new();
        for achievement in achievements_met(&progress) {
            if self.achievements.insert(achievement) {
                tracing::info!("Achievement unlocked: {}", achievement.name());
                unlocked.push(achievement);
            }
        }
        unlocked
    }

    // === DEVELOPER OPERATIONS ===

    pub fn add_xp(&mut self, amount: Xp) {
        self.total_xp = self.total_xp.saturating_add(amount);
    }

    /// Set total XP to the threshold of `level`
    pub fn set_level(&mut self, level: u32) {
        self.total_xp = Xp::try_from(threshold_for_level(level)).unwrap_or(Xp::MAX);
    }

    pub fn set_streak(&mut self, streak: u32) {
        self.session.streak = streak;
    }

    /// Unlock every achievement regardless of progress, returning the new ones
    pub fn unlock_all_achievements(&mut self) -> Vec<Achievement> {
        ALL_ACHIEVEMENTS
            .iter()
            .copied()
            .filter(|a| self.achievements.insert(*a))
            .collect()
    }

    /// Forget all progress
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
