//! Completion pipeline
//!
//! Sequences the three calculators for one completion: base XP, activity
//! record, reward, level. State lives in an explicit `PlayerState` owned by
//! the caller; the engine itself only holds configuration.

pub mod achievements;
pub mod player;
pub mod session;

pub use achievements::{achievements_met, Achievement, AchievementProgress, Rarity, ALL_ACHIEVEMENTS};
pub use player::PlayerState;
pub use session::DailySession;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::activity::{ActivityRecord, CompletionMode, MaintenanceReport};
use crate::core::config::ProgressionConfig;
use crate::core::error::{ProgressionError, Result};
use crate::core::types::{Quest, QuestId, Xp};
use crate::leveling::{level_for_xp, progress_snapshot, LevelProgress};
use crate::rewards::{QuestCompletion, RewardBreakdown, RewardCalculator, RewardInput};

/// Everything a completion produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionOutcome {
    pub quest_id: QuestId,
    pub reward: RewardBreakdown,
    pub activity: ActivityRecord,
    pub previous_level: u32,
    pub level: u32,
    pub progress: LevelProgress,
    pub new_achievements: Vec<Achievement>,
}

impl CompletionOutcome {
    pub fn final_xp(&self) -> Xp {
        self.reward.final_xp
    }

    pub fn leveled_up(&self) -> bool {
        self.level > self.previous_level
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProgressionEngine {
    calculator: RewardCalculator,
}

impl ProgressionEngine {
    pub fn new(config: ProgressionConfig) -> Self {
        Self {
            calculator: RewardCalculator::new(config),
        }
    }

    pub fn config(&self) -> &ProgressionConfig {
        self.calculator.config()
    }

    pub fn calculator(&self) -> &RewardCalculator {
        &self.calculator
    }

    fn completion_mode(&self) -> CompletionMode {
        CompletionMode::from_endless(self.config().endless_mode)
    }

    /// Complete `quest` at local time `now`
    ///
    /// `quantity` is required for per-unit quests and ignored otherwise.
    /// Outside endless mode the quest is flagged completed for the day.
    pub fn complete_quest(
        &self,
        state: &mut PlayerState,
        quest: &mut Quest,
        quantity: Option<f64>,
        now: NaiveDateTime,
    ) -> Result<CompletionOutcome> {
        let base_xp = quest.base_xp(quantity)?;
        let today = now.date();

        state.session.begin_day(today);
        let first_quest_of_day = state.session.is_first_quest_of_day();
        state.session.register(&quest.category, today);

        let activity = state
            .activities
            .complete(&quest.id, today, self.completion_mode());

        let input = RewardInput {
            base_xp,
            streak: state.session.streak as i64,
            categories_today: state.session.categories(),
            difficulty: quest.difficulty,
            quests_today: state.session.quests_today as i64,
            first_quest_of_day,
            consecutive_days: activity.consecutive_days as i64,
        };
        let reward = self.calculator.calculate(&input);

        let previous_level = level_for_xp(state.total_xp);
        state.add_xp(reward.final_xp);
        let level = level_for_xp(state.total_xp);
        if level > previous_level {
            tracing::info!("Level up: {} -> {}", previous_level, level);
        }

        state.history.push(QuestCompletion {
            quest_id: quest.id.clone(),
            category: quest.category.clone(),
            difficulty: quest.difficulty,
            base_xp,
            completed_at: now,
        });
        if self.completion_mode() == CompletionMode::Normal {
            quest.completed = true;
        }

        let new_achievements = state.unlock_achievements();

        tracing::debug!(
            "Quest {} completed: base {} -> {} XP",
            quest.id,
            base_xp,
            reward.final_xp
        );

        Ok(CompletionOutcome {
            quest_id: quest.id.clone(),
            reward,
            activity,
            previous_level,
            level,
            progress: progress_snapshot(state.total_xp),
            new_achievements,
        })
    }

    /// Look `quest_id` up in `quests` and complete it
    pub fn complete_by_id(
        &self,
        state: &mut PlayerState,
        quests: &mut [Quest],
        quest_id: &QuestId,
        quantity: Option<f64>,
        now: NaiveDateTime,
    ) -> Result<CompletionOutcome> {
        let quest = quests
            .iter_mut()
            .find(|q| &q.id == quest_id)
            .ok_or_else(|| ProgressionError::QuestNotFound(quest_id.to_string()))?;
        self.complete_quest(state, quest, quantity, now)
    }

    /// Periodic sweep: clear stale consecutive-day counters, drop long-idle
    /// records
    pub fn maintain(&self, state: &mut PlayerState, today: NaiveDate) -> MaintenanceReport {
        let config = self.config();
        state
            .activities
            .maintain(today, config.multiplier_reset_days, config.prune_after_days)
    }

    /// Mark every quest done for today without awarding XP
    ///
    /// Today's counters are set as if each quest had been completed, with
    /// every known category covered.
    pub fn complete_all_quests(&self, state: &mut PlayerState, quests: &mut [Quest]) {
        for quest in quests.iter_mut() {
            quest.completed = true;
        }
        state.session.quests_today = u32::try_from(quests.len()).unwrap_or(u32::MAX);
        state.session.categories_today = self.config().known_categories.iter().cloned().collect();
        tracing::info!("Marked {} quests completed", quests.len());
    }

    /// Start a fresh day by hand: clear completion flags and today's counters
    pub fn daily_reset(&self, state: &mut PlayerState, quests: &mut [Quest]) {
        for quest in quests.iter_mut() {
            quest.completed = false;
        }
        state.session.reset_daily();
    }
}
