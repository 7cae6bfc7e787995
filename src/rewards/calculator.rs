//! Final XP computation
//!
//! All bonuses multiply together with the base value, then the product is
//! rounded half away from zero. The sign of the base never changes the
//! pipeline: penalties are amplified exactly like rewards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::config::{config, ProgressionConfig};
use crate::core::types::{Difficulty, Xp};
use crate::rewards::multipliers::{
    completion_multiplier, consistency_multiplier, difficulty_multiplier, distinct_categories,
    streak_multiplier, variety_multiplier,
};

/// Everything the calculator needs to score one completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardInput {
    /// Base XP before bonuses (negative for penalty quests)
    pub base_xp: f64,
    /// Session streak in days
    pub streak: i64,
    /// Categories completed today, this completion included
    pub categories_today: Vec<String>,
    pub difficulty: Difficulty,
    /// Quests completed today, this completion included
    pub quests_today: i64,
    pub first_quest_of_day: bool,
    /// Consecutive-day count from the quest's activity record
    pub consecutive_days: i64,
}

impl RewardInput {
    pub fn new(base_xp: f64) -> Self {
        Self {
            base_xp,
            streak: 0,
            categories_today: Vec::new(),
            difficulty: Difficulty::Easy,
            quests_today: 1,
            first_quest_of_day: false,
            consecutive_days: 0,
        }
    }

    pub fn with_streak(mut self, streak: i64) -> Self {
        self.streak = streak;
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories_today = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_quests_today(mut self, quests_today: i64) -> Self {
        self.quests_today = quests_today;
        self
    }

    pub fn first_of_day(mut self, first: bool) -> Self {
        self.first_quest_of_day = first;
        self
    }

    pub fn with_consecutive_days(mut self, days: i64) -> Self {
        self.consecutive_days = days;
        self
    }
}

/// The multipliers that went into one award
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Multipliers {
    pub streak: f64,
    pub variety: f64,
    pub difficulty: f64,
    pub completion: f64,
    pub consistency: f64,
    /// 1.0 unless this was the first quest of the day
    pub first_quest: f64,
}

impl Multipliers {
    pub fn product(&self) -> f64 {
        self.streak * self.variety * self.difficulty * self.completion * self.consistency * self.first_quest
    }

    /// Scale `base_xp` one multiplier at a time, first-quest bonus last
    ///
    /// The order matters at rounding ties: `base * (a * b)` and
    /// `(base * a) * b` can land on opposite sides of `.5`.
    pub fn apply(&self, base_xp: f64) -> f64 {
        base_xp * self.streak * self.variety * self.difficulty * self.completion * self.consistency
            * self.first_quest
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusKind {
    Streak,
    Variety,
    Difficulty,
    Completion,
    Consistency,
    FirstQuest,
}

impl BonusKind {
    pub fn name(&self) -> &'static str {
        match self {
            BonusKind::Streak => "Streak",
            BonusKind::Variety => "Variety",
            BonusKind::Difficulty => "Difficulty",
            BonusKind::Completion => "Completion",
            BonusKind::Consistency => "Consistency",
            BonusKind::FirstQuest => "First Quest",
        }
    }
}

/// A bonus that actually raised the award
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppliedBonus {
    pub kind: BonusKind,
    pub multiplier: f64,
    /// `round((multiplier - 1) * 100)`
    pub percent: i64,
}

impl AppliedBonus {
    fn new(kind: BonusKind, multiplier: f64) -> Self {
        Self {
            kind,
            multiplier,
            percent: ((multiplier - 1.0) * 100.0).round() as i64,
        }
    }
}

impl fmt::Display for AppliedBonus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}%", self.kind.name(), self.percent)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardBreakdown {
    pub base_xp: f64,
    pub final_xp: Xp,
    pub multipliers: Multipliers,
    /// Non-unity bonuses, for display
    pub bonuses: Vec<AppliedBonus>,
}

/// Scores completions against a progression config
#[derive(Debug, Clone, Default)]
pub struct RewardCalculator {
    config: ProgressionConfig,
}

impl RewardCalculator {
    pub fn new(config: ProgressionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    pub fn multipliers(&self, input: &RewardInput) -> Multipliers {
        multipliers_with(&self.config, input)
    }

    pub fn calculate(&self, input: &RewardInput) -> RewardBreakdown {
        calculate_with(&self.config, input)
    }
}

/// Multipliers for `input` under `config`
pub fn multipliers_with(config: &ProgressionConfig, input: &RewardInput) -> Multipliers {
    let categories = distinct_categories(input.categories_today.iter().map(String::as_str));
    Multipliers {
        streak: streak_multiplier(input.streak),
        variety: variety_multiplier(categories),
        difficulty: difficulty_multiplier(input.difficulty),
        completion: completion_multiplier(input.quests_today),
        consistency: consistency_multiplier(
            input.consecutive_days,
            config.consistency_rate,
            config.consistency_cap,
        ),
        first_quest: if input.first_quest_of_day {
            config.first_quest_bonus
        } else {
            1.0
        },
    }
}

/// Score `input` against a borrowed config
pub fn calculate_with(config: &ProgressionConfig, input: &RewardInput) -> RewardBreakdown {
    let base_xp = if input.base_xp.is_finite() {
        input.base_xp
    } else {
        tracing::warn!("Non-finite base XP {} treated as zero", input.base_xp);
        0.0
    };

    let multipliers = multipliers_with(config, input);
    // f64 -> i64 `as` saturates on overflow
    let final_xp = multipliers.apply(base_xp).round() as Xp;

    let bonuses = [
        (BonusKind::Streak, multipliers.streak),
        (BonusKind::Variety, multipliers.variety),
        (BonusKind::Difficulty, multipliers.difficulty),
        (BonusKind::Completion, multipliers.completion),
        (BonusKind::Consistency, multipliers.consistency),
        (BonusKind::FirstQuest, multipliers.first_quest),
    ]
    .into_iter()
    .filter(|(_, mult)| *mult > 1.0)
    .map(|(kind, mult)| AppliedBonus::new(kind, mult))
    .collect();

    RewardBreakdown {
        base_xp,
        final_xp,
        multipliers,
        bonuses,
    }
}

/// Score a completion with the global configuration
pub fn calculate_final_xp(input: &RewardInput) -> RewardBreakdown {
    calculate_with(config(), input)
}
