//! Reward calculator
//!
//! Turns a quest's base XP plus the day's session context into the final
//! award. A quest done on a long streak, across many categories, at high
//! difficulty and many days in a row is worth several times its base value.

pub mod calculator;
pub mod constants;
pub mod multipliers;
pub mod variety;

pub use calculator::{calculate_final_xp, calculate_with, multipliers_with, AppliedBonus, BonusKind, Multipliers, RewardBreakdown, RewardCalculator, RewardInput};
pub use multipliers::{completion_multiplier, consistency_multiplier, difficulty_multiplier, distinct_categories, streak_multiplier, variety_multiplier};
pub use variety::{variety_score, variety_score_with, QuestCompletion};
