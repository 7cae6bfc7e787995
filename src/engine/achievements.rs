//! Milestone achievements unlocked by player progress

use serde::{Deserialize, Serialize};

use crate::core::types::Xp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Achievement {
    /// Complete any quest
    FirstSteps,
    /// Reach a 7-day engagement streak
    StreakWarrior,
    /// Reach level 5
    LevelMaster,
    /// Accumulate 10,000 XP
    XpHunter,
}

pub const ALL_ACHIEVEMENTS: [Achievement; 4] = [
    Achievement::FirstSteps,
    Achievement::StreakWarrior,
    Achievement::LevelMaster,
    Achievement::XpHunter,
];

const STREAK_WARRIOR_DAYS: u32 = 7;
const LEVEL_MASTER_LEVEL: u32 = 5;
const XP_HUNTER_XP: Xp = 10_000;

/// Player figures achievements are judged on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementProgress {
    pub completions: usize,
    pub streak: u32,
    pub level: u32,
    pub total_xp: Xp,
}

impl Achievement {
    pub fn name(&self) -> &'static str {
        match self {
            Achievement::FirstSteps => "First Steps",
            Achievement::StreakWarrior => "Streak Warrior",
            Achievement::LevelMaster => "Level Master",
            Achievement::XpHunter => "XP Hunter",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Achievement::FirstSteps => "Complete your first quest",
            Achievement::StreakWarrior => "Maintain a 7-day streak",
            Achievement::LevelMaster => "Reach level 5",
            Achievement::XpHunter => "Accumulate 10,000 XP",
        }
    }

    pub fn rarity(&self) -> Rarity {
        match self {
            Achievement::FirstSteps => Rarity::Common,
            Achievement::StreakWarrior => Rarity::Rare,
            Achievement::LevelMaster => Rarity::Epic,
            Achievement::XpHunter => Rarity::Legendary,
        }
    }

    pub fn is_met(&self, progress: &AchievementProgress) -> bool {
        match self {
            Achievement::FirstSteps => progress.completions > 0,
            Achievement::StreakWarrior => progress.streak >= STREAK_WARRIOR_DAYS,
            Achievement::LevelMaster => progress.level >= LEVEL_MASTER_LEVEL,
            Achievement::XpHunter => progress.total_xp >= XP_HUNTER_XP,
        }
    }
}

/// Achievements whose condition currently holds
pub fn achievements_met(progress: &AchievementProgress) -> Vec<Achievement> {
    ALL_ACHIEVEMENTS
        .iter()
        .copied()
        .filter(|a| a.is_met(progress))
        .collect()
}
