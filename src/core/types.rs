//! Core type definitions used throughout the codebase

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::{ProgressionError, Result};

/// Signed experience amount (negative for penalties)
pub type Xp = i64;

/// Unique identifier for quests
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestId(pub String);

impl QuestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Difficulty tier of a quest
///
/// Unknown labels deserialize to `Easy`, the lowest multiplier tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Legendary,
}

impl Difficulty {
    /// Parse a label case-insensitively, falling back to `Easy`
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            "legendary" => Difficulty::Legendary,
            _ => Difficulty::Easy,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Legendary => "legendary",
        }
    }

    /// Sort rank for quest lists (legendary first when sorted descending)
    pub fn rank(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
            Difficulty::Legendary => 4,
        }
    }
}

impl From<&str> for Difficulty {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

impl From<String> for Difficulty {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a quest's base XP is determined
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum QuestReward {
    /// Fixed amount per completion
    Fixed { xp: Xp },
    /// Amount per unit of a user-entered quantity (pages, minutes, reps...)
    PerUnit { rate: Xp },
}

/// A trackable habit with its reward definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: QuestId,
    pub title: String,
    pub reward: QuestReward,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Free-form label, only used for distinctness counting
    pub category: String,
    /// Done for today (cleared by the daily reset)
    #[serde(default)]
    pub completed: bool,
}

impl Quest {
    pub fn fixed(
        id: impl Into<String>,
        title: impl Into<String>,
        xp: Xp,
        difficulty: Difficulty,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: QuestId::new(id),
            title: title.into(),
            reward: QuestReward::Fixed { xp },
            difficulty,
            category: category.into(),
            completed: false,
        }
    }

    pub fn per_unit(
        id: impl Into<String>,
        title: impl Into<String>,
        rate: Xp,
        difficulty: Difficulty,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: QuestId::new(id),
            title: title.into(),
            reward: QuestReward::PerUnit { rate },
            difficulty,
            category: category.into(),
            completed: false,
        }
    }

    pub fn is_penalty(&self) -> bool {
        match self.reward {
            QuestReward::Fixed { xp } => xp < 0,
            QuestReward::PerUnit { rate } => rate < 0,
        }
    }

    /// Base XP before multipliers
    ///
    /// Fixed quests ignore `quantity`. Per-unit quests need a finite,
    /// non-negative quantity.
    pub fn base_xp(&self, quantity: Option<f64>) -> Result<f64> {
        match self.reward {
            QuestReward::Fixed { xp } => Ok(xp as f64),
            QuestReward::PerUnit { rate } => {
                let quantity =
                    quantity.ok_or_else(|| ProgressionError::MissingQuantity(self.id.0.clone()))?;
                if !quantity.is_finite() || quantity < 0.0 {
                    return Err(ProgressionError::InvalidQuantity {
                        quest: self.id.0.clone(),
                        quantity,
                    });
                }
                Ok(rate as f64 * quantity)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_from_label() {
        assert_eq!(Difficulty::from_label("medium"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label("HARD"), Difficulty::Hard);
        assert_eq!(Difficulty::from_label(" Legendary "), Difficulty::Legendary);
        assert_eq!(Difficulty::from_label("mythic"), Difficulty::Easy);
        assert_eq!(Difficulty::from_label(""), Difficulty::Easy);
    }

    #[test]
    fn test_unknown_difficulty_deserializes_as_easy() {
        let d: Difficulty = serde_json::from_str("\"mythic\"").unwrap();
        assert_eq!(d, Difficulty::Easy);
        let d: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(d, Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_rank_order() {
        assert!(Difficulty::Legendary.rank() > Difficulty::Hard.rank());
        assert!(Difficulty::Hard.rank() > Difficulty::Medium.rank());
        assert!(Difficulty::Medium.rank() > Difficulty::Easy.rank());
    }

    #[test]
    fn test_fixed_quest_ignores_quantity() {
        let quest = Quest::fixed("pray", "Morning prayer", 150, Difficulty::Medium, "spiritual");
        assert_eq!(quest.base_xp(None).unwrap(), 150.0);
        assert_eq!(quest.base_xp(Some(3.0)).unwrap(), 150.0);
        assert!(!quest.is_penalty());
    }

    #[test]
    fn test_per_unit_quest_scales_with_quantity() {
        let quest = Quest::per_unit("read", "Read pages", 25, Difficulty::Easy, "daily");
        assert_eq!(quest.base_xp(Some(4.0)).unwrap(), 100.0);
        assert_eq!(quest.base_xp(Some(1.5)).unwrap(), 37.5);
    }

    #[test]
    fn test_per_unit_quest_rejects_bad_quantity() {
        let quest = Quest::per_unit("read", "Read pages", 25, Difficulty::Easy, "daily");
        assert!(matches!(
            quest.base_xp(None),
            Err(ProgressionError::MissingQuantity(_))
        ));
        assert!(matches!(
            quest.base_xp(Some(-1.0)),
            Err(ProgressionError::InvalidQuantity { .. })
        ));
        assert!(matches!(
            quest.base_xp(Some(f64::NAN)),
            Err(ProgressionError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_penalty_quest() {
        let quest = Quest::per_unit("smoke", "Cigarette", -75, Difficulty::Easy, "daily");
        assert!(quest.is_penalty());
        assert_eq!(quest.base_xp(Some(2.0)).unwrap(), -150.0);
    }
}
