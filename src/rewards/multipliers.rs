//! Individual bonus multipliers
//!
//! Every function is total over its integer domain and returns a value
//! >= 1.0. Counts at or below the lowest boundary (including negatives) land
//! in the lowest tier.

use ahash::AHashSet;

use crate::core::types::Difficulty;
use crate::rewards::constants::*;

fn tiered(value: i64, tiers: &[(i64, f64)], ceiling: f64) -> f64 {
    tiers
        .iter()
        .find(|(bound, _)| value < *bound)
        .map(|(_, mult)| *mult)
        .unwrap_or(ceiling)
}

/// Multiplier for the session streak (days engaged in a row)
pub fn streak_multiplier(streak: i64) -> f64 {
    tiered(streak, &STREAK_TIERS, STREAK_CEILING)
}

/// Multiplier for the number of distinct categories completed today
pub fn variety_multiplier(distinct_categories: usize) -> f64 {
    match distinct_categories {
        0 | 1 => 1.0,
        2 => VARIETY_TWO,
        3 => VARIETY_THREE,
        _ => VARIETY_CEILING,
    }
}

/// Count distinct labels, collapsing duplicates
pub fn distinct_categories<'a, I>(categories: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    categories.into_iter().collect::<AHashSet<_>>().len()
}

pub fn difficulty_multiplier(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Easy => DIFFICULTY_EASY,
        Difficulty::Medium => DIFFICULTY_MEDIUM,
        Difficulty::Hard => DIFFICULTY_HARD,
        Difficulty::Legendary => DIFFICULTY_LEGENDARY,
    }
}

/// Multiplier for quests completed today, counting the current one
pub fn completion_multiplier(quests_today: i64) -> f64 {
    tiered(quests_today, &COMPLETION_TIERS, COMPLETION_CEILING)
}

/// Linear per-quest consistency bonus: `1 + min(days * rate, cap)`
pub fn consistency_multiplier(consecutive_days: i64, rate: f64, cap: f64) -> f64 {
    let bonus = (consecutive_days as f64 * rate).min(cap).max(0.0);
    1.0 + bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streak_bands() {
        assert_eq!(streak_multiplier(-4), 1.0);
        assert_eq!(streak_multiplier(0), 1.0);
        assert_eq!(streak_multiplier(2), 1.0);
        assert_eq!(streak_multiplier(3), 1.10);
        assert_eq!(streak_multiplier(6), 1.10);
        assert_eq!(streak_multiplier(7), 1.25);
        assert_eq!(streak_multiplier(13), 1.25);
        assert_eq!(streak_multiplier(14), 1.50);
        assert_eq!(streak_multiplier(29), 1.50);
        assert_eq!(streak_multiplier(30), 1.75);
        assert_eq!(streak_multiplier(59), 1.75);
        assert_eq!(streak_multiplier(60), 2.0);
        assert_eq!(streak_multiplier(1000), 2.0);
    }

    #[test]
    fn test_variety_bands() {
        assert_eq!(variety_multiplier(0), 1.0);
        assert_eq!(variety_multiplier(1), 1.0);
        assert_eq!(variety_multiplier(2), 1.10);
        assert_eq!(variety_multiplier(3), 1.25);
        assert_eq!(variety_multiplier(4), 1.50);
        assert_eq!(variety_multiplier(9), 1.50);
    }

    #[test]
    fn test_distinct_categories_collapses_duplicates() {
        assert_eq!(distinct_categories(["daily", "daily", "work"]), 2);
        assert_eq!(distinct_categories(Vec::<&str>::new()), 0);
    }

    #[test]
    fn test_difficulty() {
        assert_eq!(difficulty_multiplier(Difficulty::Easy), 1.0);
        assert_eq!(difficulty_multiplier(Difficulty::Medium), 1.2);
        assert_eq!(difficulty_multiplier(Difficulty::Hard), 1.5);
        assert_eq!(difficulty_multiplier(Difficulty::Legendary), 2.0);
        assert_eq!(difficulty_multiplier(Difficulty::from_label("unknown")), 1.0);
    }

    #[test]
    fn test_completion_bands() {
        assert_eq!(completion_multiplier(0), 1.0);
        assert_eq!(completion_multiplier(2), 1.0);
        assert_eq!(completion_multiplier(3), 1.10);
        assert_eq!(completion_multiplier(5), 1.20);
        assert_eq!(completion_multiplier(7), 1.30);
        assert_eq!(completion_multiplier(9), 1.30);
        assert_eq!(completion_multiplier(10), 1.50);
    }

    #[test]
    fn test_consistency_is_linear_then_capped() {
        assert_eq!(consistency_multiplier(0, 0.05, 2.0), 1.0);
        assert!((consistency_multiplier(1, 0.05, 2.0) - 1.05).abs() < 1e-12);
        assert!((consistency_multiplier(10, 0.05, 2.0) - 1.5).abs() < 1e-12);
        assert_eq!(consistency_multiplier(40, 0.05, 2.0), 3.0);
        assert_eq!(consistency_multiplier(400, 0.05, 2.0), 3.0);
        assert_eq!(consistency_multiplier(-3, 0.05, 2.0), 1.0);
    }
}
