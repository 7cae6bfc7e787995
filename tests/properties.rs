//! Property tests for the level curve, reward multipliers and tracker

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use questforge::activity::{record_completion, ActivityRecord, CompletionMode};
use questforge::core::types::{Difficulty, QuestId};
use questforge::leveling::{level_for_xp, progress_snapshot, threshold_for_level};
use questforge::rewards::{
    calculate_final_xp, completion_multiplier, streak_multiplier, variety_multiplier, RewardInput,
};

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
        Just(Difficulty::Legendary),
    ]
}

proptest! {
    #[test]
    fn level_brackets_total_xp(xp in 0i64..i64::MAX) {
        let level = level_for_xp(xp);
        prop_assert!(threshold_for_level(level) <= xp as u64);
        prop_assert!((xp as u64) < threshold_for_level(level + 1));
    }

    #[test]
    fn level_never_decreases_with_xp(a in -1_000i64..50_000_000_000, b in -1_000i64..50_000_000_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(level_for_xp(lo) <= level_for_xp(hi));
    }

    #[test]
    fn progress_percent_in_range(xp in any::<i64>()) {
        let snap = progress_snapshot(xp);
        prop_assert!(snap.level >= 1);
        prop_assert!((0.0..=100.0).contains(&snap.progress_percent));
    }

    #[test]
    fn multipliers_are_monotonic(n in -10i64..200) {
        prop_assert!(streak_multiplier(n) <= streak_multiplier(n + 1));
        prop_assert!(completion_multiplier(n) <= completion_multiplier(n + 1));
        prop_assert!(streak_multiplier(n) >= 1.0);
    }

    #[test]
    fn variety_is_monotonic(n in 0usize..10) {
        prop_assert!(variety_multiplier(n) <= variety_multiplier(n + 1));
    }

    #[test]
    fn sign_is_preserved(
        base in -10_000i64..10_000,
        streak in 0i64..100,
        quests in 1i64..20,
        consecutive in 0i64..60,
        first in any::<bool>(),
        difficulty in difficulty(),
    ) {
        let input = RewardInput::new(base as f64)
            .with_streak(streak)
            .with_categories(["daily", "work"])
            .with_difficulty(difficulty)
            .with_quests_today(quests)
            .first_of_day(first)
            .with_consecutive_days(consecutive);
        let result = calculate_final_xp(&input);
        match base.signum() {
            0 => prop_assert_eq!(result.final_xp, 0),
            1 => prop_assert!(result.final_xp >= base),
            _ => prop_assert!(result.final_xp <= base),
        }
    }

    #[test]
    fn tracker_counts_every_completion(gaps in prop::collection::vec(0i64..5, 1..30)) {
        let id = QuestId::new("habit");
        let mut day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut record: Option<ActivityRecord> = None;
        for gap in &gaps {
            day += Duration::days(*gap);
            let next = record_completion(record.as_ref(), &id, day, CompletionMode::Normal);
            prop_assert!(next.consecutive_days >= 1);
            prop_assert_eq!(next.last_completed, day);
            record = Some(next);
        }
        let record = record.unwrap();
        prop_assert_eq!(record.total_completions as usize, gaps.len());
        prop_assert!(record.consecutive_days as usize <= gaps.len());
    }
}
