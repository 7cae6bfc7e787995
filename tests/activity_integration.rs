//! Integration tests for per-quest activity tracking

use chrono::{Duration, NaiveDate};
use questforge::activity::{
    record_completion, should_reset_multiplier, ActivityLog, CompletionMode,
};
use questforge::core::types::QuestId;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 30).unwrap()
}

/// Test 1: First completion, next day, then a two-day skip
#[test]
fn test_meditation_timeline() {
    let id = QuestId::new("meditate");
    let today = start();

    let rec = record_completion(None, &id, today, CompletionMode::Normal);
    assert_eq!(rec.last_completed, today);
    assert_eq!((rec.consecutive_days, rec.total_completions), (1, 1));

    let tomorrow = today + Duration::days(1);
    let rec = record_completion(Some(&rec), &id, tomorrow, CompletionMode::Normal);
    assert_eq!((rec.consecutive_days, rec.total_completions), (2, 2));

    // Skip two days
    let later = tomorrow + Duration::days(3);
    let rec = record_completion(Some(&rec), &id, later, CompletionMode::Normal);
    assert_eq!(rec.last_completed, later);
    assert_eq!((rec.consecutive_days, rec.total_completions), (1, 3));
}

/// Test 2: Streaks run across month and year boundaries
#[test]
fn test_streak_across_year_end() {
    let mut log = ActivityLog::new();
    let id = QuestId::new("journal");
    for offset in 0..5 {
        log.complete(&id, start() + Duration::days(offset), CompletionMode::Normal);
    }
    let rec = log.get(&id).unwrap();
    assert_eq!(rec.consecutive_days, 5);
    assert_eq!(rec.last_completed, NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());
}

/// Test 3: Several completions on one day only count once toward the streak
#[test]
fn test_same_day_repeats() {
    let mut log = ActivityLog::new();
    let id = QuestId::new("water");
    for _ in 0..4 {
        log.complete(&id, start(), CompletionMode::Normal);
    }
    let rec = log.get(&id).unwrap();
    assert_eq!((rec.consecutive_days, rec.total_completions), (1, 4));
}

/// Test 4: Endless mode turns every repeat into another streak day
#[test]
fn test_endless_mode_simulates_days() {
    let mut log = ActivityLog::new();
    let id = QuestId::new("pushups");
    for _ in 0..10 {
        log.complete(&id, start(), CompletionMode::Endless);
    }
    let rec = log.get(&id).unwrap();
    assert_eq!((rec.consecutive_days, rec.total_completions), (10, 10));
}

/// Test 5: Multiplier reset boundary is exactly two days
#[test]
fn test_reset_boundary() {
    let today = start();
    assert!(!should_reset_multiplier(today - Duration::days(1), today));
    assert!(should_reset_multiplier(today - Duration::days(2), today));
}

/// Test 6: Maintenance clears streaks at two days but only prunes after thirty
#[test]
fn test_reset_and_prune_are_separate_rules() {
    let mut log = ActivityLog::new();
    let today = start();
    let stale = QuestId::new("stale");
    let ancient = QuestId::new("ancient");
    log.complete(&stale, today - Duration::days(5), CompletionMode::Normal);
    log.complete(&ancient, today - Duration::days(31), CompletionMode::Normal);

    let report = log.maintain(today, 2, 30);
    assert_eq!(report.pruned, vec![ancient.clone()]);
    assert!(report.reset.contains(&stale));

    let rec = log.get(&stale).unwrap();
    assert_eq!(rec.consecutive_days, 0);
    assert_eq!(rec.total_completions, 1);
    assert!(log.get(&ancient).is_none());
}

/// Test 7: Records survive a serialization round trip through JSON
#[test]
fn test_log_serializes() {
    let mut log = ActivityLog::new();
    log.complete(&QuestId::new("read"), start(), CompletionMode::Normal);
    let json = serde_json::to_string(&log).unwrap();
    assert!(json.contains("\"read\""));
    let restored: ActivityLog = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, log);
}
