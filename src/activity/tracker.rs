//! Activity log: the quest id -> record map and its maintenance sweep

use ahash::AHashMap;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::activity::record::{record_completion, should_reset_after, ActivityRecord, CompletionMode};
use crate::core::types::QuestId;

/// Result of a maintenance pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceReport {
    /// Records whose consecutive-day counter was cleared
    pub reset: Vec<QuestId>,
    /// Records dropped for inactivity
    pub pruned: Vec<QuestId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityLog {
    records: AHashMap<QuestId, ActivityRecord>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, quest_id: &QuestId) -> Option<&ActivityRecord> {
        self.records.get(quest_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActivityRecord> {
        self.records.values()
    }

    pub fn insert(&mut self, record: ActivityRecord) {
        self.records.insert(record.quest_id.clone(), record);
    }

    /// Apply a completion of `quest_id` on `today`, returning the new record
    pub fn complete(&mut self, quest_id: &QuestId, today: NaiveDate, mode: CompletionMode) -> ActivityRecord {
        let updated = record_completion(self.records.get(quest_id), quest_id, today, mode);
        self.records.insert(quest_id.clone(), updated.clone());
        updated
    }

    /// Clear `consecutive_days` on records idle for `gap_days` or more
    ///
    /// History (last date, total completions) is kept.
    pub fn reset_stale(&mut self, today: NaiveDate, gap_days: i64) -> Vec<QuestId> {
        let mut reset = Vec::new();
        for record in self.records.values_mut() {
            if record.consecutive_days > 0 && should_reset_after(record.last_completed, today, gap_days) {
                record.consecutive_days = 0;
                reset.push(record.quest_id.clone());
            }
        }
        reset.sort();
        reset
    }

    /// Drop records last completed more than `max_idle_days` before today
    pub fn prune(&mut self, today: NaiveDate, max_idle_days: i64) -> Vec<QuestId> {
        let mut pruned: Vec<QuestId> = self
            .records
            .values()
            .filter(|record| record.days_idle(today) > max_idle_days)
            .map(|record| record.quest_id.clone())
            .collect();
        for quest_id in &pruned {
            self.records.remove(quest_id);
        }
        pruned.sort();
        pruned
    }

    /// Reset stale streaks, then prune long-idle records
    pub fn maintain(&mut self, today: NaiveDate, reset_gap_days: i64, prune_after_days: i64) -> MaintenanceReport {
        let reset = self.reset_stale(today, reset_gap_days);
        let pruned = self.prune(today, prune_after_days);
        if !reset.is_empty() || !pruned.is_empty() {
            tracing::info!(
                "Activity maintenance: {} streaks reset, {} records pruned",
                reset.len(),
                pruned.len()
            );
        }
        MaintenanceReport { reset, pruned }
    }
}

impl FromIterator<ActivityRecord> for ActivityLog {
    fn from_iter<I: IntoIterator<Item = ActivityRecord>>(iter: I) -> Self {
        Self {
            records: iter
                .into_iter()
                .map(|record| (record.quest_id.clone(), record))
                .collect(),
        }
    }
}
