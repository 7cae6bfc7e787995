//! Activity tracker
//!
//! One record per quest: when it was last done, how many calendar days in a
//! row, and how often overall. Transitions are pure; the caller owns and
//! persists the records.

pub mod record;
pub mod tracker;

pub use record::{record_completion, should_reset_after, should_reset_multiplier, ActivityRecord, CompletionMode, DayRelation};
pub use tracker::{ActivityLog, MaintenanceReport};
