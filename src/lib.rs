//! Questforge - habit gamification engine
//!
//! Converts quest completions into XP with streak, variety, difficulty,
//! completion-count and consistency bonuses, maps total XP onto a banded
//! level curve, and tracks per-quest consecutive-day activity.

pub mod activity;
pub mod core;
pub mod engine;
pub mod leveling;
pub mod rewards;
