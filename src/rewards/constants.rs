//! Reward band tables - every tier boundary in one place
//!
//! Each table is `(exclusive upper bound, multiplier)`, scanned in order.
//! Values past the last bound get the table's ceiling multiplier.

// Session streak (consecutive days the user engaged at all)
pub const STREAK_TIERS: [(i64, f64); 5] = [(3, 1.0), (7, 1.10), (14, 1.25), (30, 1.50), (60, 1.75)];
pub const STREAK_CEILING: f64 = 2.0;

// Quests completed today, counting the one being scored
pub const COMPLETION_TIERS: [(i64, f64); 4] = [(3, 1.0), (5, 1.10), (7, 1.20), (10, 1.30)];
pub const COMPLETION_CEILING: f64 = 1.5;

// Distinct categories completed today
pub const VARIETY_TWO: f64 = 1.10;
pub const VARIETY_THREE: f64 = 1.25;
pub const VARIETY_CEILING: f64 = 1.50;

// Difficulty tiers
pub const DIFFICULTY_EASY: f64 = 1.0;
pub const DIFFICULTY_MEDIUM: f64 = 1.2;
pub const DIFFICULTY_HARD: f64 = 1.5;
pub const DIFFICULTY_LEGENDARY: f64 = 2.0;
