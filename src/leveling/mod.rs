//! Level curve
//!
//! Maps cumulative XP to a level and back. Thresholds are pure functions of
//! the level and are cached as they are first computed.

pub mod curve;
pub mod progress;

pub use curve::{level_for_xp, step_cost, threshold_for_level, xp_between_levels, LevelBand, LEVEL_BANDS, SATURATION_LEVEL};
pub use progress::{example_levels, level_requirement, progress_snapshot, LevelProgress, LevelRequirement, EXAMPLE_LEVELS};
