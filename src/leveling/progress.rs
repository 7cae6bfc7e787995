//! Level progress snapshots for progress bars and level tables

use serde::{Deserialize, Serialize};

use crate::core::types::Xp;
use crate::leveling::curve::{level_for_xp, threshold_for_level, xp_between_levels};

/// Derived view of where a total XP value sits on the level curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelProgress {
    pub level: u32,
    pub xp_at_level_start: u64,
    pub xp_at_next_level: u64,
    /// Progress between the two thresholds, in [0, 100]
    pub progress_percent: f64,
    pub xp_to_next: u64,
}

impl LevelProgress {
    /// Fraction of the current level completed (0.0 to 1.0), for bar fills
    pub fn bar_fill(&self) -> f64 {
        self.progress_percent / 100.0
    }
}

/// Snapshot of level progress for `total_xp`
pub fn progress_snapshot(total_xp: Xp) -> LevelProgress {
    let level = level_for_xp(total_xp);
    let start = threshold_for_level(level);
    let next = threshold_for_level(level + 1);

    let span = next.saturating_sub(start) as f64;
    let into_level = total_xp as f64 - start as f64;
    let progress_percent = if span > 0.0 {
        (100.0 * into_level / span).clamp(0.0, 100.0)
    } else {
        100.0
    };

    let xp_to_next = (next as i128 - total_xp as i128).clamp(0, u64::MAX as i128) as u64;

    LevelProgress {
        level,
        xp_at_level_start: start,
        xp_at_next_level: next,
        progress_percent,
        xp_to_next,
    }
}

/// One row of the level requirement table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRequirement {
    pub level: u32,
    pub total_xp: u64,
    /// Cost of the step into this level
    pub xp_this_level: u64,
}

/// Levels shown in the requirement table
pub const EXAMPLE_LEVELS: [u32; 19] = [
    1, 2, 3, 4, 5, 10, 15, 20, 30, 40, 50, 60, 70, 80, 90, 100, 125, 150, 175,
];

pub fn level_requirement(level: u32) -> LevelRequirement {
    LevelRequirement {
        level,
        total_xp: threshold_for_level(level),
        xp_this_level: if level <= 1 {
            0
        } else {
            xp_between_levels(level - 1, level)
        },
    }
}

pub fn example_levels() -> Vec<LevelRequirement> {
    EXAMPLE_LEVELS.iter().map(|&level| level_requirement(level)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_at_zero() {
        let snap = progress_snapshot(0);
        assert_eq!(snap.level, 1);
        assert_eq!(snap.xp_at_level_start, 0);
        assert_eq!(snap.xp_at_next_level, 500);
        assert_eq!(snap.progress_percent, 0.0);
        assert_eq!(snap.xp_to_next, 500);
    }

    #[test]
    fn test_snapshot_mid_level() {
        // Level 2 spans 500..1100
        let snap = progress_snapshot(800);
        assert_eq!(snap.level, 2);
        assert_eq!(snap.progress_percent, 50.0);
        assert_eq!(snap.xp_to_next, 300);
        assert_eq!(snap.bar_fill(), 0.5);
    }

    #[test]
    fn test_snapshot_negative_xp_clamps() {
        let snap = progress_snapshot(-1000);
        assert_eq!(snap.level, 1);
        assert_eq!(snap.progress_percent, 0.0);
        assert_eq!(snap.xp_to_next, 1500);
    }

    #[test]
    fn test_snapshot_exact_threshold() {
        let snap = progress_snapshot(1100);
        assert_eq!(snap.level, 3);
        assert_eq!(snap.progress_percent, 0.0);
        assert_eq!(snap.xp_to_next, 720);
    }

    #[test]
    fn test_example_levels() {
        let table = example_levels();
        assert_eq!(table.len(), EXAMPLE_LEVELS.len());
        assert_eq!(table[0], LevelRequirement { level: 1, total_xp: 0, xp_this_level: 0 });
        assert_eq!(table[1], LevelRequirement { level: 2, total_xp: 500, xp_this_level: 500 });
        assert!(table.windows(2).all(|w| w[0].total_xp < w[1].total_xp));
    }
}
