//! Cumulative XP thresholds and their inverse
//!
//! The cost of each level step grows geometrically inside five bands. Each
//! band restarts its series from its own base cost, so the step cost drops
//! back at a band edge while the cumulative threshold stays continuous.

use std::sync::Mutex;

use crate::core::types::Xp;

/// One band of the level curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelBand {
    /// First level whose step cost belongs to this band
    pub first_level: u32,
    /// Last level of the band (inclusive)
    pub last_level: u32,
    /// Step cost of `first_level`
    pub base_cost: f64,
    /// Growth factor per level inside the band
    pub growth: f64,
}

pub static LEVEL_BANDS: [LevelBand; 5] = [
    LevelBand { first_level: 2, last_level: 10, base_cost: 500.0, growth: 1.2 },
    LevelBand { first_level: 11, last_level: 30, base_cost: 1500.0, growth: 1.25 },
    LevelBand { first_level: 31, last_level: 60, base_cost: 5000.0, growth: 1.3 },
    LevelBand { first_level: 61, last_level: 100, base_cost: 15000.0, growth: 1.35 },
    LevelBand { first_level: 101, last_level: u32::MAX, base_cost: 50000.0, growth: 1.4 },
];

/// First level whose threshold no longer fits in a `u64`
///
/// From here on thresholds saturate at `u64::MAX`.
pub const SATURATION_LEVEL: u32 = 197;

/// Thresholds for levels 1..=len, grown on demand
static THRESHOLDS: Mutex<Vec<u64>> = Mutex::new(Vec::new());

/// XP needed to advance from `level - 1` to `level`
///
/// Floored to an integer per step, before summing.
pub fn step_cost(level: u32) -> u64 {
    if level < 2 {
        return 0;
    }
    let band = LEVEL_BANDS
        .iter()
        .find(|band| level <= band.last_level)
        .unwrap_or(&LEVEL_BANDS[LEVEL_BANDS.len() - 1]);

    let exponent = (level - band.first_level) as f64;
    // `as` saturates, so overflowing steps pin to u64::MAX
    (band.base_cost * band.growth.powf(exponent)).floor() as u64
}

/// Cumulative XP required to reach `level`
///
/// Levels 0 and 1 require nothing. Thresholds strictly increase up to and
/// including `SATURATION_LEVEL`; every level past it shares `u64::MAX`.
pub fn threshold_for_level(level: u32) -> u64 {
    if level <= 1 {
        return 0;
    }
    if level >= SATURATION_LEVEL {
        return u64::MAX;
    }

    let mut cache = THRESHOLDS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if cache.is_empty() {
        cache.push(0);
    }
    while cache.len() < level as usize {
        let next_level = cache.len() as u32 + 1;
        let previous = cache[cache.len() - 1];
        cache.push(previous.saturating_add(step_cost(next_level)));
    }
    cache[level as usize - 1]
}

/// XP needed to go from `from` to `to` (zero when `to <= from`)
pub fn xp_between_levels(from: u32, to: u32) -> u64 {
    threshold_for_level(to).saturating_sub(threshold_for_level(from))
}

/// Level reached with `total_xp` accumulated
///
/// Finds the level L with `threshold(L) <= total_xp < threshold(L + 1)` by
/// doubling an upper bound, then binary searching below it.
pub fn level_for_xp(total_xp: Xp) -> u32 {
    if total_xp <= 0 {
        return 1;
    }
    let xp = total_xp as u64;

    let mut high: u32 = 2;
    while threshold_for_level(high) <= xp {
        high = high.saturating_mul(2);
    }

    // Invariant: threshold(low) <= xp < threshold(high)
    let mut low = high / 2;
    while high - low > 1 {
        let mid = low + (high - low) / 2;
        if threshold_for_level(mid) <= xp {
            low = mid;
        } else {
            high = mid;
        }
    }
    low.max(1)
}
