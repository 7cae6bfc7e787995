//! Progression configuration with documented constants
//!
//! The scalar knobs of the reward and tracking rules live here. Band tables
//! (streak tiers, level bands...) are fixed constants in their own modules.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{ProgressionError, Result};

/// Configuration for the reward pipeline and activity tracking
///
/// Defaults reproduce the stock reward rules. Every field may be omitted
/// from a TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    // === REWARDS ===
    /// Extra multiplier for the first quest completed on a calendar day
    pub first_quest_bonus: f64,

    /// Consistency bonus per consecutive day of the same quest
    ///
    /// At 0.05 the bonus grows 5% per day.
    pub consistency_rate: f64,

    /// Upper bound of the consistency bonus (added to 1.0)
    ///
    /// With the default rate, the 2.0 cap is reached after 40 days.
    pub consistency_cap: f64,

    // === ACTIVITY TRACKING ===
    /// Gap in calendar days after which a quest's consecutive-day counter
    /// is cleared by maintenance
    pub multiplier_reset_days: i64,

    /// Records idle for more than this many days are dropped by maintenance
    pub prune_after_days: i64,

    /// Repeat completions on the same day keep growing the consecutive-day
    /// counter
    pub endless_mode: bool,

    // === REPORTING ===
    /// Trailing window for the variety score
    pub variety_window_days: i64,

    /// Category universe the variety score is measured against
    pub known_categories: Vec<String>,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            first_quest_bonus: 1.25,
            consistency_rate: 0.05,
            consistency_cap: 2.0,

            multiplier_reset_days: 2,
            prune_after_days: 30,
            endless_mode: false,

            variety_window_days: 7,
            known_categories: ["daily", "weekly", "spiritual", "work"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl ProgressionConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: ProgressionConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!("Loaded progression config from {}", path.display());
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !self.first_quest_bonus.is_finite() || self.first_quest_bonus < 1.0 {
            return Err(ProgressionError::InvalidConfig(format!(
                "first_quest_bonus ({}) must be a finite value >= 1.0",
                self.first_quest_bonus
            )));
        }

        if !self.consistency_rate.is_finite() || self.consistency_rate < 0.0 {
            return Err(ProgressionError::InvalidConfig(format!(
                "consistency_rate ({}) must be non-negative",
                self.consistency_rate
            )));
        }

        if !self.consistency_cap.is_finite() || self.consistency_cap < 0.0 {
            return Err(ProgressionError::InvalidConfig(format!(
                "consistency_cap ({}) must be non-negative",
                self.consistency_cap
            )));
        }

        // A one-day gap is an ordinary consecutive completion
        if self.multiplier_reset_days < 2 {
            return Err(ProgressionError::InvalidConfig(format!(
                "multiplier_reset_days ({}) must be >= 2",
                self.multiplier_reset_days
            )));
        }

        if self.prune_after_days < self.multiplier_reset_days {
            return Err(ProgressionError::InvalidConfig(format!(
                "prune_after_days ({}) should be >= multiplier_reset_days ({})",
                self.prune_after_days, self.multiplier_reset_days
            )));
        }

        if self.variety_window_days <= 0 {
            return Err(ProgressionError::InvalidConfig(
                "variety_window_days must be positive".into(),
            ));
        }

        if self.known_categories.is_empty() {
            return Err(ProgressionError::InvalidConfig(
                "known_categories must not be empty".into(),
            ));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<ProgressionConfig> = OnceLock::new();

/// Get the global progression config (initializes with defaults if not set)
pub fn config() -> &'static ProgressionConfig {
    CONFIG.get_or_init(ProgressionConfig::default)
}

/// Set the global progression config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: ProgressionConfig) -> std::result::Result<(), ProgressionConfig> {
    CONFIG.set(config)
}
