pub mod calendar;
pub mod config;
pub mod error;
pub mod types;

pub use calendar::{days_between, format_time_remaining, time_until_next_day, TimeRemaining};
pub use config::{config, set_config, ProgressionConfig};
pub use error::{ProgressionError, Result};
pub use types::{Difficulty, Quest, QuestId, QuestReward, Xp};
