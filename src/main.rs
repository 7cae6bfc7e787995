//! Questforge - Entry Point
//!
//! Command-line window onto the progression engine: inspect the level
//! curve, snapshot a total XP value, or score a hypothetical completion.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use questforge::core::error::Result;
use questforge::core::types::Difficulty;
use questforge::core::{set_config, ProgressionConfig};
use questforge::leveling::{example_levels, progress_snapshot};
use questforge::rewards::{calculate_final_xp, RewardInput};
use tracing_subscriber::EnvFilter;

/// Questforge - XP, levels and streaks for real-world habits
#[derive(Parser, Debug)]
#[command(name = "questforge")]
#[command(about = "Inspect the questforge leveling curve and reward rules")]
struct Args {
    /// Progression config (TOML); defaults apply when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cumulative XP required for a selection of levels
    Levels,

    /// Level and progress for a total XP value
    Progress {
        #[arg(allow_negative_numbers = true)]
        total_xp: i64,
    },

    /// Score one completion
    Reward {
        /// Base XP (negative for penalties)
        #[arg(long, allow_negative_numbers = true)]
        base: f64,

        /// Session streak in days
        #[arg(long, default_value_t = 0)]
        streak: i64,

        /// Category completed today (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,

        /// easy, medium, hard or legendary
        #[arg(long, default_value = "easy")]
        difficulty: String,

        /// Quests completed today, this one included
        #[arg(long, default_value_t = 1)]
        quests_today: i64,

        /// First quest of the day
        #[arg(long)]
        first: bool,

        /// Consecutive days for this quest
        #[arg(long, default_value_t = 0)]
        consecutive_days: i64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("questforge=info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ProgressionConfig::load(path)?,
        None => ProgressionConfig::default(),
    };
    if set_config(config).is_err() {
        tracing::warn!("Progression config already initialized");
    }

    match args.command {
        Command::Levels => {
            let table = example_levels();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                println!("{:>6}  {:>24}  {:>24}", "level", "total xp", "step xp");
                for row in table {
                    println!("{:>6}  {:>24}  {:>24}", row.level, row.total_xp, row.xp_this_level);
                }
            }
        }
        Command::Progress { total_xp } => {
            let snapshot = progress_snapshot(total_xp);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                println!("Level {}", snapshot.level);
                println!(
                    "{} / {} XP ({:.1}%), {} to next level",
                    total_xp, snapshot.xp_at_next_level, snapshot.progress_percent, snapshot.xp_to_next
                );
            }
        }
        Command::Reward {
            base,
            streak,
            categories,
            difficulty,
            quests_today,
            first,
            consecutive_days,
        } => {
            let input = RewardInput::new(base)
                .with_streak(streak)
                .with_categories(categories)
                .with_difficulty(Difficulty::from_label(&difficulty))
                .with_quests_today(quests_today)
                .first_of_day(first)
                .with_consecutive_days(consecutive_days);
            let breakdown = calculate_final_xp(&input);

            if args.json {
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
            } else {
                println!("{} XP", breakdown.final_xp);
                for bonus in &breakdown.bonuses {
                    println!("  {}", bonus);
                }
            }
        }
    }

    Ok(())
}
