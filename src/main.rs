use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use hunter::character::rank::levels_until_next_rank;
use hunter::core::events::EventEffect;
use hunter::core::streak::StreakChange;
use hunter::utils::persistence::JsonFileStore;
use hunter::{HunterEvent, HunterProfile, HunterSession, StatType};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hunter")]
#[command(about = "Level up your habits: track EXP, ranks, stats and daily streaks")]
#[command(version)]
struct Cli {
    /// Directory holding profile.json (defaults to $HUNTER_HOME or ~/.hunter)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the hunter profile card
    Status,

    /// Set the hunter name
    Rename { name: String },

    /// Award experience points
    Gain {
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },

    /// Spend stat points on a stat (strength, intelligence, endurance, charisma, luck)
    Allocate {
        stat: String,

        /// Number of points to spend
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,
    },

    /// Record today's activity for the streak
    CheckIn {
        /// Check in for this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for command output
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Streak days follow device-local midnight
    let today = chrono::Local::now().date_naive();

    let store = JsonFileStore::in_dir(cli.data_dir.as_deref())
        .context("Failed to prepare data directory")?;
    tracing::debug!("Using profile file {}", store.path().display());
    let mut session = HunterSession::open(store, today).context("Failed to open profile")?;

    match cli.command.unwrap_or(Commands::Status) {
        Commands::Status => {
            print_profile(session.profile());
        }
        Commands::Rename { name } => {
            session.dispatch(HunterEvent::SetHunterName(name))?;
            println!("Welcome, {}.", session.profile().name);
        }
        Commands::Gain { amount } => {
            if let EventEffect::Experience(report) =
                session.dispatch(HunterEvent::AddExperience(amount))?
            {
                println!("+{} EXP", report.exp_gained);
                if report.leveled_up() {
                    println!(
                        "LEVEL UP! Level {} -> {} (+{} stat points)",
                        report.level_before, report.level_after, report.stat_points_granted
                    );
                }
                if report.rank_changed() {
                    println!("Rank up: {}", report.rank_after.title());
                }
            }
            print_exp_line(session.profile());
        }
        Commands::Allocate { stat, count } => {
            let stat: StatType = stat.parse()?;
            let available = session.profile().stat_points;
            let value = session.allocate_points(stat, count).with_context(|| {
                format!("Cannot spend {} points, {} available", count, available)
            })?;
            println!(
                "{} is now {} ({} stat points left)",
                stat.label(),
                value,
                session.profile().stat_points
            );
            println!("{}", stat.description());
        }
        Commands::CheckIn { date } => {
            let day = date.unwrap_or(today);
            if let EventEffect::Streak(change) = session.dispatch(HunterEvent::UpdateStreak(day))? {
                match change {
                    StreakChange::Unchanged => println!("Already checked in on {}.", day),
                    StreakChange::Extended { streak_days } => {
                        println!("Streak extended: {} days", streak_days)
                    }
                    StreakChange::Reset { previous } if previous > 0 => {
                        println!("Streak of {} days broken. Starting again at 1.", previous)
                    }
                    StreakChange::Reset { .. } => println!("Streak started: 1 day"),
                }
            }
        }
    }

    Ok(())
}

fn print_exp_line(profile: &HunterProfile) {
    const BAR_WIDTH: usize = 20;
    let filled = ((profile.exp_progress() * BAR_WIDTH as f64) as usize).min(BAR_WIDTH);
    println!(
        "EXP [{}{}] {} / {}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        profile.exp,
        profile.exp_to_next_level
    );
}

fn print_profile(profile: &HunterProfile) {
    let name = if profile.has_name() {
        profile.name.as_str()
    } else {
        "(unnamed - run `hunter rename <NAME>`)"
    };
    println!("{}", name);
    println!("{}  |  Level {}", profile.rank.title(), profile.level);
    print_exp_line(profile);
    if let Some(levels) = levels_until_next_rank(profile.level) {
        println!("Next rank in {} level(s)", levels);
    }
    println!();
    for (stat, value) in profile.stats.iter() {
        println!("  {:<13}{:>4}", stat.label(), value);
    }
    println!("  Stat points: {}", profile.stat_points);
    println!();
    println!("Streak: {} days (last active {})", profile.streak_days, profile.last_active_date);
    println!("Joined: {}", profile.join_date);
}
