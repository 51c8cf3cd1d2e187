use anyhow::{bail, Context};
use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use fitlog_core::{Config, HistoryStore, SeedMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fitlog")]
#[command(about = "Personal exercise history tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Seed mode for the store (none, demo, fixture)
    #[arg(long, global = true)]
    seed: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an exercise completed today
    Log {
        /// Exercise name
        name: String,
    },

    /// Record an exercise for an arbitrary calendar day
    Backfill {
        /// Calendar day (YYYY-MM-DD)
        date: NaiveDate,

        /// Exercise name
        name: String,
    },

    /// Show the recorded history, most recent day first (default)
    Show,
}

fn main() -> anyhow::Result<()> {
    fitlog_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load().context("loading configuration")?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());

    let seed = match cli.seed.as_deref().map(str::to_lowercase).as_deref() {
        None | Some("none") => SeedMode::None,
        Some("demo") => SeedMode::Demo,
        Some("fixture") => SeedMode::Fixture,
        Some(other) => bail!("unknown seed mode: {other} (expected none, demo or fixture)"),
    };

    let history_path = data_dir.join("history.json");
    let mut store = HistoryStore::new(&history_path, seed);
    if store.loading_error() {
        eprintln!(
            "Warning: history at {} could not be read; starting with an empty history.",
            history_path.display()
        );
    }

    match cli.command {
        Some(Commands::Log { name }) => cmd_log(&mut store, &name),
        Some(Commands::Backfill { date, name }) => cmd_backfill(&mut store, date, &name),
        Some(Commands::Show) | None => cmd_show(&store),
    }
}

fn cmd_log(store: &mut HistoryStore, name: &str) -> anyhow::Result<()> {
    let name = name.trim();
    if name.is_empty() {
        bail!("exercise name is empty");
    }

    store.add_done_exercise(name).context("saving history")?;
    println!("Logged {name} for today.");
    Ok(())
}

fn cmd_backfill(store: &mut HistoryStore, date: NaiveDate, name: &str) -> anyhow::Result<()> {
    let name = name.trim();
    if name.is_empty() {
        bail!("exercise name is empty");
    }

    let timestamp = date.and_time(NaiveTime::MIN).and_utc();
    store.add_exercise(timestamp, name).context("saving history")?;
    println!("Logged {name} for {date}.");
    Ok(())
}

fn cmd_show(store: &HistoryStore) -> anyhow::Result<()> {
    if store.exercise_days().is_empty() {
        println!("No exercises recorded yet.");
        return Ok(());
    }

    for day in store.exercise_days() {
        let summary = day
            .unique_exercises()
            .iter()
            .map(|name| format!("{} x{}", name, day.count_exercise(name)))
            .collect::<Vec<_>>()
            .join(", ");
        println!("{}  {}", day.day(), summary);
    }
    Ok(())
}
