use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "dewlog", version, about = "DewLog hydration tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a drink
    Drink {
        /// Amount in cups
        amount: f64,
        /// Drink type from the built-in factor table
        #[arg(long, default_value = "Water")]
        kind: String,
    },
    /// Print today's progress, goal and streak as JSON
    Status,
    /// Print recorded history
    History {
        /// Only the rolling seven-day window
        #[arg(long)]
        recent: bool,
    },
    /// Set the daily goal (cups)
    Goal { goal: f64 },
    /// Select a day (YYYY-MM-DD) to inspect in status output
    Select { date: chrono::NaiveDate },
    /// Reminder management
    Reminder {
        #[command(subcommand)]
        action: commands::reminder::ReminderAction,
    },
    /// Toggle the built-in smart reminder schedule
    Smart,
    /// Export tracked data to a JSON document
    Export {
        /// Output path (defaults to ./dewlog_data.json)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Import and merge a previously exported document
    Import { path: PathBuf },
    /// Run the reminder timers in the foreground
    Watch,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Drink { amount, kind } => commands::drink::run(&kind, amount),
        Commands::Status => commands::status::run(),
        Commands::History { recent } => commands::history::run(recent),
        Commands::Goal { goal } => commands::status::set_goal(goal),
        Commands::Select { date } => commands::status::select(date),
        Commands::Reminder { action } => commands::reminder::run(action),
        Commands::Smart => commands::reminder::toggle_smart(),
        Commands::Export { out } => commands::data::export(out),
        Commands::Import { path } => commands::data::import(path),
        Commands::Watch => commands::watch::run(),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
