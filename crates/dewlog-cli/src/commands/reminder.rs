use chrono::Local;
use clap::Subcommand;
use dewlog_core::storage::{Config, Database};
use dewlog_core::Notice;

use crate::common::{load_engine, print_event, print_notice, save_engine};

#[derive(Subcommand)]
pub enum ReminderAction {
    /// Add a reminder at HH:MM
    Add { time: String },
    /// List reminders, sorted by time
    List,
    /// Flip a reminder's enabled flag by list index
    Toggle { index: usize },
    /// Remove a reminder by list index
    Remove { index: usize },
}

pub fn run(action: ReminderAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let mut engine = load_engine(&db, &config);
    let now = Local::now();

    let result = match action {
        ReminderAction::Add { time } => engine.add_reminder(&time, now),
        ReminderAction::Toggle { index } => engine.toggle_reminder(index, now),
        ReminderAction::Remove { index } => engine.remove_reminder(index, now),
        ReminderAction::List => {
            println!("{}", serde_json::to_string_pretty(engine.reminders())?);
            return Ok(());
        }
    };

    // Timers only run under `watch`, which re-arms from saved state on
    // startup, so the dirty signal needs no routing in one-shot commands.
    match result {
        Ok(event) => {
            save_engine(&db, &engine)?;
            print_event(&event);
        }
        Err(e) => print_notice(&Notice::from_validation(&e)),
    }
    Ok(())
}

pub fn toggle_smart() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let mut engine = load_engine(&db, &config);

    let event = engine.toggle_smart_mode(Local::now());
    save_engine(&db, &engine)?;
    print_event(&event);
    Ok(())
}
