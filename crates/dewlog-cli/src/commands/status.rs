use chrono::{Local, NaiveDate};
use dewlog_core::storage::{Config, Database};
use dewlog_core::Notice;

use crate::common::{load_engine, print_event, print_notice, save_engine};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let mut engine = load_engine(&db, &config);

    // Freshen before reading; persist when the day rolled over.
    let now = Local::now();
    if engine.reset_daily_progress(now).is_some() {
        save_engine(&db, &engine)?;
    }

    let status = serde_json::json!({
        "date": now.date_naive(),
        "progress": engine.progress(),
        "goal": engine.daily_goal(),
        "percentage": engine.progress_percentage(),
        "goal_met": engine.goal_met(),
        "streak": engine.streak(),
        "smart_mode": engine.smart_mode_enabled(),
        "reminders": engine.reminders(),
        "selected_day": engine.selected_day(),
        "selected_day_progress": engine.selected_day_progress(),
        "selected_day_goal_met": engine.selected_day_goal_met(),
    });
    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}

pub fn set_goal(goal: f64) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let mut engine = load_engine(&db, &config);

    match engine.set_daily_goal(goal, Local::now()) {
        Ok(event) => {
            save_engine(&db, &engine)?;
            print_event(&event);
        }
        Err(e) => print_notice(&Notice::from_validation(&e)),
    }
    Ok(())
}

pub fn select(date: NaiveDate) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let mut engine = load_engine(&db, &config);

    engine.set_selected_day(date, Local::now());
    save_engine(&db, &engine)?;
    println!("selected {date}");
    Ok(())
}
