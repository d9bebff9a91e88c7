use chrono::Local;
use dewlog_core::storage::{Config, Database};

use crate::common::{load_engine, save_engine};

pub fn run(recent: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let mut engine = load_engine(&db, &config);

    let now = Local::now();
    if engine.reset_daily_progress(now).is_some() {
        save_engine(&db, &engine)?;
    }

    if recent {
        let days = engine.recent_days(now.date_naive());
        println!("{}", serde_json::to_string_pretty(&days)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&engine.history())?);
    }
    Ok(())
}
