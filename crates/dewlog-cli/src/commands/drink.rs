use chrono::Local;
use dewlog_core::storage::{Config, Database};
use dewlog_core::Notice;

use crate::common::{load_engine, print_event, print_notice, save_engine};

pub fn run(kind: &str, amount: f64) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let mut engine = load_engine(&db, &config);

    match engine.log_drink(kind, amount, Local::now()) {
        Ok(event) => {
            save_engine(&db, &engine)?;
            print_event(&event);
        }
        // Rejected input is a notice, not a process failure.
        Err(e) => print_notice(&Notice::from_validation(&e)),
    }
    Ok(())
}
