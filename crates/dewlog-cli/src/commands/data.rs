use std::path::PathBuf;

use chrono::Local;
use dewlog_core::snapshot::EXPORT_FILE_NAME;
use dewlog_core::storage::{Config, Database};
use dewlog_core::{Notice, Snapshot};

use crate::common::{load_engine, print_event, print_notice, save_engine};

pub fn export(out: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let engine = load_engine(&db, &config);

    let document = Snapshot::capture(&engine).to_json()?;
    let path = out.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
    std::fs::write(&path, document)?;

    print_notice(&Notice::success("Data exported successfully!", 3));
    println!("{}", path.display());
    Ok(())
}

pub fn import(path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let mut engine = load_engine(&db, &config);

    let text = std::fs::read_to_string(&path)?;
    match Snapshot::from_json(&text) {
        Ok(snapshot) => {
            let event = snapshot.merge_into(&mut engine, Local::now());
            save_engine(&db, &engine)?;
            print_event(&event);
        }
        // Parse failure applies nothing; saved state stays as it was.
        Err(e) => {
            tracing::warn!(error = %e, "import rejected");
            print_notice(&Notice::error("Failed to import data. Invalid file."));
        }
    }
    Ok(())
}
