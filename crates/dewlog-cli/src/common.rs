use dewlog_core::storage::{Config, Database, ENGINE_KEY};
use dewlog_core::{Event, HydrationEngine, Notice};

/// Load the persisted engine, or create a fresh one from config defaults.
/// Corrupt saved state falls back to a fresh engine rather than failing.
pub fn load_engine(db: &Database, config: &Config) -> HydrationEngine {
    if let Ok(Some(json)) = db.kv_get(ENGINE_KEY) {
        if let Ok(engine) = serde_json::from_str::<HydrationEngine>(&json) {
            return engine;
        }
        tracing::warn!("saved engine state did not parse; starting fresh");
    }
    HydrationEngine::with_goal(config.tracker.default_goal)
}

pub fn save_engine(db: &Database, engine: &HydrationEngine) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(engine)?;
    db.kv_set(ENGINE_KEY, &json)?;
    Ok(())
}

/// Print a transient notice the way a GUI toast would render it.
pub fn print_notice(notice: &Notice) {
    println!("[{}] {}", notice.color, notice.message);
}

pub fn print_event(event: &Event) {
    if let Some(notice) = event.notice() {
        print_notice(&notice);
    }
}
