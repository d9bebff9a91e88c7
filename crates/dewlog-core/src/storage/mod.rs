//! Persistence for the surrounding app.
//!
//! The engine itself never touches storage; these types are the
//! collaborator the CLI uses to keep state across runs.

mod config;
mod database;

pub use config::Config;
pub use database::{Database, ENGINE_KEY};

use std::path::PathBuf;

use crate::error::CoreError;

/// Returns `~/.config/dewlog[-dev]/` based on DEWLOG_ENV.
///
/// Set DEWLOG_ENV=dev to use the development data directory.
pub fn data_dir() -> Result<PathBuf, CoreError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DEWLOG_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("dewlog-dev")
    } else {
        base_dir.join("dewlog")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
