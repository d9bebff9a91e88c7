//! Reminder sets and their schedulers.
//!
//! Two independent schedules exist: the user-defined fixed set, and the
//! built-in "smart" set active while smart mode is on. Both match against
//! the minute-resolution clock face and share one de-duplication gate.

mod runtime;
mod scheduler;

pub use runtime::ReminderRuntime;
pub use scheduler::{ReminderScheduler, SMART_TIMES};

use chrono::{DateTime, Local, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A user-defined fixed-time reminder. Unique by `time` within the set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// Zero-padded 24h "HH:MM".
    pub time: String,
    pub enabled: bool,
}

/// Validate a reminder time and normalize it to zero-padded "HH:MM".
pub fn validate_time(time: &str) -> Result<String, ValidationError> {
    let parsed = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| ValidationError::InvalidTime(time.to_string()))?;
    Ok(parsed.format("%H:%M").to_string())
}

/// The clock face both reminder sets match against.
pub fn clock_face(now: DateTime<Local>) -> String {
    now.format("%H:%M").to_string()
}
