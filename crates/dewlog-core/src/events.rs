use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::notify::Notice;

/// Every state change in the engine produces an Event.
///
/// The UI layer renders the matching transient notice; the host routes
/// events whose [`requires_reschedule`](Event::requires_reschedule) is true
/// into a single `ReminderRuntime::reschedule` call. Rescheduling is never
/// triggered implicitly from inside a state setter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    DrinkLogged {
        drink_type: String,
        amount: f64,
        /// Amount after applying the hydration factor (may be negative).
        effective: f64,
        progress: f64,
        at: DateTime<Local>,
    },
    DayRolledOver {
        previous_day: Option<NaiveDate>,
        streak: u32,
        at: DateTime<Local>,
    },
    GoalChanged {
        goal: f64,
        at: DateTime<Local>,
    },
    SelectedDayChanged {
        day: NaiveDate,
        at: DateTime<Local>,
    },
    ReminderAdded {
        time: String,
        at: DateTime<Local>,
    },
    ReminderToggled {
        time: String,
        enabled: bool,
        at: DateTime<Local>,
    },
    ReminderRemoved {
        time: String,
        at: DateTime<Local>,
    },
    SmartModeToggled {
        enabled: bool,
        at: DateTime<Local>,
    },
    DataImported {
        stats_merged: usize,
        reminders_merged: usize,
        at: DateTime<Local>,
    },
}

impl Event {
    /// Dirty signal: the reminder timers must be re-armed after this event.
    pub fn requires_reschedule(&self) -> bool {
        matches!(
            self,
            Event::ReminderAdded { .. }
                | Event::ReminderToggled { .. }
                | Event::ReminderRemoved { .. }
                | Event::SmartModeToggled { .. }
                | Event::DataImported { .. }
        )
    }

    /// Transient notice the UI shows for this event, if any.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Event::DrinkLogged {
                drink_type, amount, ..
            } => Some(Notice::success(
                format!("Logged {amount} cups of {drink_type}!"),
                2,
            )),
            Event::DayRolledOver { .. } => None,
            Event::GoalChanged { goal, .. } => {
                Some(Notice::info(format!("Daily goal set to {goal} cups!"), 3))
            }
            Event::SelectedDayChanged { .. } => None,
            Event::ReminderAdded { time, .. } => {
                Some(Notice::success(format!("Reminder set for {time}!"), 3))
            }
            Event::ReminderToggled { enabled, .. } => Some(Notice::info(
                format!(
                    "Reminder {}!",
                    if *enabled { "enabled" } else { "disabled" }
                ),
                3,
            )),
            Event::ReminderRemoved { .. } => Some(Notice::warning("Reminder removed!", 3)),
            Event::SmartModeToggled { enabled, .. } => Some(Notice::info(
                format!(
                    "Smart Mode {}!",
                    if *enabled { "Enabled" } else { "Disabled" }
                ),
                3,
            )),
            Event::DataImported { .. } => Some(Notice::success(
                "Data imported and merged successfully!",
                3,
            )),
        }
    }
}
