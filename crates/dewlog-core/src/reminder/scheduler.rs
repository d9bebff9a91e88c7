//! Minute-resolution reminder evaluation with a shared de-duplication gate.
//!
//! The scheduler owns no timers. A host (see [`super::ReminderRuntime`])
//! drives `tick_fixed`/`tick_smart` roughly once a minute; matching is done
//! on the "HH:MM" clock face, so delivery carries up to a minute of jitter.

use chrono::{DateTime, Local};
use tracing::{debug, trace};

use super::{clock_face, Reminder};
use crate::notify::{Notifier, Permission};

/// Built-in smart-mode schedule.
pub const SMART_TIMES: [&str; 7] = [
    "08:00", "10:00", "12:00", "14:00", "16:00", "18:00", "20:00",
];

/// Minimum spacing between surfaced notifications, shared by both reminder
/// sets. Strictly greater-than, so two matches inside the same minute
/// collapse into one notification.
const DEDUP_WINDOW_MS: i64 = 59_000;

const NOTIFICATION_ICON: &str = "/Hydration-logo.jpg";

/// Evaluates both reminder sets against wall-clock readings and guards the
/// platform notifier behind the permission check and the de-duplication
/// window.
pub struct ReminderScheduler<N: Notifier> {
    notifier: N,
    last_notification_time: Option<DateTime<Local>>,
}

impl<N: Notifier> ReminderScheduler<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            notifier,
            last_notification_time: None,
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn last_notification_time(&self) -> Option<DateTime<Local>> {
        self.last_notification_time
    }

    /// Evaluate the user-defined reminder set against `now`.
    ///
    /// Returns true when any enabled reminder matched this minute, whether
    /// or not the gate let the notification through.
    pub fn tick_fixed(&mut self, reminders: &[Reminder], now: DateTime<Local>) -> bool {
        let face = clock_face(now);
        let matched = reminders.iter().any(|r| r.enabled && r.time == face);
        if matched {
            trace!(%face, "fixed reminder matched");
            self.request_notification("Hydration Reminder", "Time to drink some water!", now);
        }
        matched
    }

    /// Evaluate the built-in smart schedule against `now`. Hosts only
    /// drive this while smart mode is enabled.
    pub fn tick_smart(&mut self, now: DateTime<Local>) -> bool {
        let face = clock_face(now);
        let matched = SMART_TIMES.contains(&face.as_str());
        if matched {
            trace!(%face, "smart reminder matched");
            self.request_notification("Smart Hydration Reminder", "It's a good time for a drink!", now);
        }
        matched
    }

    /// The notification gate: permission must be granted and more than 59
    /// seconds must have passed since the last surfaced notification.
    /// Missing permission suppresses delivery silently.
    fn request_notification(&mut self, title: &str, body: &str, now: DateTime<Local>) {
        if self.notifier.permission() != Permission::Granted {
            debug!(title, "notification suppressed: permission not granted");
            return;
        }
        if let Some(last) = self.last_notification_time {
            if now.signed_duration_since(last).num_milliseconds() <= DEDUP_WINDOW_MS {
                debug!(title, "notification suppressed: inside de-duplication window");
                return;
            }
        }
        self.notifier.send(title, body, NOTIFICATION_ICON);
        self.last_notification_time = Some(now);
    }
}
