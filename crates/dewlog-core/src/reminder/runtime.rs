//! Tokio-hosted timer driver for the reminder scheduler.
//!
//! Two independent repeating tasks poll once a minute, mirroring the
//! one-minute resolution of the match itself. Rescheduling always aborts
//! the existing handles first: a forgotten cancellation would leave
//! duplicate timers running against the same state.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use super::ReminderScheduler;
use crate::clock::Clock;
use crate::notify::Notifier;
use crate::tracker::HydrationEngine;

const POLL_PERIOD: Duration = Duration::from_secs(60);

/// Owns the fixed-set and smart-set timer tasks.
///
/// Holds no state of its own beyond the task handles; engine and scheduler
/// are shared with the tasks behind mutexes. Dropping the runtime cancels
/// both tasks.
#[derive(Default)]
pub struct ReminderRuntime {
    fixed: Option<JoinHandle<()>>,
    smart: Option<JoinHandle<()>>,
}

impl ReminderRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)arm both reminder timers: cancel whatever is running, restart
    /// the fixed-set poller unconditionally and the smart-set poller only
    /// while smart mode is enabled.
    ///
    /// Call once at startup and after every event whose
    /// `requires_reschedule()` is true; the scheduler never re-arms itself.
    pub fn reschedule<N, C>(
        &mut self,
        engine: Arc<Mutex<HydrationEngine>>,
        scheduler: Arc<Mutex<ReminderScheduler<N>>>,
        clock: C,
    ) where
        N: Notifier + Send + 'static,
        C: Clock + Clone + Send + 'static,
    {
        self.cancel();

        let smart_enabled = engine.lock().unwrap().smart_mode_enabled();
        debug!(smart_enabled, "arming reminder timers");

        {
            let engine = Arc::clone(&engine);
            let scheduler = Arc::clone(&scheduler);
            let clock = clock.clone();
            self.fixed = Some(tokio::spawn(async move {
                loop {
                    tokio::time::sleep(POLL_PERIOD).await;
                    let now = clock.now();
                    let reminders = engine.lock().unwrap().reminders().to_vec();
                    scheduler.lock().unwrap().tick_fixed(&reminders, now);
                }
            }));
        }

        if smart_enabled {
            self.smart = Some(tokio::spawn(async move {
                loop {
                    tokio::time::sleep(POLL_PERIOD).await;
                    let now = clock.now();
                    scheduler.lock().unwrap().tick_smart(now);
                }
            }));
        }
    }

    /// Cancel both timers.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.fixed.take() {
            handle.abort();
        }
        if let Some(handle) = self.smart.take() {
            handle.abort();
        }
    }

    pub fn fixed_running(&self) -> bool {
        self.fixed.is_some()
    }

    pub fn smart_running(&self) -> bool {
        self.smart.is_some()
    }
}

impl Drop for ReminderRuntime {
    fn drop(&mut self) {
        self.cancel();
    }
}
