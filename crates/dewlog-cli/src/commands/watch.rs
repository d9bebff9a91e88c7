//! Foreground reminder loop.
//!
//! This is the long-running host that owns the reminder timers; one-shot
//! commands only mutate saved state, which `watch` picks up on its next
//! start.

use std::sync::{Arc, Mutex};

use dewlog_core::notify::{request_notification_permission, Notifier, Permission};
use dewlog_core::storage::{Config, Database};
use dewlog_core::{Clock, ReminderRuntime, ReminderScheduler, SystemClock};

use crate::common::{load_engine, print_notice, save_engine};

/// Terminal-backed notifier: prints the notification the way a desktop
/// toast would surface it, with a bell.
struct ConsoleNotifier {
    enabled: bool,
}

impl Notifier for ConsoleNotifier {
    fn permission(&self) -> Permission {
        if self.enabled {
            Permission::Granted
        } else {
            Permission::Denied
        }
    }

    fn request_permission(&mut self) -> Permission {
        self.permission()
    }

    fn send(&mut self, title: &str, body: &str, _icon: &str) {
        println!("\x07{title}: {body}");
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let mut engine = load_engine(&db, &config);

    let clock = SystemClock;
    if engine.reset_daily_progress(clock.now()).is_some() {
        save_engine(&db, &engine)?;
    }

    let mut notifier = ConsoleNotifier {
        enabled: config.notifications.enabled,
    };
    print_notice(&request_notification_permission(&mut notifier));

    let engine = Arc::new(Mutex::new(engine));
    let scheduler = Arc::new(Mutex::new(ReminderScheduler::new(notifier)));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let mut timers = ReminderRuntime::new();
        timers.reschedule(Arc::clone(&engine), Arc::clone(&scheduler), clock);
        println!("Watching reminders (every minute). Press Ctrl-C to stop.");
        tokio::signal::ctrl_c().await.ok();
        timers.cancel();
    });
    Ok(())
}
