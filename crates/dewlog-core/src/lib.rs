//! # DewLog Core Library
//!
//! This library provides the core business logic for the DewLog hydration
//! tracker. All tracked state and every mutating operation live here; the
//! CLI binary is a thin layer over this crate, and a GUI would sit on the
//! same seams.
//!
//! ## Architecture
//!
//! - **Tracking engine**: a wall-clock-free state machine -- callers pass
//!   the current time reading into every operation, so day rollover and
//!   streak evaluation are deterministic under test
//! - **Reminder scheduler**: minute-resolution evaluation of the fixed and
//!   smart reminder sets behind a shared de-duplication gate, hosted by
//!   cancellable tokio timer tasks
//! - **Snapshot codec**: portable JSON export plus merge-based import that
//!   never discards local data
//! - **Storage**: SQLite key-value persistence and TOML configuration for
//!   the surrounding app
//!
//! ## Key Components
//!
//! - [`HydrationEngine`]: tracked state and all mutating operations
//! - [`ReminderScheduler`]: reminder evaluation + notification gate
//! - [`ReminderRuntime`]: timer host with explicit cancellation
//! - [`Snapshot`]: export/import document

pub mod clock;
pub mod error;
pub mod events;
pub mod notify;
pub mod reminder;
pub mod snapshot;
pub mod storage;
pub mod tracker;

pub use clock::{Clock, SystemClock};
pub use error::{ConfigError, CoreError, SnapshotError, ValidationError};
pub use events::Event;
pub use notify::{Notice, Notifier, Permission};
pub use reminder::{Reminder, ReminderRuntime, ReminderScheduler, SMART_TIMES};
pub use snapshot::Snapshot;
pub use storage::{Config, Database};
pub use tracker::{DayRecord, HydrationEngine, RecentDay};
