//! Hydration tracking: progress ledger, day rollover and streaks.

pub mod drinks;
mod engine;

pub use engine::{DayRecord, HydrationEngine, RecentDay};
