//! Hydration tracking engine.
//!
//! The engine is a wall-clock-free state machine: every operation takes an
//! explicit `now` reading and the host decides when to call it. There is no
//! background rollover -- `reset_daily_progress` (or any logging operation,
//! which runs it first) must be invoked before progress reads for the
//! reading to be fresh.

use std::collections::BTreeMap;

use chrono::{DateTime, Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::drinks;
use crate::error::ValidationError;
use crate::events::Event;
use crate::reminder::{self, Reminder};

/// One recorded day, newest-first in listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub amount: f64,
}

/// One slot of the rolling seven-day window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentDay {
    pub date: NaiveDate,
    /// "Today" for the first slot, the ISO date otherwise.
    pub display: String,
    pub amount: Option<f64>,
}

/// Core tracking engine.
///
/// The serialized form is exactly the subset the surrounding app persists
/// across restarts (whole-object replace on load): dailyGoal,
/// hydrationProgress, streak, dailyStats, lastLoggedDay, selectedDay,
/// reminders, smartModeEnabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HydrationEngine {
    pub(crate) daily_goal: f64,
    pub(crate) hydration_progress: f64,
    pub(crate) streak: u32,
    pub(crate) daily_stats: BTreeMap<NaiveDate, f64>,
    pub(crate) last_logged_day: Option<NaiveDate>,
    pub(crate) selected_day: Option<NaiveDate>,
    pub(crate) reminders: Vec<Reminder>,
    pub(crate) smart_mode_enabled: bool,
}

impl Default for HydrationEngine {
    fn default() -> Self {
        Self {
            daily_goal: 8.0,
            hydration_progress: 0.0,
            streak: 0,
            daily_stats: BTreeMap::new(),
            last_logged_day: None,
            selected_day: None,
            reminders: Vec::new(),
            smart_mode_enabled: false,
        }
    }
}

impl HydrationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom starting goal. Non-positive or non-finite
    /// values fall back to the default.
    pub fn with_goal(goal: f64) -> Self {
        let mut engine = Self::default();
        if goal.is_finite() && goal > 0.0 {
            engine.daily_goal = goal;
        }
        engine
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn daily_goal(&self) -> f64 {
        self.daily_goal
    }

    /// Accumulated intake for the current tracked day. May be negative:
    /// diuretic factors subtract and nothing clamps the result.
    pub fn progress(&self) -> f64 {
        self.hydration_progress
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn daily_stats(&self) -> &BTreeMap<NaiveDate, f64> {
        &self.daily_stats
    }

    pub fn last_logged_day(&self) -> Option<NaiveDate> {
        self.last_logged_day
    }

    pub fn selected_day(&self) -> Option<NaiveDate> {
        self.selected_day
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn smart_mode_enabled(&self) -> bool {
        self.smart_mode_enabled
    }

    /// Share of the daily goal, capped at 100 above but unclamped below.
    pub fn progress_percentage(&self) -> f64 {
        (self.hydration_progress / self.daily_goal * 100.0).min(100.0)
    }

    pub fn goal_met(&self) -> bool {
        self.hydration_progress >= self.daily_goal
    }

    pub fn is_today_selected(&self, today: NaiveDate) -> bool {
        self.selected_day == Some(today)
    }

    /// Recorded amount for the selected day; 0 when nothing is recorded.
    pub fn selected_day_progress(&self) -> f64 {
        self.selected_day
            .and_then(|d| self.daily_stats.get(&d))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn selected_day_goal_met(&self) -> bool {
        self.selected_day_progress() >= self.daily_goal
    }

    pub fn selected_day_progress_percentage(&self) -> f64 {
        (self.selected_day_progress() / self.daily_goal * 100.0).min(100.0)
    }

    /// All recorded days, newest first.
    pub fn history(&self) -> Vec<DayRecord> {
        self.daily_stats
            .iter()
            .rev()
            .map(|(date, amount)| DayRecord {
                date: *date,
                amount: *amount,
            })
            .collect()
    }

    /// The seven calendar days ending today, newest first. Days without a
    /// record report `None`.
    pub fn recent_days(&self, today: NaiveDate) -> Vec<RecentDay> {
        (0..7u64)
            .map(|i| {
                let date = today - Days::new(i);
                RecentDay {
                    date,
                    display: if i == 0 {
                        "Today".to_string()
                    } else {
                        date.to_string()
                    },
                    amount: self.daily_stats.get(&date).copied(),
                }
            })
            .collect()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Log a drink for the current day.
    ///
    /// Runs the rollover check first, so the amount always lands on
    /// today's entry. Rejected amounts leave all state untouched.
    pub fn log_drink(
        &mut self,
        drink_type: &str,
        amount: f64,
        now: DateTime<Local>,
    ) -> Result<Event, ValidationError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::InvalidAmount(amount));
        }
        self.reset_daily_progress(now);
        let effective = amount * drinks::factor(drink_type);
        self.hydration_progress += effective;
        self.daily_stats
            .insert(now.date_naive(), self.hydration_progress);
        debug!(
            drink_type,
            amount,
            effective,
            progress = self.hydration_progress,
            "drink logged"
        );
        Ok(Event::DrinkLogged {
            drink_type: drink_type.to_string(),
            amount,
            effective,
            progress: self.hydration_progress,
            at: now,
        })
    }

    /// Idempotent day-rollover check.
    ///
    /// When the calendar day has advanced past `last_logged_day`, the
    /// streak is evaluated against the day being superseded, progress
    /// resets to zero and `last_logged_day` moves to today. No-op when
    /// already on the current day.
    pub fn reset_daily_progress(&mut self, now: DateTime<Local>) -> Option<Event> {
        let today = now.date_naive();
        if self.last_logged_day == Some(today) {
            return None;
        }
        let previous = self.last_logged_day;
        self.check_streak(today);
        self.hydration_progress = 0.0;
        self.last_logged_day = Some(today);
        debug!(?previous, %today, streak = self.streak, "day rolled over");
        Some(Event::DayRolledOver {
            previous_day: previous,
            streak: self.streak,
            at: now,
        })
    }

    /// Evaluate the streak against the day about to be superseded.
    /// Must run before `last_logged_day` advances.
    fn check_streak(&mut self, today: NaiveDate) {
        match self.last_logged_day {
            Some(prev) if prev != today => {
                let recorded = self.daily_stats.get(&prev).copied().unwrap_or(0.0);
                self.streak = if recorded >= self.daily_goal {
                    self.streak + 1
                } else {
                    0
                };
            }
            Some(_) => {}
            None => self.streak = 0,
        }
    }

    /// Update the daily goal. Configuration action; recorded days are not
    /// retroactively re-evaluated.
    pub fn set_daily_goal(
        &mut self,
        goal: f64,
        now: DateTime<Local>,
    ) -> Result<Event, ValidationError> {
        if !goal.is_finite() || goal <= 0.0 {
            return Err(ValidationError::InvalidGoal(goal));
        }
        self.daily_goal = goal;
        Ok(Event::GoalChanged { goal, at: now })
    }

    /// Select a day to browse. Never auto-reset on rollover; a stale
    /// selection simply stops being "today".
    pub fn set_selected_day(&mut self, day: NaiveDate, now: DateTime<Local>) -> Event {
        self.selected_day = Some(day);
        Event::SelectedDayChanged { day, at: now }
    }

    // ── Reminder set ─────────────────────────────────────────────────

    /// Add an enabled reminder at `time` ("HH:MM"). The set stays unique
    /// by time and sorted; the returned event is a dirty signal the host
    /// must route into one reschedule call.
    pub fn add_reminder(
        &mut self,
        time: &str,
        now: DateTime<Local>,
    ) -> Result<Event, ValidationError> {
        let time = reminder::validate_time(time)?;
        if self.reminders.iter().any(|r| r.time == time) {
            return Err(ValidationError::DuplicateReminder(time));
        }
        self.reminders.push(Reminder {
            time: time.clone(),
            enabled: true,
        });
        self.sort_reminders();
        Ok(Event::ReminderAdded { time, at: now })
    }

    /// Flip a reminder's enabled flag by list index.
    pub fn toggle_reminder(
        &mut self,
        index: usize,
        now: DateTime<Local>,
    ) -> Result<Event, ValidationError> {
        let len = self.reminders.len();
        let entry = self
            .reminders
            .get_mut(index)
            .ok_or(ValidationError::OutOfBounds {
                collection: "reminders",
                index,
                len,
            })?;
        entry.enabled = !entry.enabled;
        let (time, enabled) = (entry.time.clone(), entry.enabled);
        self.sort_reminders();
        Ok(Event::ReminderToggled { time, enabled, at: now })
    }

    /// Remove a reminder by list index.
    pub fn remove_reminder(
        &mut self,
        index: usize,
        now: DateTime<Local>,
    ) -> Result<Event, ValidationError> {
        let len = self.reminders.len();
        if index >= len {
            return Err(ValidationError::OutOfBounds {
                collection: "reminders",
                index,
                len,
            });
        }
        let removed = self.reminders.remove(index);
        self.sort_reminders();
        Ok(Event::ReminderRemoved {
            time: removed.time,
            at: now,
        })
    }

    pub fn toggle_smart_mode(&mut self, now: DateTime<Local>) -> Event {
        self.smart_mode_enabled = !self.smart_mode_enabled;
        Event::SmartModeToggled {
            enabled: self.smart_mode_enabled,
            at: now,
        }
    }

    pub(crate) fn sort_reminders(&mut self) {
        self.reminders.sort_by(|a, b| a.time.cmp(&b.time));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(date: &str) -> DateTime<Local> {
        let day: NaiveDate = date.parse().unwrap();
        Local
            .from_local_datetime(&day.and_hms_opt(12, 0, 0).unwrap())
            .unwrap()
    }

    #[test]
    fn log_drink_accumulates_same_day() {
        let mut engine = HydrationEngine::new();
        let now = at("2024-03-01");
        engine.log_drink("Water", 2.0, now).unwrap();
        engine.log_drink("Water", 1.0, now).unwrap();
        assert_eq!(engine.progress(), 3.0);
        assert_eq!(
            engine.daily_stats()[&"2024-03-01".parse::<NaiveDate>().unwrap()],
            3.0
        );
    }

    #[test]
    fn log_drink_rejects_bad_amounts() {
        let mut engine = HydrationEngine::new();
        let now = at("2024-03-01");
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(engine.log_drink("Water", bad, now).is_err());
        }
        assert_eq!(engine.progress(), 0.0);
        assert!(engine.daily_stats().is_empty());
        assert!(engine.last_logged_day().is_none());
    }

    #[test]
    fn factors_apply_and_may_go_negative() {
        let mut engine = HydrationEngine::new();
        let now = at("2024-03-01");
        engine.log_drink("Milk", 2.0, now).unwrap();
        assert!((engine.progress() - 2.6).abs() < 1e-9);

        engine
            .log_drink("Whiskey/Brandy/Tequila/Gin/Rum", 2.0, now)
            .unwrap();
        assert!(engine.progress() < 0.0);
        assert!(engine.progress_percentage() < 0.0);
    }

    #[test]
    fn rollover_with_goal_met_increments_streak() {
        let mut engine = HydrationEngine::new();
        engine.log_drink("Water", 8.0, at("2024-03-01")).unwrap();
        assert_eq!(engine.streak(), 0);

        let event = engine.reset_daily_progress(at("2024-03-02")).unwrap();
        assert_eq!(engine.streak(), 1);
        assert_eq!(engine.progress(), 0.0);
        match event {
            Event::DayRolledOver {
                previous_day,
                streak,
                ..
            } => {
                assert_eq!(previous_day, Some("2024-03-01".parse().unwrap()));
                assert_eq!(streak, 1);
            }
            other => panic!("expected DayRolledOver, got {other:?}"),
        }
    }

    #[test]
    fn rollover_below_goal_resets_streak() {
        let mut engine = HydrationEngine::new();
        engine.log_drink("Water", 8.0, at("2024-03-01")).unwrap();
        engine.reset_daily_progress(at("2024-03-02")).unwrap();
        assert_eq!(engine.streak(), 1);

        engine.log_drink("Water", 3.0, at("2024-03-02")).unwrap();
        engine.reset_daily_progress(at("2024-03-03")).unwrap();
        assert_eq!(engine.streak(), 0);
    }

    #[test]
    fn rollover_is_idempotent_within_a_day() {
        let mut engine = HydrationEngine::new();
        engine.log_drink("Water", 5.0, at("2024-03-01")).unwrap();
        assert!(engine.reset_daily_progress(at("2024-03-01")).is_none());
        assert_eq!(engine.progress(), 5.0);
    }

    #[test]
    fn first_rollover_without_history_zeroes_streak() {
        let mut engine = HydrationEngine::new();
        engine.streak = 4; // pretend a stale value was loaded
        engine.reset_daily_progress(at("2024-03-01")).unwrap();
        assert_eq!(engine.streak(), 0);
    }

    #[test]
    fn percentage_caps_at_hundred() {
        let mut engine = HydrationEngine::new();
        engine.log_drink("Water", 20.0, at("2024-03-01")).unwrap();
        assert_eq!(engine.progress_percentage(), 100.0);
        assert!(engine.goal_met());
    }

    #[test]
    fn selected_day_reads_history_without_mutation() {
        let mut engine = HydrationEngine::new();
        engine.log_drink("Water", 8.0, at("2024-03-01")).unwrap();
        engine.log_drink("Water", 2.0, at("2024-03-02")).unwrap();

        engine.set_selected_day("2024-03-01".parse().unwrap(), at("2024-03-02"));
        assert_eq!(engine.selected_day_progress(), 8.0);
        assert!(engine.selected_day_goal_met());
        assert_eq!(engine.selected_day_progress_percentage(), 100.0);
        assert!(!engine.is_today_selected("2024-03-02".parse().unwrap()));
        assert_eq!(engine.progress(), 2.0);
    }

    #[test]
    fn recent_days_is_a_seven_day_window() {
        let mut engine = HydrationEngine::new();
        engine.log_drink("Water", 4.0, at("2024-03-10")).unwrap();
        let days = engine.recent_days("2024-03-10".parse().unwrap());
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].display, "Today");
        assert_eq!(days[0].amount, Some(4.0));
        assert_eq!(days[1].display, "2024-03-09");
        assert_eq!(days[1].amount, None);
    }

    #[test]
    fn history_is_newest_first() {
        let mut engine = HydrationEngine::new();
        engine.log_drink("Water", 1.0, at("2024-03-01")).unwrap();
        engine.log_drink("Water", 2.0, at("2024-03-03")).unwrap();
        engine.log_drink("Water", 3.0, at("2024-03-02")).unwrap();

        let history = engine.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].date, "2024-03-03".parse().unwrap());
        assert_eq!(history[2].date, "2024-03-01".parse().unwrap());
    }

    #[test]
    fn add_reminder_rejects_duplicates() {
        let mut engine = HydrationEngine::new();
        let now = at("2024-03-01");
        engine.add_reminder("08:00", now).unwrap();
        let err = engine.add_reminder("08:00", now).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateReminder(_)));
        assert_eq!(engine.reminders().len(), 1);
    }

    #[test]
    fn add_reminder_normalizes_and_sorts() {
        let mut engine = HydrationEngine::new();
        let now = at("2024-03-01");
        engine.add_reminder("12:30", now).unwrap();
        engine.add_reminder("8:00", now).unwrap();
        engine.add_reminder("09:15", now).unwrap();

        let times: Vec<_> = engine.reminders().iter().map(|r| r.time.as_str()).collect();
        assert_eq!(times, ["08:00", "09:15", "12:30"]);
    }

    #[test]
    fn add_reminder_rejects_garbage_times() {
        let mut engine = HydrationEngine::new();
        let now = at("2024-03-01");
        for bad in ["25:00", "08:60", "soon", ""] {
            assert!(matches!(
                engine.add_reminder(bad, now),
                Err(ValidationError::InvalidTime(_))
            ));
        }
        assert!(engine.reminders().is_empty());
    }

    #[test]
    fn toggle_and_remove_by_index() {
        let mut engine = HydrationEngine::new();
        let now = at("2024-03-01");
        engine.add_reminder("08:00", now).unwrap();
        engine.add_reminder("12:00", now).unwrap();

        let event = engine.toggle_reminder(0, now).unwrap();
        assert!(matches!(event, Event::ReminderToggled { enabled: false, .. }));
        assert!(!engine.reminders()[0].enabled);

        engine.remove_reminder(0, now).unwrap();
        assert_eq!(engine.reminders().len(), 1);
        assert_eq!(engine.reminders()[0].time, "12:00");

        assert!(engine.toggle_reminder(5, now).is_err());
        assert!(engine.remove_reminder(5, now).is_err());
    }

    #[test]
    fn set_daily_goal_validates() {
        let mut engine = HydrationEngine::new();
        let now = at("2024-03-01");
        engine.set_daily_goal(10.0, now).unwrap();
        assert_eq!(engine.daily_goal(), 10.0);

        for bad in [0.0, -2.0, f64::NAN] {
            assert!(matches!(
                engine.set_daily_goal(bad, now),
                Err(ValidationError::InvalidGoal(_))
            ));
        }
        assert_eq!(engine.daily_goal(), 10.0);
    }

    #[test]
    fn smart_mode_toggles() {
        let mut engine = HydrationEngine::new();
        let now = at("2024-03-01");
        assert!(!engine.smart_mode_enabled());
        engine.toggle_smart_mode(now);
        assert!(engine.smart_mode_enabled());
        engine.toggle_smart_mode(now);
        assert!(!engine.smart_mode_enabled());
    }

    #[test]
    fn persisted_form_uses_camel_case_subset() {
        let mut engine = HydrationEngine::new();
        engine.log_drink("Water", 2.0, at("2024-03-01")).unwrap();
        let json = serde_json::to_value(&engine).unwrap();
        for key in [
            "dailyGoal",
            "hydrationProgress",
            "streak",
            "dailyStats",
            "lastLoggedDay",
            "selectedDay",
            "reminders",
            "smartModeEnabled",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["dailyStats"]["2024-03-01"], 2.0);

        let restored: HydrationEngine = serde_json::from_value(json).unwrap();
        assert_eq!(restored.progress(), 2.0);
        assert_eq!(restored.last_logged_day(), engine.last_logged_day());
    }
}
