//! Snapshot codec: portable export document and merge-based import.
//!
//! Export captures the tracked subset minus `selectedDay` and all
//! timer/transient state. Import parses atomically -- a document that does
//! not parse applies nothing -- and then merges field by field into live
//! state. The merge never removes local dates or reminder slots absent
//! from the document.

use std::collections::BTreeMap;

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::events::Event;
use crate::reminder::Reminder;
use crate::tracker::HydrationEngine;

/// Default export file name, kept from the original app.
pub const EXPORT_FILE_NAME: &str = "dewlog_data.json";

/// The export/import document. Every field is optional on import; absent
/// fields keep their live values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_goal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hydration_progress: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streak: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_stats: Option<BTreeMap<NaiveDate, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_logged_day: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminders: Option<Vec<Reminder>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_mode_enabled: Option<bool>,
}

impl Snapshot {
    /// Capture the exportable subset of the engine.
    pub fn capture(engine: &HydrationEngine) -> Self {
        Self {
            daily_goal: Some(engine.daily_goal()),
            hydration_progress: Some(engine.progress()),
            streak: Some(engine.streak()),
            daily_stats: Some(engine.daily_stats().clone()),
            last_logged_day: engine.last_logged_day(),
            reminders: Some(engine.reminders().to_vec()),
            smart_mode_enabled: Some(engine.smart_mode_enabled()),
        }
    }

    /// Render the document as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document. This is the all-or-nothing step of the import
    /// protocol: a failure here means nothing gets applied.
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Merge the document into live state.
    ///
    /// Scalars apply only when present. Imported daily stats overwrite
    /// local entries date by date (import wins). Reminders merge by time:
    /// an unknown time is appended, a known time only takes the imported
    /// enabled flag. The returned event is a dirty signal -- the host must
    /// re-arm the reminder timers.
    pub fn merge_into(&self, engine: &mut HydrationEngine, now: DateTime<Local>) -> Event {
        if let Some(goal) = self.daily_goal {
            engine.daily_goal = goal;
        }
        if let Some(progress) = self.hydration_progress {
            engine.hydration_progress = progress;
        }
        if let Some(streak) = self.streak {
            engine.streak = streak;
        }
        if let Some(day) = self.last_logged_day {
            engine.last_logged_day = Some(day);
        }
        if let Some(enabled) = self.smart_mode_enabled {
            engine.smart_mode_enabled = enabled;
        }

        let mut stats_merged = 0;
        if let Some(ref stats) = self.daily_stats {
            for (date, amount) in stats {
                engine.daily_stats.insert(*date, *amount);
                stats_merged += 1;
            }
        }

        let mut reminders_merged = 0;
        if let Some(ref reminders) = self.reminders {
            for imported in reminders {
                match engine
                    .reminders
                    .iter_mut()
                    .find(|r| r.time == imported.time)
                {
                    Some(existing) => existing.enabled = imported.enabled,
                    None => engine.reminders.push(imported.clone()),
                }
                reminders_merged += 1;
            }
            engine.sort_reminders();
        }

        Event::DataImported {
            stats_merged,
            reminders_merged,
            at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(date: &str) -> DateTime<Local> {
        let day: NaiveDate = date.parse().unwrap();
        Local
            .from_local_datetime(&day.and_hms_opt(9, 0, 0).unwrap())
            .unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn capture_excludes_selected_day() {
        let mut engine = HydrationEngine::new();
        engine.set_selected_day(date("2024-01-01"), at("2024-01-02"));
        let json = Snapshot::capture(&engine).to_json().unwrap();
        assert!(!json.contains("selectedDay"));
        assert!(json.contains("dailyGoal"));
    }

    #[test]
    fn import_wins_on_shared_dates_and_keeps_local_only_dates() {
        let mut engine = HydrationEngine::new();
        engine.daily_stats.insert(date("2024-01-01"), 5.0);
        engine.daily_stats.insert(date("2024-01-02"), 3.0);

        let snapshot = Snapshot {
            daily_stats: Some(BTreeMap::from([(date("2024-01-01"), 8.0)])),
            ..Default::default()
        };
        snapshot.merge_into(&mut engine, at("2024-01-03"));

        assert_eq!(engine.daily_stats()[&date("2024-01-01")], 8.0);
        assert_eq!(engine.daily_stats()[&date("2024-01-02")], 3.0);
    }

    #[test]
    fn absent_scalars_keep_live_values() {
        let mut engine = HydrationEngine::with_goal(10.0);
        engine.streak = 4;

        let snapshot = Snapshot {
            hydration_progress: Some(2.5),
            ..Default::default()
        };
        snapshot.merge_into(&mut engine, at("2024-01-03"));

        assert_eq!(engine.progress(), 2.5);
        assert_eq!(engine.daily_goal(), 10.0);
        assert_eq!(engine.streak(), 4);
    }

    #[test]
    fn reminders_merge_by_time_without_duplicating_slots() {
        let mut engine = HydrationEngine::new();
        engine.add_reminder("08:00", at("2024-01-01")).unwrap();
        engine.add_reminder("12:00", at("2024-01-01")).unwrap();

        let snapshot = Snapshot {
            reminders: Some(vec![
                Reminder {
                    time: "08:00".into(),
                    enabled: false,
                },
                Reminder {
                    time: "06:30".into(),
                    enabled: true,
                },
            ]),
            ..Default::default()
        };
        let event = snapshot.merge_into(&mut engine, at("2024-01-02"));

        let times: Vec<_> = engine.reminders().iter().map(|r| r.time.as_str()).collect();
        assert_eq!(times, ["06:30", "08:00", "12:00"]);
        assert!(!engine.reminders()[1].enabled);
        assert!(matches!(
            event,
            Event::DataImported {
                reminders_merged: 2,
                ..
            }
        ));
        assert!(event.requires_reschedule());
    }

    #[test]
    fn parse_failure_is_atomic() {
        assert!(Snapshot::from_json("{ not json").is_err());
        assert!(Snapshot::from_json(r#"{"dailyGoal": "eight"}"#).is_err());
    }

    #[test]
    fn empty_document_merges_to_a_no_op() {
        let mut engine = HydrationEngine::new();
        engine.log_drink("Water", 3.0, at("2024-01-01")).unwrap();
        let before = serde_json::to_string(&engine).unwrap();

        let snapshot = Snapshot::from_json("{}").unwrap();
        snapshot.merge_into(&mut engine, at("2024-01-01"));

        assert_eq!(serde_json::to_string(&engine).unwrap(), before);
    }
}
