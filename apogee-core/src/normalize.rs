//! Field normalization for heterogeneous source records.
//!
//! Planned-launch data arrives from CSV and JSON files whose authors never
//! agreed on header casing. Each canonical field carries a static, ordered
//! list of accepted source spellings; the first key present with a non-empty
//! value wins. Normalization is total: any raw record yields a fully
//! populated entry, with empty strings where the source is silent.

use crate::model::PlannedLaunchEntry;
use serde_json::Value;

/// A raw record as parsed from a source file: CSV rows carry string values,
/// JSON rows may carry native types.
pub type RawRecord = serde_json::Map<String, Value>;

const DATE_KEYS: &[&str] = &["date", "Date", "launch_date"];
const TIME_KEYS: &[&str] = &["time", "Time"];
const LOCATION_KEYS: &[&str] = &["location", "Location", "site"];
const EVENT_KEYS: &[&str] = &["event", "event_name", "Event", "title"];
const ROCKET_KEYS: &[&str] = &["rocket", "Rocket", "rocket_name"];
const MOTOR_KEYS: &[&str] = &["motor", "Motor"];
const NOTES_KEYS: &[&str] = &["notes", "Notes", "description"];
const IMAGE_KEYS: &[&str] = &["image", "Image"];

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Resolve a canonical field against an ordered list of accepted key
/// spellings, taking the first present non-empty value. Missing and extra
/// keys are fine; the fallback is an empty string.
#[must_use]
pub fn first_present(record: &RawRecord, aliases: &[&str]) -> String {
    aliases
        .iter()
        .find_map(|key| {
            record
                .get(*key)
                .map(value_text)
                .filter(|text| !text.is_empty())
        })
        .unwrap_or_default()
}

impl PlannedLaunchEntry {
    /// Normalize a raw CSV/JSON record into the canonical shape.
    #[must_use]
    pub fn from_raw(raw: &RawRecord) -> Self {
        Self {
            date: first_present(raw, DATE_KEYS),
            time: first_present(raw, TIME_KEYS),
            location: first_present(raw, LOCATION_KEYS),
            event: first_present(raw, EVENT_KEYS),
            rocket: first_present(raw, ROCKET_KEYS),
            motor: first_present(raw, MOTOR_KEYS),
            notes: first_present(raw, NOTES_KEYS),
            image: first_present(raw, IMAGE_KEYS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawRecord {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn normalization_is_total_for_empty_records() {
        let entry = PlannedLaunchEntry::from_raw(&RawRecord::new());
        assert_eq!(entry, PlannedLaunchEntry::default());
    }

    #[test]
    fn first_alias_wins_over_later_spellings() {
        let record = raw(json!({ "date": "2026-04-04", "Date": "ignored" }));
        assert_eq!(first_present(&record, &["date", "Date"]), "2026-04-04");

        let record = raw(json!({ "Date": "2026-04-04" }));
        assert_eq!(first_present(&record, &["date", "Date"]), "2026-04-04");
    }

    #[test]
    fn empty_values_fall_through_to_later_aliases() {
        let record = raw(json!({ "date": "", "launch_date": "2026-05-01" }));
        assert_eq!(
            first_present(&record, &["date", "Date", "launch_date"]),
            "2026-05-01"
        );
    }

    #[test]
    fn native_json_types_are_stringified() {
        let record = raw(json!({ "time": 930, "notes": true, "image": null }));
        assert_eq!(first_present(&record, &["time"]), "930");
        assert_eq!(first_present(&record, &["notes"]), "true");
        assert_eq!(first_present(&record, &["image"]), "");
    }

    #[test]
    fn unknown_keys_are_ignored_and_entry_is_complete() {
        let record = raw(json!({
            "Event": "Club Day",
            "site": "Wake County Launch Field",
            "Rocket": "Green Thunder",
            "totally_unrelated": "junk"
        }));
        let entry = PlannedLaunchEntry::from_raw(&record);
        assert_eq!(entry.event, "Club Day");
        assert_eq!(entry.location, "Wake County Launch Field");
        assert_eq!(entry.rocket, "Green Thunder");
        assert_eq!(entry.date, "");
        assert_eq!(entry.motor, "");
    }
}
