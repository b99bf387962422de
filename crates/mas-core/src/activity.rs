//! Imaging activity records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::instant::parse_optional_instant;

/// A single satellite imaging activity as loaded from storage.
///
/// Timestamps are kept as the raw text so that malformed records survive
/// loading; they are parsed on demand. Absent fields serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagingActivity {
    /// Opaque hardware identifier of the satellite.
    #[serde(default)]
    pub satellite_hw_id: Option<String>,

    /// Free-text state label, e.g. "proposed" or "scheduled".
    #[serde(default)]
    pub activity_state: Option<String>,

    /// When the activity starts, as an ISO-8601 instant.
    #[serde(default)]
    pub start_time: Option<String>,

    /// When the activity ends, as an ISO-8601 instant.
    #[serde(default)]
    pub end_time: Option<String>,
}

impl ImagingActivity {
    /// Creates an activity with every field present.
    pub fn new(
        satellite_hw_id: impl Into<String>,
        activity_state: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            satellite_hw_id: Some(satellite_hw_id.into()),
            activity_state: Some(activity_state.into()),
            start_time: Some(start_time.into()),
            end_time: Some(end_time.into()),
        }
    }

    /// Parsed start time, or `None` if missing or malformed.
    pub fn start_instant(&self) -> Option<DateTime<Utc>> {
        parse_optional_instant(self.start_time.as_deref())
    }

    /// Parsed end time, or `None` if missing or malformed.
    pub fn end_instant(&self) -> Option<DateTime<Utc>> {
        parse_optional_instant(self.end_time.as_deref())
    }

    /// Hardware ID used as the ordering tie-break; absent sorts as `""`.
    pub fn hw_id_key(&self) -> &str {
        self.satellite_hw_id.as_deref().unwrap_or_default()
    }

    /// The activity state after [`normalize_state`].
    pub fn normalized_state(&self) -> Option<String> {
        normalize_state(self.activity_state.as_deref())
    }
}

/// Trims and lower-cases a state label. Absent stays absent.
pub fn normalize_state(state: Option<&str>) -> Option<String> {
    state.map(|s| s.trim().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_snake_case_fields() {
        let json = r#"{
            "satellite_hw_id": "SAT-1",
            "activity_state": "scheduled",
            "start_time": "2024-01-01T00:00:00Z",
            "end_time": "2024-01-01T01:00:00Z"
        }"#;
        let activity: ImagingActivity = serde_json::from_str(json).unwrap();
        assert_eq!(
            activity,
            ImagingActivity::new(
                "SAT-1",
                "scheduled",
                "2024-01-01T00:00:00Z",
                "2024-01-01T01:00:00Z"
            )
        );
    }

    #[test]
    fn missing_fields_are_absent() {
        let activity: ImagingActivity =
            serde_json::from_str(r#"{"activity_state": "proposed"}"#).unwrap();
        assert_eq!(activity.satellite_hw_id, None);
        assert_eq!(activity.start_time, None);
        assert_eq!(activity.end_time, None);
    }

    #[test]
    fn absent_fields_serialize_as_null() {
        let activity = ImagingActivity {
            activity_state: Some("proposed".into()),
            ..ImagingActivity::default()
        };
        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "satellite_hw_id": null,
                "activity_state": "proposed",
                "start_time": null,
                "end_time": null
            })
        );
    }

    #[test]
    fn malformed_timestamps_round_trip_unchanged() {
        let activity = ImagingActivity::new("SAT-1", "proposed", "soon", " later ");
        let json = serde_json::to_string(&activity).unwrap();
        let parsed: ImagingActivity = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.start_time.as_deref(), Some("soon"));
        assert_eq!(parsed.end_time.as_deref(), Some(" later "));
    }

    #[test]
    fn parses_instants_on_demand() {
        let activity = ImagingActivity::new(
            "SAT-1",
            "proposed",
            " 2024-01-01T00:00:00Z ",
            "not a time",
        );
        assert!(activity.start_instant().is_some());
        assert!(activity.end_instant().is_none());
    }

    #[test]
    fn hw_id_key_defaults_to_empty() {
        let activity = ImagingActivity::default();
        assert_eq!(activity.hw_id_key(), "");
    }

    #[test]
    fn normalize_state_trims_and_lowercases() {
        assert_eq!(normalize_state(Some("  Scheduled ")), Some("scheduled".into()));
        assert_eq!(normalize_state(Some("")), Some(String::new()));
        assert_eq!(normalize_state(None), None);
    }

    #[test]
    fn absent_state_differs_from_empty_state() {
        assert_ne!(normalize_state(None), normalize_state(Some("  ")));
    }
}
