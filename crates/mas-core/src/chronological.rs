//! Chronological normalization of raw activity records.
//!
//! Drops records that cannot be placed on the timeline (null records, missing
//! or unparsable `start_time`) and orders the rest by start time, breaking
//! ties by satellite hardware ID.

use chrono::{DateTime, Utc};

use crate::activity::ImagingActivity;
use crate::instant::{InstantParseError, parse_instant};

/// Result of normalizing a raw record set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    /// Valid activities in chronological order.
    pub activities: Vec<ImagingActivity>,

    /// Number of records dropped as invalid.
    pub dropped: usize,
}

/// Validates and orders raw records.
///
/// # Ordering
///
/// 1. Parsed `start_time` ascending
/// 2. `satellite_hw_id` ascending, absent treated as `""`
/// 3. Input order (the sort is stable)
///
/// Accepts either `ImagingActivity` or `Option<ImagingActivity>` items; `None`
/// models a `null` entry in the source data.
pub fn normalize<I>(records: I) -> Normalized
where
    I: IntoIterator,
    I::Item: Into<Option<ImagingActivity>>,
{
    let mut dropped = 0;
    let mut valid: Vec<(DateTime<Utc>, ImagingActivity)> = Vec::new();

    for record in records {
        let record: Option<ImagingActivity> = record.into();
        let Some(activity) = record else {
            dropped += 1;
            continue;
        };

        let Some(start_time) = activity.start_time.as_deref() else {
            dropped += 1;
            continue;
        };

        match parse_instant(start_time) {
            Ok(start) => valid.push((start, activity)),
            Err(InstantParseError::Blank) => dropped += 1,
            Err(err) => {
                tracing::warn!(error = %err, "invalid start time format for activity");
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        tracing::info!(
            dropped,
            "filtered out invalid activities (null or invalid start_time)"
        );
    }

    valid.sort_by(|(a_start, a), (b_start, b)| {
        a_start
            .cmp(b_start)
            .then_with(|| a.hw_id_key().cmp(b.hw_id_key()))
    });

    Normalized {
        activities: valid.into_iter().map(|(_, activity)| activity).collect(),
        dropped,
    }
}

/// Returns the valid activities in chronological order.
pub fn chronological_window<I>(records: I) -> Vec<ImagingActivity>
where
    I: IntoIterator,
    I::Item: Into<Option<ImagingActivity>>,
{
    normalize(records).activities
}
