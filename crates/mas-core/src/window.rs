//! Window segmentation.
//!
//! Splits a chronologically ordered activity sequence into windows: maximal
//! runs of consecutive activities that share a normalized state and do not
//! overlap their immediate predecessor.

use serde::Serialize;

use crate::activity::ImagingActivity;

/// A non-empty run of consecutive activities sharing one state.
///
/// Serializes as a plain JSON array of activities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Window {
    activities: Vec<ImagingActivity>,
}

impl Window {
    fn open(first: ImagingActivity) -> Self {
        Self {
            activities: vec![first],
        }
    }

    /// The activity that opened this window.
    pub fn first(&self) -> &ImagingActivity {
        // Windows are only built through `open`, so index 0 always exists.
        &self.activities[0]
    }

    /// The most recently appended activity.
    pub fn last(&self) -> &ImagingActivity {
        // Windows only grow after `open`, so the opener is the floor.
        self.activities.last().unwrap_or_else(|| self.first())
    }

    /// The raw state of the first activity, which represents the window.
    pub fn state(&self) -> Option<&str> {
        self.first().activity_state.as_deref()
    }

    /// The activities in chronological order.
    pub fn activities(&self) -> &[ImagingActivity] {
        &self.activities
    }

    pub fn into_activities(self) -> Vec<ImagingActivity> {
        self.activities
    }
}

/// Returns true when `cur` cannot continue the window that ends with `prev`.
///
/// A boundary is placed when the normalized state changes, or when both
/// `prev.end_time` and `cur.start_time` parse and `cur` starts strictly before
/// `prev` ends. Unparsable timestamps never signal an overlap.
pub fn starts_new_window(prev: &ImagingActivity, cur: &ImagingActivity) -> bool {
    let state_changed = cur.normalized_state() != prev.normalized_state();

    let breaks_streaming = match (prev.end_instant(), cur.start_instant()) {
        (Some(prev_end), Some(cur_start)) => cur_start < prev_end,
        _ => false,
    };

    state_changed || breaks_streaming
}

/// Partitions an already ordered, already validated sequence into windows.
///
/// Only the immediate predecessor is consulted; an activity that overlaps an
/// earlier member of the current window but not its neighbour stays in it.
pub fn split_windows(sorted: Vec<ImagingActivity>) -> Vec<Window> {
    let total = sorted.len();
    let mut activities = sorted.into_iter();
    let Some(first) = activities.next() else {
        return Vec::new();
    };

    let mut windows = Vec::new();
    let mut current = Window::open(first);

    for activity in activities {
        // The current window always ends with the immediate predecessor.
        if starts_new_window(current.last(), &activity) {
            windows.push(std::mem::replace(&mut current, Window::open(activity)));
        } else {
            current.activities.push(activity);
        }
    }
    windows.push(current);

    tracing::info!(
        activities = total,
        windows = windows.len(),
        "split activities into windows"
    );
    windows
}
