//! Query operations over a source of activity records.

use std::convert::Infallible;

use crate::activity::ImagingActivity;
use crate::chronological::normalize;
use crate::filter::filter_windows_by_state;
use crate::window::{Window, split_windows};

/// A supplier of raw, unordered activity records.
///
/// This trait lets the query operations work with different storage backends
/// (e.g., the JSON file store in mas-store, or in-memory fixtures). `None`
/// entries stand for `null` records in the source data.
pub trait ActivitySource {
    /// Error returned when the records cannot be loaded at all.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Loads a fresh snapshot of the records.
    fn load_activities(&self) -> Result<Vec<Option<ImagingActivity>>, Self::Error>;
}

impl ActivitySource for Vec<Option<ImagingActivity>> {
    type Error = Infallible;

    fn load_activities(&self) -> Result<Vec<Option<ImagingActivity>>, Self::Error> {
        Ok(self.clone())
    }
}

impl ActivitySource for Vec<ImagingActivity> {
    type Error = Infallible;

    fn load_activities(&self) -> Result<Vec<Option<ImagingActivity>>, Self::Error> {
        Ok(self.iter().cloned().map(Some).collect())
    }
}

/// Orders, segments and filters raw records in one pass.
pub fn split_windows_by_state<I>(records: I, requested: Option<&str>) -> Vec<Window>
where
    I: IntoIterator,
    I::Item: Into<Option<ImagingActivity>>,
{
    let normalized = normalize(records);
    if normalized.activities.is_empty() {
        if normalized.dropped > 0 {
            tracing::warn!("no valid activities to split into windows");
        }
        return Vec::new();
    }

    let windows = split_windows(normalized.activities);
    filter_windows_by_state(windows, requested)
}

/// The two read-only queries, backed by an [`ActivitySource`].
///
/// Every call reloads the source, so callers always see the current data and
/// no state is shared between calls.
#[derive(Debug, Clone)]
pub struct ImagingService<S> {
    source: S,
}

impl<S: ActivitySource> ImagingService<S> {
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    /// All valid activities in chronological order.
    pub fn chronological_window(&self) -> Result<Vec<ImagingActivity>, S::Error> {
        let records = self.source.load_activities()?;
        tracing::debug!(records = records.len(), "loaded activity records");
        Ok(crate::chronological::chronological_window(records))
    }

    /// All windows, optionally restricted to those of `state`.
    pub fn split_windows_by_state(&self, state: Option<&str>) -> Result<Vec<Window>, S::Error> {
        let records = self.source.load_activities()?;
        tracing::debug!(records = records.len(), ?state, "loaded activity records");
        Ok(split_windows_by_state(records, state))
    }
}
