//! Selecting windows by state.

use crate::window::Window;

/// Keeps the windows whose first activity has the requested state.
///
/// Both sides are trimmed and compared case-insensitively; an absent window
/// state compares as `""`. A missing or blank request disables filtering.
/// Windows are selected, never reordered or modified.
pub fn filter_windows_by_state(windows: Vec<Window>, requested: Option<&str>) -> Vec<Window> {
    let Some(requested) = requested.map(str::trim).filter(|s| !s.is_empty()) else {
        return windows;
    };
    let requested = requested.to_lowercase();

    windows
        .into_iter()
        .filter(|window| window.state().unwrap_or_default().trim().to_lowercase() == requested)
        .collect()
}
