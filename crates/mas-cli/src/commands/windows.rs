//! Windows command for listing activity windows.
//!
//! This module implements `mas windows`, which splits the chronological
//! activities into state windows and optionally keeps only one state.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use mas_core::{ActivitySource, ImagingService, Window};

use super::chronological::{display, write_activity_row, write_table_header};

/// Runs the windows command.
pub fn run<W: Write, S: ActivitySource>(
    writer: &mut W,
    service: &ImagingService<S>,
    state: Option<&str>,
    json: bool,
) -> Result<()> {
    let windows = service
        .split_windows_by_state(state)
        .context("failed to load imaging activities")?;

    if json {
        let json = serde_json::to_string_pretty(&windows)?;
        writeln!(writer, "{json}")?;
    } else {
        write!(writer, "{}", format_windows(&windows, state))?;
    }

    Ok(())
}

// ========== Human-Readable Output ==========

/// Format windows for human-readable output.
pub fn format_windows(windows: &[Window], state: Option<&str>) -> String {
    let mut output = String::new();

    let filter = state.map(str::trim).filter(|s| !s.is_empty());
    match filter {
        Some(filter) => writeln!(output, "WINDOWS ({}, state: {filter})", windows.len()).unwrap(),
        None => writeln!(output, "WINDOWS ({})", windows.len()).unwrap(),
    }

    if windows.is_empty() {
        writeln!(output).unwrap();
        writeln!(output, "No windows.").unwrap();
        return output;
    }

    for (index, window) in windows.iter().enumerate() {
        let count = window.activities().len();
        let noun = if count == 1 { "activity" } else { "activities" };

        writeln!(output).unwrap();
        writeln!(
            output,
            "Window {}: {} ({count} {noun})",
            index + 1,
            display(window.state())
        )
        .unwrap();
        write_table_header(&mut output, "  ");
        for activity in window.activities() {
            write_activity_row(&mut output, "  ", activity);
        }
    }

    output
}
