//! Chronological command for listing activities in time order.
//!
//! This module implements `mas chronological`, which prints every valid
//! activity sorted by start time, as a table or as JSON.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use mas_core::{ActivitySource, ImagingActivity, ImagingService};

/// Placeholder for absent fields in tables.
const ABSENT: &str = "-";

/// Runs the chronological command.
pub fn run<W: Write, S: ActivitySource>(
    writer: &mut W,
    service: &ImagingService<S>,
    json: bool,
) -> Result<()> {
    let activities = service
        .chronological_window()
        .context("failed to load imaging activities")?;

    if json {
        let json = serde_json::to_string_pretty(&activities)?;
        writeln!(writer, "{json}")?;
    } else {
        write!(writer, "{}", format_activities(&activities))?;
    }

    Ok(())
}

// ========== Human-Readable Output ==========

/// Format activities for human-readable output.
pub fn format_activities(activities: &[ImagingActivity]) -> String {
    let mut output = String::new();

    writeln!(output, "IMAGING ACTIVITIES ({})", activities.len()).unwrap();
    writeln!(output).unwrap();

    if activities.is_empty() {
        writeln!(output, "No valid activities.").unwrap();
        return output;
    }

    write_table_header(&mut output, "");
    for activity in activities {
        write_activity_row(&mut output, "", activity);
    }

    output
}

/// Writes the column header shared by activity tables.
pub fn write_table_header(output: &mut String, indent: &str) {
    writeln!(
        output,
        "{indent}{:<10}  {:<10}  {:<22}  End",
        "Satellite", "State", "Start"
    )
    .unwrap();
    writeln!(
        output,
        "{indent}──────────  ──────────  ──────────────────────  ────────────────────"
    )
    .unwrap();
}

/// Writes one activity as a table row.
pub fn write_activity_row(output: &mut String, indent: &str, activity: &ImagingActivity) {
    writeln!(
        output,
        "{indent}{:<10}  {:<10}  {:<22}  {}",
        display(activity.satellite_hw_id.as_deref()),
        display(activity.activity_state.as_deref()),
        display(activity.start_time.as_deref()),
        display(activity.end_time.as_deref()),
    )
    .unwrap();
}

/// Trimmed display text for an optional field; blank shows as `-`.
pub fn display(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => ABSENT,
    }
}
