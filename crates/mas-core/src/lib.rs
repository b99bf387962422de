//! Core domain logic for imaging activity windows.
//!
//! This crate contains the fundamental types and logic for:
//! - Normalization: validating and chronologically ordering raw records
//! - Segmentation: splitting the ordered records into state windows
//! - Filtering: selecting windows by activity state

pub mod activity;
mod chronological;
mod filter;
pub mod instant;
mod service;
mod window;

pub use activity::{ImagingActivity, normalize_state};
pub use chronological::{Normalized, chronological_window, normalize};
pub use filter::filter_windows_by_state;
pub use instant::{InstantParseError, parse_instant};
pub use service::{ActivitySource, ImagingService, split_windows_by_state};
pub use window::{Window, split_windows, starts_new_window};
