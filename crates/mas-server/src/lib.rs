//! # mas-server
//!
//! Axum HTTP API over the imaging activity queries.
//!
//! - `GET /api/imaging/chronological-window`: all valid activities, ordered
//! - `POST /api/imaging/split-windows`: state windows, optionally filtered by
//!   `{"activityState": "..."}`
//! - `GET /health`: liveness
//!
//! Loads run on the blocking pool; a failed load answers `500`.

mod error;
mod server;

pub use error::{ApiError, LOAD_FAILURE_MESSAGE, ServerError};
pub use server::{ActivityStateRequest, AppState, HealthResponse, ImagingServer};
