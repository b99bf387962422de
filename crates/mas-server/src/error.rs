//! Server and request errors.

use std::net::SocketAddr;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Message returned to clients when the data source cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Could not read imaging data file.";

/// Errors that stop the server itself.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    /// The server loop failed.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Errors raised while answering a single request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The activity source failed to load.
    #[error("failed to load imaging activities: {0}")]
    Load(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The blocking query task panicked or was cancelled.
    #[error("query task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        let message = match self {
            Self::Load(_) => LOAD_FAILURE_MESSAGE,
            Self::Task(_) => "Internal server error.",
        };
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": message })),
        )
            .into_response()
    }
}
