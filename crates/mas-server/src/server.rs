//! `ImagingServer`: Axum HTTP server exposing the activity queries.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use mas_core::{ActivitySource, ImagingActivity, ImagingService, Window};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::error::{ApiError, ServerError};

/// Body of `POST /api/imaging/split-windows`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityStateRequest {
    /// State to filter windows by; missing or blank returns every window.
    #[serde(default, rename = "activityState", alias = "activity_state")]
    pub activity_state: Option<String>,
}

/// Response body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the server is running.
    pub status: String,
}

/// Shared state accessible from Axum handlers.
pub struct AppState<S> {
    pub service: Arc<ImagingService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

/// The HTTP front end over an [`ImagingService`].
pub struct ImagingServer<S> {
    service: Arc<ImagingService<S>>,
}

impl<S> ImagingServer<S>
where
    S: ActivitySource + Send + Sync + 'static,
{
    /// Create a new server.
    pub fn new(service: ImagingService<S>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Build the Axum router with all routes.
    pub fn router(&self) -> Router {
        let state = AppState {
            service: Arc::clone(&self.service),
        };

        Router::new()
            .route("/health", get(health_handler))
            .route(
                "/api/imaging/chronological-window",
                get(chronological_window_handler::<S>),
            )
            .route(
                "/api/imaging/split-windows",
                post(split_windows_handler::<S>),
            )
            .with_state(state)
    }

    /// Bind `addr` and serve until Ctrl-C.
    pub async fn serve(self, addr: SocketAddr) -> Result<(), ServerError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        let local_addr = listener.local_addr().map_err(ServerError::Serve)?;
        tracing::info!(%local_addr, "imaging server listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(ServerError::Serve)
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for ctrl-c, running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

/// GET /health
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
    })
}

/// GET /api/imaging/chronological-window
async fn chronological_window_handler<S>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<ImagingActivity>>, ApiError>
where
    S: ActivitySource + Send + Sync + 'static,
{
    let service = state.service;
    let activities = tokio::task::spawn_blocking(move || service.chronological_window())
        .await?
        .map_err(|err| ApiError::Load(Box::new(err)))?;
    Ok(Json(activities))
}

/// POST /api/imaging/split-windows
async fn split_windows_handler<S>(
    State(state): State<AppState<S>>,
    Json(request): Json<ActivityStateRequest>,
) -> Result<Json<Vec<Window>>, ApiError>
where
    S: ActivitySource + Send + Sync + 'static,
{
    let service = state.service;
    let windows = tokio::task::spawn_blocking(move || {
        service.split_windows_by_state(request.activity_state.as_deref())
    })
    .await?
    .map_err(|err| ApiError::Load(Box::new(err)))?;
    Ok(Json(windows))
}
