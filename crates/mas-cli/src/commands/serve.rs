//! Serve command for running the HTTP API.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use mas_core::ImagingService;
use mas_server::ImagingServer;
use mas_store::ActivityStore;

/// Runs the HTTP server until Ctrl-C.
pub fn run(service: ImagingService<ActivityStore>, bind: SocketAddr) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    tracing::info!(data = %service.source().path().display(), %bind, "starting server");
    runtime
        .block_on(ImagingServer::new(service).serve(bind))
        .context("imaging server failed")
}
