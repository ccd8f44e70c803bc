// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! HTTP route for todo-logger: `POST /log`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::writer::{DEFAULT_MESSAGE, LogFile};

/// Body of `POST /log`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogRequest {
    /// Message to record; the placeholder is used when absent.
    #[serde(default)]
    pub message: Option<String>,
}

/// Acknowledgement returned for every stored entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogResponse {
    /// Always `"ok"`.
    pub status: String,
}

impl LogResponse {
    fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Build the router.
pub fn router(log: Arc<LogFile>) -> Router {
    Router::new()
        .route("/log", post(write_log))
        .layer(TraceLayer::new_for_http())
        .with_state(log)
}

/// Serve until `shutdown` resolves.
pub async fn serve<F>(addr: SocketAddr, log: Arc<LogFile>, shutdown: F) -> std::io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        addr = %listener.local_addr()?,
        log_path = %log.path().display(),
        "Log service listening"
    );
    axum::serve(listener, router(log))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn write_log(
    State(log): State<Arc<LogFile>>,
    payload: std::result::Result<Json<LogRequest>, JsonRejection>,
) -> Result<Json<LogResponse>> {
    let Json(request) = payload.map_err(|rejection| Error::InvalidRequest(rejection.body_text()))?;
    let message = request.message.as_deref().unwrap_or(DEFAULT_MESSAGE);

    let line = log.append(message).await?;
    debug!(%line, "Log entry written");

    Ok(Json(LogResponse::ok()))
}
