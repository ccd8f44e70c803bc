// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! HTTP routes for the task service.
//!
//! | Method | Path | Success | Errors |
//! |--------|------|---------|--------|
//! | GET | `/tasks` | 200, `[{"id", "task"}]` | 500 |
//! | POST | `/tasks` | 201, `{"message"}` | 400, 500 |

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{Error, Result};
use crate::model::{CreateTaskRequest, MessageResponse, TASK_CREATED_MESSAGE, Task};
use crate::service::TaskService;

/// Build the router. CORS is open to every origin.
pub fn router(service: Arc<TaskService>) -> Router {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Serve until `shutdown` resolves.
pub async fn serve<F>(
    addr: SocketAddr,
    service: Arc<TaskService>,
    shutdown: F,
) -> std::io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Task service listening");
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn list_tasks(State(service): State<Arc<TaskService>>) -> Result<Json<Vec<Task>>> {
    Ok(Json(service.list_tasks().await?))
}

async fn create_task(
    State(service): State<Arc<TaskService>>,
    payload: std::result::Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let Json(request) = payload.map_err(|rejection| Error::InvalidBody(rejection.body_text()))?;

    service.create_task(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: TASK_CREATED_MESSAGE.to_string(),
        }),
    ))
}
