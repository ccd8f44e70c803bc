// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Task records and request/response bodies.

use serde::{Deserialize, Serialize};

/// Confirmation text returned when a task is stored.
pub const TASK_CREATED_MESSAGE: &str = "Tarea agregada";

/// A stored task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Identifier assigned by storage on insert.
    pub id: i32,
    /// Task text.
    pub task: String,
}

/// Body of `POST /tasks`.
///
/// `task` stays optional so that a missing field and an explicit `null` reach
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTaskRequest {
    /// Task text.
    #[serde(default)]
    pub task: Option<String>,
}

impl CreateTaskRequest {
    /// Build a request carrying the given text.
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: Some(task.into()),
        }
    }
}

/// Success body for `POST /tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

/// Message sent to the log service after a task is stored.
pub fn task_created_log_message(task: &str) -> String {
    format!("{}: {}", TASK_CREATED_MESSAGE, task)
}
