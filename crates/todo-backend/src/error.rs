// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error types for the task service.
//!
//! Only input validation errors carry their message to clients. Everything
//! else is reported as a generic server error and logged.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use crate::store::StoreError;

/// Client-facing message for a missing or empty `task` field.
pub const MISSING_TASK_MESSAGE: &str = "Falta el campo 'task'";

/// Result type using the task service [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Task service errors.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// `task` was absent, null or empty.
    #[error("{}", MISSING_TASK_MESSAGE)]
    MissingTask,

    /// The request body was not a JSON object.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// A storage operation failed while serving a request.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// The database never answered within the startup budget.
    #[error("Database unreachable after {attempts} attempts: {source}")]
    DatabaseUnavailable {
        /// Attempts made before giving up.
        attempts: u32,
        /// Error from the last attempt.
        #[source]
        source: StoreError,
    },
}

impl Error {
    /// Machine-readable code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingTask => "MISSING_TASK",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::Store(_) => "STORAGE_ERROR",
            Self::DatabaseUnavailable { .. } => "DATABASE_UNAVAILABLE",
        }
    }

    /// HTTP status used when this error ends a request.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingTask | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the message is safe to show to clients.
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if self.is_client_error() {
            self.to_string()
        } else {
            error!(code = self.error_code(), error = %self, "Request failed");
            "Internal server error".to_string()
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
