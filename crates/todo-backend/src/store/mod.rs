// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Storage interface and backends for the tasks table.

pub mod memory;
pub mod postgres;

pub use self::memory::MemoryTaskStore;
pub use self::postgres::PostgresTaskStore;

use async_trait::async_trait;

use crate::model::Task;

/// Storage errors.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StoreError {
    /// A connection to the database could not be opened.
    #[error("connection failed: {0}")]
    Connect(#[source] sqlx::Error),

    /// A statement failed on an open connection.
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// The backend is not reachable (used by non-SQL backends).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Storage used by the task service.
///
/// Implementations acquire whatever handle they need per call and release it
/// before returning, on success and on error.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Open and close a connection to prove the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Create the tasks table if it does not exist. Idempotent.
    async fn ensure_schema(&self) -> Result<(), StoreError>;

    /// All tasks ordered by ascending id.
    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError>;

    /// Insert a task and commit it, returning the assigned id.
    async fn insert_task(&self, task: &str) -> Result<i32, StoreError>;
}
