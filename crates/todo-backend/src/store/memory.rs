// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! In-memory task storage.
//!
//! Useful for embedding the service without a database and for handler tests.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{StoreError, TaskStore};
use crate::model::Task;

/// Task storage held in process memory.
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    inner: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    tasks: Vec<Task>,
    last_id: i32,
    schema_ready: bool,
}

impl MemoryTaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tasks.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.tasks.len()
    }

    /// Whether the store holds no tasks.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Whether [`TaskStore::ensure_schema`] has run.
    pub async fn schema_ready(&self) -> bool {
        self.inner.lock().await.schema_ready
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.inner.lock().await.schema_ready = true;
        Ok(())
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.inner.lock().await.tasks.clone())
    }

    async fn insert_task(&self, task: &str) -> Result<i32, StoreError> {
        let mut state = self.inner.lock().await;
        state.last_id += 1;
        let id = state.last_id;
        state.tasks.push(Task {
            id,
            task: task.to_string(),
        });
        Ok(id)
    }
}
