// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Task operations behind the HTTP routes.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::model::{CreateTaskRequest, Task, task_created_log_message};
use crate::notifier::{Notifier, NotifyError};
use crate::store::TaskStore;

/// Default upper bound for a single log delivery.
pub const DEFAULT_NOTIFY_TIMEOUT: Duration = Duration::from_secs(2);

/// Task service with its storage and log side channel.
pub struct TaskService {
    store: Arc<dyn TaskStore>,
    notifier: Arc<dyn Notifier>,
    notify_timeout: Duration,
}

impl std::fmt::Debug for TaskService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskService")
            .field("store", &"...")
            .field("notifier", &"...")
            .field("notify_timeout", &self.notify_timeout)
            .finish()
    }
}

impl TaskService {
    /// Create a service over the given store and notifier.
    pub fn new(store: Arc<dyn TaskStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            notify_timeout: DEFAULT_NOTIFY_TIMEOUT,
        }
    }

    /// Override the deadline applied to each notification.
    pub fn with_notify_timeout(mut self, timeout: Duration) -> Self {
        self.notify_timeout = timeout;
        self
    }

    /// All tasks ordered by id.
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.store.list_tasks().await?)
    }

    /// Validate, store, then announce a new task.
    ///
    /// The announcement outcome never changes the result.
    pub async fn create_task(&self, request: CreateTaskRequest) -> Result<()> {
        let task = validate_task(request)?;

        let id = self.store.insert_task(&task).await?;
        debug!(id, "Task stored");

        self.announce(&task_created_log_message(&task)).await;
        Ok(())
    }

    async fn announce(&self, message: &str) {
        let outcome = tokio::time::timeout(self.notify_timeout, self.notifier.notify(message))
            .await
            .unwrap_or(Err(NotifyError::TimedOut(self.notify_timeout)));

        if let Err(e) = outcome {
            warn!(error = %e, "Could not deliver log message");
        }
    }
}

/// Any non-empty string is accepted, including `"0"` and whitespace.
fn validate_task(request: CreateTaskRequest) -> Result<String> {
    match request.task {
        Some(task) if !task.is_empty() => Ok(task),
        _ => Err(Error::MissingTask),
    }
}
