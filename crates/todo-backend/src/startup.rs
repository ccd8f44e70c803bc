// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Startup sequence: wait for the database, then ensure the schema.
//!
//! Both steps must finish before the HTTP listener is bound. Running out of
//! attempts is fatal; the binary exits with a non-zero status.

use std::time::Duration;

use tracing::{info, warn};

use crate::error::Error;
use crate::store::TaskStore;

/// Bounded retry budget for the initial database connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total connection attempts, including the first one.
    pub max_attempts: u32,
    /// Fixed pause after each failed attempt except the last.
    pub interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            interval: Duration::from_secs(3),
        }
    }
}

/// Try to reach the database until it answers or the budget runs out.
///
/// Returns the attempt number that succeeded.
pub async fn wait_for_database(
    store: &dyn TaskStore,
    policy: &RetryPolicy,
) -> Result<u32, Error> {
    let mut attempt = 1;
    loop {
        match store.ping().await {
            Ok(()) => {
                info!(attempt, "Database connection established");
                return Ok(attempt);
            }
            Err(e) if attempt >= policy.max_attempts => {
                return Err(Error::DatabaseUnavailable {
                    attempts: attempt,
                    source: e,
                });
            }
            Err(e) => {
                warn!(
                    attempt,
                    max_attempts = policy.max_attempts,
                    error = %e,
                    "Waiting for database"
                );
                tokio::time::sleep(policy.interval).await;
                attempt += 1;
            }
        }
    }
}

/// Full startup: wait for the database, then create the tasks table if needed.
pub async fn initialize(store: &dyn TaskStore, policy: &RetryPolicy) -> Result<(), Error> {
    wait_for_database(store, policy).await?;
    store.ensure_schema().await?;
    info!("Database schema verified");
    Ok(())
}
