// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! PostgreSQL-backed task storage.
//!
//! Every operation opens its own connection and closes it before returning.
//! There is no pool; an error mid-operation drops the connection, which
//! closes the socket.

use async_trait::async_trait;
use sqlx::Connection;
use sqlx::postgres::{PgConnectOptions, PgConnection};

use super::{StoreError, TaskStore};
use crate::model::Task;

/// Schema applied at startup.
pub const SCHEMA: &str = include_str!("../../migrations/schema.sql");

/// PostgreSQL-backed task storage.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    options: PgConnectOptions,
}

impl PostgresTaskStore {
    /// Create a store that connects with the given options on every call.
    pub fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }

    async fn connect(&self) -> Result<PgConnection, StoreError> {
        PgConnection::connect_with(&self.options)
            .await
            .map_err(StoreError::Connect)
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn ping(&self) -> Result<(), StoreError> {
        let conn = self.connect().await?;
        conn.close().await?;
        Ok(())
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        let mut conn = self.connect().await?;
        sqlx::Executor::execute(&mut conn, sqlx::raw_sql(SCHEMA)).await?;
        conn.close().await?;
        Ok(())
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let mut conn = self.connect().await?;
        let tasks = sqlx::query_as::<_, Task>("SELECT id, task FROM tasks ORDER BY id")
            .fetch_all(&mut conn)
            .await?;
        conn.close().await?;
        Ok(tasks)
    }

    async fn insert_task(&self, task: &str) -> Result<i32, StoreError> {
        let mut conn = self.connect().await?;
        // Autocommit: the row is durable once the statement returns.
        let id: i32 = sqlx::query_scalar("INSERT INTO tasks (task) VALUES ($1) RETURNING id")
            .bind(task)
            .fetch_one(&mut conn)
            .await?;
        conn.close().await?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_is_idempotent_ddl() {
        assert!(SCHEMA.contains("CREATE TABLE IF NOT EXISTS tasks"));
        assert!(SCHEMA.contains("id SERIAL PRIMARY KEY"));
        assert!(SCHEMA.contains("task TEXT NOT NULL"));
    }

    #[tokio::test]
    async fn test_ping_unreachable_host_is_connect_error() {
        // Port 1 on loopback refuses connections immediately.
        let options = PgConnectOptions::new()
            .host("127.0.0.1")
            .port(1)
            .username("nobody")
            .database("nothing");
        let store = PostgresTaskStore::new(options);

        let err = store.ping().await.unwrap_err();
        assert!(matches!(err, StoreError::Connect(_)));
    }
}
