// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Common test infrastructure for todo-backend integration tests.
//!
//! Every [`TestDatabase`] lives in its own PostgreSQL schema so tests can run
//! in parallel against one server without seeing each other's `tasks` table.

#![allow(dead_code)]

use std::str::FromStr;

use sqlx::Connection;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use uuid::Uuid;

use todo_backend::store::PostgresTaskStore;

/// Skip test if database URL is not set
#[macro_export]
macro_rules! skip_if_no_db {
    () => {
        if std::env::var("TEST_DATABASE_URL").is_err() {
            eprintln!("Skipping test: TEST_DATABASE_URL not set");
            return;
        }
    };
}

/// Isolated schema inside the database named by `TEST_DATABASE_URL`.
pub struct TestDatabase {
    base: PgConnectOptions,
    pub schema: String,
}

impl TestDatabase {
    /// Create a fresh, empty schema.
    pub async fn new() -> Option<Self> {
        let database_url = std::env::var("TEST_DATABASE_URL").ok()?;
        let base = PgConnectOptions::from_str(&database_url).ok()?;
        let schema = format!("todo_test_{}", Uuid::new_v4().simple());

        let mut conn = PgConnection::connect_with(&base).await.ok()?;
        sqlx::raw_sql(&format!("CREATE SCHEMA {}", schema))
            .execute(&mut conn)
            .await
            .ok()?;
        conn.close().await.ok()?;

        Some(Self { base, schema })
    }

    /// Options whose connections resolve unqualified names in this schema.
    pub fn options(&self) -> PgConnectOptions {
        self.base
            .clone()
            .options([("search_path", self.schema.as_str())])
    }

    /// Store bound to this schema.
    pub fn store(&self) -> PostgresTaskStore {
        PostgresTaskStore::new(self.options())
    }

    /// Count tables named `tasks` in this schema.
    pub async fn tasks_table_count(&self) -> i64 {
        let mut conn = PgConnection::connect_with(&self.base)
            .await
            .expect("Failed to connect");
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM information_schema.tables WHERE table_schema = $1 AND table_name = 'tasks'",
        )
        .bind(&self.schema)
        .fetch_one(&mut conn)
        .await
        .expect("Failed to count tables");
        conn.close().await.ok();
        count
    }

    /// Drop the schema and everything in it.
    pub async fn cleanup(self) {
        if let Ok(mut conn) = PgConnection::connect_with(&self.base).await {
            sqlx::raw_sql(&format!("DROP SCHEMA IF EXISTS {} CASCADE", self.schema))
                .execute(&mut conn)
                .await
                .ok();
            conn.close().await.ok();
        }
    }
}
