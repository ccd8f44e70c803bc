// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Todo Backend - Task Service
//!
//! REST endpoints over a single PostgreSQL table. Each stored task is
//! announced to the log service on a best-effort basis.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   GET/POST /tasks   ┌──────────────────────┐
//! │    Client    │────────────────────▶│     todo-backend     │
//! └──────────────┘                     │      Port 5000       │
//!                                      └──────────────────────┘
//!                                        │                  │
//!                          one connection│                  │ POST /log
//!                          per operation ▼                  ▼ (best-effort)
//!                              ┌──────────────┐   ┌──────────────────────┐
//!                              │  PostgreSQL  │   │     todo-logger      │
//!                              │  tasks table │   │      Port 4000       │
//!                              └──────────────┘   └──────────────────────┘
//! ```
//!
//! # Startup
//!
//! 1. Ping the database up to `DB_CONNECT_ATTEMPTS` times, pausing
//!    `DB_CONNECT_INTERVAL_SECS` between failures. Exhausting the budget
//!    terminates the process with a non-zero status.
//! 2. Create the `tasks` table if it does not exist.
//! 3. Bind the HTTP listener.
//!
//! # Endpoints
//!
//! | Method | Path | Body | Success | Error |
//! |--------|------|------|---------|-------|
//! | GET | `/tasks` | - | 200, tasks ordered by id | 500 |
//! | POST | `/tasks` | `{"task": "..."}` | 201, `{"message": "Tarea agregada"}` | 400 when `task` is missing or empty |
//!
//! # Configuration
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DB_HOST` | `db` | PostgreSQL host |
//! | `DB_PORT` | `5432` | PostgreSQL port |
//! | `POSTGRES_DB` | `todo_db` | Database name |
//! | `POSTGRES_USER` | `todo_user` | Database user |
//! | `POSTGRES_PASSWORD` | `todo_pass` | Database password |
//! | `LOGGER_URL` | `http://logger:4000/log` | Log service endpoint |
//! | `LOGGER_TIMEOUT_MS` | `2000` | Deadline for one log delivery |
//! | `TODO_BACKEND_PORT` | `5000` | HTTP listen port |
//! | `DB_CONNECT_ATTEMPTS` | `10` | Startup connection attempts |
//! | `DB_CONNECT_INTERVAL_SECS` | `3` | Pause between attempts |

#![deny(missing_docs)]

/// Service configuration loaded from environment variables.
pub mod config;

/// Error types with HTTP status mapping.
pub mod error;

/// HTTP router and server loop.
pub mod http;

/// Task records and request/response bodies.
pub mod model;

/// Best-effort delivery of log messages to the log service.
pub mod notifier;

/// Task operations used by the HTTP layer.
pub mod service;

/// Startup retry loop and schema bootstrap.
pub mod startup;

/// Storage trait with PostgreSQL and in-memory backends.
pub mod store;

pub use config::Config;
pub use error::Error;
pub use service::TaskService;
