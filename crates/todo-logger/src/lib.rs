// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Todo Logger - append-only logging sidecar.
//!
//! Receives `POST /log` with `{"message": "..."}` and appends
//! `[<timestamp>] <message>` to a local file. Nothing reads the file back.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LOG_PATH` | `/logs/service.log` | File entries are appended to |
//! | `LOGGER_PORT` | `4000` | HTTP listen port |

#![deny(missing_docs)]

/// Environment configuration.
pub mod config;
/// Error types and HTTP mapping.
pub mod error;
/// `POST /log` route and server.
pub mod http;
/// Timestamped append-only file.
pub mod writer;

pub use config::Config;
pub use error::Error;
pub use writer::LogFile;
