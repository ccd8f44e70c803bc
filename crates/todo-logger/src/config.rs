// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Configuration for todo-logger.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default location of the log file.
pub const DEFAULT_LOG_PATH: &str = "/logs/service.log";

/// Logger configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// File every message is appended to
    pub log_path: PathBuf,
    /// HTTP listen address
    pub http_addr: SocketAddr,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `LOG_PATH` (default: `/logs/service.log`)
    /// - `LOGGER_PORT` (default: 4000)
    pub fn from_env() -> Result<Self, ConfigError> {
        let log_path = PathBuf::from(
            std::env::var("LOG_PATH").unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string()),
        );

        let port: u16 = std::env::var("LOGGER_PORT")
            .unwrap_or_else(|_| "4000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        Ok(Self {
            log_path,
            http_addr: SocketAddr::from(([0, 0, 0, 0], port)),
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The port number is invalid.
    #[error("Invalid port number in LOGGER_PORT")]
    InvalidPort,
}
