// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Configuration loading from environment variables.

use std::net::SocketAddr;
use std::time::Duration;

use sqlx::postgres::PgConnectOptions;

use crate::startup::RetryPolicy;

/// Task service configuration
#[derive(Clone)]
pub struct Config {
    /// PostgreSQL host
    pub db_host: String,
    /// PostgreSQL port
    pub db_port: u16,
    /// Database name
    pub db_name: String,
    /// Database user
    pub db_user: String,
    /// Database password
    pub db_password: String,
    /// Full URL of the log service's write endpoint
    pub logger_url: String,
    /// Upper bound for a single log delivery
    pub logger_timeout: Duration,
    /// HTTP listen address
    pub http_addr: SocketAddr,
    /// Connection attempts made before startup gives up
    pub db_connect_attempts: u32,
    /// Pause between failed connection attempts
    pub db_connect_interval: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional:
    /// - `DB_HOST` (default: `db`)
    /// - `DB_PORT` (default: 5432)
    /// - `POSTGRES_DB` (default: `todo_db`)
    /// - `POSTGRES_USER` (default: `todo_user`)
    /// - `POSTGRES_PASSWORD` (default: `todo_pass`)
    /// - `LOGGER_URL` (default: `http://logger:4000/log`)
    /// - `LOGGER_TIMEOUT_MS` (default: 2000)
    /// - `TODO_BACKEND_PORT` (default: 5000)
    /// - `DB_CONNECT_ATTEMPTS` (default: 10, at least 1)
    /// - `DB_CONNECT_INTERVAL_SECS` (default: 3)
    pub fn from_env() -> Result<Self, ConfigError> {
        let db_host = var_or("DB_HOST", "db");
        let db_name = var_or("POSTGRES_DB", "todo_db");
        let db_user = var_or("POSTGRES_USER", "todo_user");
        let db_password = var_or("POSTGRES_PASSWORD", "todo_pass");
        let logger_url = var_or("LOGGER_URL", "http://logger:4000/log");

        let db_port: u16 = var_or("DB_PORT", "5432")
            .parse()
            .map_err(|_| ConfigError::Invalid("DB_PORT", "must be a valid port number"))?;

        let http_port: u16 = var_or("TODO_BACKEND_PORT", "5000")
            .parse()
            .map_err(|_| {
                ConfigError::Invalid("TODO_BACKEND_PORT", "must be a valid port number")
            })?;

        let logger_timeout_ms: u64 = var_or("LOGGER_TIMEOUT_MS", "2000")
            .parse()
            .map_err(|_| {
                ConfigError::Invalid("LOGGER_TIMEOUT_MS", "must be a non-negative integer")
            })?;

        let db_connect_attempts: u32 = var_or("DB_CONNECT_ATTEMPTS", "10")
            .parse()
            .ok()
            .filter(|attempts| *attempts > 0)
            .ok_or(ConfigError::Invalid(
                "DB_CONNECT_ATTEMPTS",
                "must be a positive integer",
            ))?;

        let db_connect_interval_secs: u64 = var_or("DB_CONNECT_INTERVAL_SECS", "3")
            .parse()
            .map_err(|_| {
                ConfigError::Invalid("DB_CONNECT_INTERVAL_SECS", "must be a non-negative integer")
            })?;

        Ok(Self {
            db_host,
            db_port,
            db_name,
            db_user,
            db_password,
            logger_url,
            logger_timeout: Duration::from_millis(logger_timeout_ms),
            http_addr: SocketAddr::from(([0, 0, 0, 0], http_port)),
            db_connect_attempts,
            db_connect_interval: Duration::from_secs(db_connect_interval_secs),
        })
    }

    /// Connection options for the tasks database.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .database(&self.db_name)
            .username(&self.db_user)
            .password(&self.db_password)
    }

    /// Startup retry budget derived from the connect settings.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.db_connect_attempts,
            interval: self.db_connect_interval,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_name", &self.db_name)
            .field("db_user", &self.db_user)
            .field("db_password", &"***")
            .field("logger_url", &self.logger_url)
            .field("logger_timeout", &self.logger_timeout)
            .field("http_addr", &self.http_addr)
            .field("db_connect_attempts", &self.db_connect_attempts)
            .field("db_connect_interval", &self.db_connect_interval)
            .finish()
    }
}

fn var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("invalid value for {0}: {1}")]
    Invalid(&'static str, &'static str),
}
