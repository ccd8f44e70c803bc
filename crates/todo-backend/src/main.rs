// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Todo Backend - Task Service
//!
//! Waits for PostgreSQL, ensures the tasks table exists, then serves the
//! task API until interrupted.

use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info, warn};

use todo_backend::config::Config;
use todo_backend::http;
use todo_backend::notifier::HttpNotifier;
use todo_backend::service::TaskService;
use todo_backend::startup;
use todo_backend::store::PostgresTaskStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_backend=info,tower_http=info".into()),
        )
        .init();

    // Load .env file if present
    if let Err(e) = dotenvy::dotenv() {
        warn!("No .env file loaded: {}", e);
    }

    let config = Config::from_env().map_err(|e| {
        error!("Configuration error: {}", e);
        e
    })?;

    info!(
        db_host = %config.db_host,
        db_name = %config.db_name,
        logger_url = %config.logger_url,
        http_addr = %config.http_addr,
        "Starting task service"
    );

    let store = Arc::new(PostgresTaskStore::new(config.connect_options()));

    if let Err(e) = startup::initialize(store.as_ref(), &config.retry_policy()).await {
        error!(error = %e, "Could not connect to the database");
        std::process::exit(1);
    }

    let notifier = Arc::new(HttpNotifier::new(
        config.logger_url.clone(),
        config.logger_timeout,
    )?);
    let service = Arc::new(
        TaskService::new(store, notifier).with_notify_timeout(config.logger_timeout),
    );

    http::serve(config.http_addr, service, shutdown_signal()).await?;

    info!("Task service shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("Shutdown signal received");
}
