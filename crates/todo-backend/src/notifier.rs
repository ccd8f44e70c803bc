// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Delivery of log messages to the log service.
//!
//! Notifications are best-effort. [`TaskService`](crate::service::TaskService)
//! bounds each call with a timeout and discards the error after logging it.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

/// Notification errors.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum NotifyError {
    /// The request could not be sent or timed out.
    #[error("request to log service failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The log service answered with a non-success status.
    #[error("log service answered {0}")]
    Rejected(u16),

    /// The service-level deadline elapsed first.
    #[error("log service did not answer within {0:?}")]
    TimedOut(Duration),
}

/// Side channel that receives a message after each stored task.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one message.
    async fn notify(&self, message: &str) -> Result<(), NotifyError>;
}

#[derive(Serialize)]
struct LogRequest<'a> {
    message: &'a str,
}

/// Notifier posting `{"message": ...}` to the log service.
#[derive(Debug, Clone)]
pub struct HttpNotifier {
    client: reqwest::Client,
    url: String,
}

impl HttpNotifier {
    /// Create a notifier for `url` whose requests give up after `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    async fn notify(&self, message: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.url)
            .json(&LogRequest { message })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Rejected(status.as_u16()));
        }
        Ok(())
    }
}
