// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Append-only log file.
//!
//! Each entry is one line `[<local timestamp>] <message>`. The file is opened
//! in append mode per write and closed afterwards; the line goes out in a
//! single write so concurrent appends of short lines do not interleave.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tokio::io::AsyncWriteExt;

/// Placeholder written when a request carries no message.
pub const DEFAULT_MESSAGE: &str = "Evento sin mensaje";

/// Append-only text file of log entries.
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    /// Prepare `path` for appending, creating its parent directory.
    pub async fn open(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(Self { path })
    }

    /// Location of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry stamped with the current local time.
    ///
    /// Returns the line written, without the trailing newline.
    pub async fn append(&self, message: &str) -> std::io::Result<String> {
        let line = format_line(Local::now(), message);

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(format!("{}\n", line).as_bytes()).await?;
        file.flush().await?;

        Ok(line)
    }
}

/// `[YYYY-MM-DD HH:MM:SS.ffffff] message`
pub fn format_line(at: DateTime<Local>, message: &str) -> String {
    format!("[{}] {}", at.format("%Y-%m-%d %H:%M:%S%.6f"), message)
}
