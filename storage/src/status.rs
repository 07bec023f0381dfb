use crate::TIMESTAMP_FORMAT;
use anyhow::{Context, Result};
use chrono::Utc;
use chrono_tz::Asia::Tokyo;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Outcome of one status check. `message` is empty on normal operation
/// and carries the page text (or a fixed diagnostic) otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResult {
    pub is_normal: bool,
    pub message: String,
}

impl StatusResult {
    pub fn normal() -> Self {
        Self {
            is_normal: true,
            message: String::new(),
        }
    }

    pub fn abnormal(message: impl Into<String>) -> Self {
        Self {
            is_normal: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub timestamp: String,
    pub status: StatusResult,
}

impl StatusRecord {
    /// Stamps `status` with the current time in Japan Standard Time.
    pub fn now(status: StatusResult) -> Self {
        let timestamp = Utc::now()
            .with_timezone(&Tokyo)
            .format(TIMESTAMP_FORMAT)
            .to_string();
        Self { timestamp, status }
    }
}

/// Overwrites the status file with `record` as pretty-printed UTF-8 JSON.
/// Non-ASCII page text is written literally, the dashboard reads it as-is.
pub fn write_status_record(path: &Path, record: &StatusRecord) -> Result<()> {
    let payload = serde_json::to_string_pretty(record).context("serialize status record")?;
    fs::write(path, payload)
        .with_context(|| format!("write status file {}", path.display()))?;
    Ok(())
}

pub fn read_status_record(path: &Path) -> Result<StatusRecord> {
    let payload = fs::read_to_string(path)
        .with_context(|| format!("read status file {}", path.display()))?;
    serde_json::from_str(&payload)
        .with_context(|| format!("parse status file {}", path.display()))
}
