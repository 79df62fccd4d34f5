//! Internal audit log: one CSV row per mutating operation.

use super::csv_store::load_table;
use crate::errors::AppResult;
use crate::utils::time::now_in;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub message: String,
}

const LOG_HEADERS: [&str; 4] = ["date", "operation", "target", "message"];

/// Append an internal log line to the audit table at `path`, stamped in the
/// reference timezone like the events themselves.
pub fn ttlog(
    path: &Path,
    offset: FixedOffset,
    operation: &str,
    target: &str,
    message: &str,
) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let is_new = file.metadata()?.len() == 0;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if is_new {
        wtr.write_record(LOG_HEADERS)?;
    }
    wtr.serialize(LogEntry {
        date: now_in(offset).to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    })?;
    wtr.flush()?;

    Ok(())
}

pub fn load_log(path: &Path) -> AppResult<Vec<LogEntry>> {
    load_table(path)
}
