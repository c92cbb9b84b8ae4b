// SPDX-License-Identifier: MIT OR Apache-2.0

//! The enriched record and its wire view.
//!
//! A [`LogRecord`] is assembled once per [`Printer::push`](crate::Printer::push) call and handed
//! by reference to every sink. Formatters never keep it; they derive a [`LogRow`], the flat
//! all-string shape that the JSON and binary encoders serialize.
//!
//! # Example
//!
//! ```rust
//! use rotalog::{Level, LogRecord, LogRow};
//!
//! let mut record = LogRecord::new(Level::Info, "job finished");
//! record.memory_usage = "12MB".to_string();
//! let row = LogRow::from(&record);
//! assert_eq!(row.level, "info");
//! assert_eq!(row.mem, "12MB");
//! ```

use crate::Level;
use crate::config::TIME_LAYOUT;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/**
One log line, enriched with diagnostic metadata.

Every field is populated or empty; there is no optional state.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
    /// Process memory, scaled, e.g. `"512MB"`.
    pub memory_usage: String,
    /// Time since the printer's previous record, e.g. `"1.250s"`.
    pub time_delta: String,
    /// `outer,inner` call sites, each `dir/file.rs:line`.
    pub trace: String,
    pub execution_id: String,
    pub binary_name: String,
    /// UTC, formatted with [TIME_LAYOUT].
    pub timestamp: String,
}

impl LogRecord {
    /**
    Creates a record stamped with the current UTC time and no enrichment.
    */
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            memory_usage: String::new(),
            time_delta: String::new(),
            trace: String::new(),
            execution_id: String::new(),
            binary_name: String::new(),
            timestamp: Utc::now().format(TIME_LAYOUT).to_string(),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogRecord {
    fn default() -> Self {
        Self::new(Level::Info, "")
    }
}

/**
Flat wire view of a [LogRecord].

Key names are stable; they are what existing JSON and CBOR logs contain.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LogRow {
    pub level: String,
    pub mem: String,
    pub msg: String,
    pub td: String,
    pub trace: String,
    pub eid: String,
    pub bin: String,
    pub ts: String,
}

impl From<&LogRecord> for LogRow {
    fn from(record: &LogRecord) -> Self {
        Self {
            level: record.level.as_str().to_string(),
            mem: record.memory_usage.clone(),
            msg: record.message.clone(),
            td: record.time_delta.clone(),
            trace: record.trace.clone(),
            eid: record.execution_id.clone(),
            bin: record.binary_name.clone(),
            ts: record.timestamp.clone(),
        }
    }
}

/*
Boilerplate notes for LogRecord:

- Clone: sinks that buffer (InMemoryLogger) may want their own copy.
- Eq/Hash: derived, all fields are plain data.
- Default: an empty Info record, mirroring the other loggers in this crate.
- Ord: no meaningful ordering between records.
- Display: deliberately absent; rendering belongs to the formatters.
*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_has_millisecond_layout() {
        let record = LogRecord::new(Level::Warn, "x");
        // 2006-01-02T15:04:05.000
        assert_eq!(record.timestamp.len(), 23);
        assert_eq!(&record.timestamp[10..11], "T");
        assert_eq!(&record.timestamp[19..20], ".");
    }

    #[test]
    fn row_uses_wire_keys() {
        let mut record = LogRecord::new(Level::Error, "boom");
        record.trace = "a/b.rs:1,c/d.rs:2".to_string();
        let row = LogRow::from(&record);
        let value = serde_json::to_value(&row).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        for key in ["level", "mem", "msg", "td", "trace", "eid", "bin", "ts"] {
            assert!(keys.contains(&key), "missing {key}");
        }
        assert_eq!(value["level"], "error");
        assert_eq!(value["trace"], "a/b.rs:1,c/d.rs:2");
    }
}
