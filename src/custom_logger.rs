// SPDX-License-Identifier: MIT OR Apache-2.0

//! Externally supplied destinations.
//!
//! An application plugs its own backend into a printer by implementing [`CustomLogger`]: four
//! writers, one per severity, plus a `close` hook the printer calls when it is closed. The printer
//! asks for each writer once, at construction, and wraps them in a [`CustomSink`].
//!
//! ```rust
//! use rotalog::{Format, InMemoryLogger, Level, Printer};
//! use std::sync::Arc;
//!
//! let client = Arc::new(InMemoryLogger::new());
//! let printer = Printer::new_custom(Format::Json, Level::Debug, client.clone());
//! printer.warn("disk almost full");
//! printer.close();
//! assert!(client.drain_logs(Level::Warn).contains("disk almost full"));
//! assert!(client.is_closed());
//! ```

use crate::error::Result;
use crate::format::Format;
use crate::log_record::LogRecord;
use crate::logger::{Logger, Threshold};
use crate::Level;
use parking_lot::Mutex;
use std::fmt::Debug;
use std::io::Write;

/// A writer handed out by a [CustomLogger].
pub type SeverityWriter = Box<dyn Write + Send>;

/// Per-severity destinations supplied by the application.
pub trait CustomLogger: Debug + Send + Sync {
    fn debug(&self) -> SeverityWriter;
    fn info(&self) -> SeverityWriter;
    fn warn(&self) -> SeverityWriter;
    fn error(&self) -> SeverityWriter;

    /// Releases the backend.  Called once, when the owning printer closes.
    fn close(&self);
}

/**
The sink built around a [CustomLogger]'s four writers.

Records are routed to the writer matching their level; debug records get the debug writer.
*/
pub struct CustomSink {
    debug: Mutex<SeverityWriter>,
    info: Mutex<SeverityWriter>,
    warn: Mutex<SeverityWriter>,
    error: Mutex<SeverityWriter>,
    format: Format,
    threshold: Threshold,
}

impl CustomSink {
    pub fn new(client: &dyn CustomLogger, format: Format, level: Level) -> Self {
        Self {
            debug: Mutex::new(client.debug()),
            info: Mutex::new(client.info()),
            warn: Mutex::new(client.warn()),
            error: Mutex::new(client.error()),
            format,
            threshold: Threshold::new(level),
        }
    }

    fn writer(&self, level: Level) -> Option<&Mutex<SeverityWriter>> {
        match level {
            Level::Debug => Some(&self.debug),
            Level::Info => Some(&self.info),
            Level::Warn => Some(&self.warn),
            Level::Error => Some(&self.error),
            Level::None => None,
        }
    }
}

impl Debug for CustomSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomSink")
            .field("format", &self.format)
            .field("level", &self.threshold.get())
            .finish_non_exhaustive()
    }
}

impl Logger for CustomSink {
    fn finish_log_record(&self, record: &LogRecord) -> Result<()> {
        if !self.threshold.allows(record.level()) {
            return Ok(());
        }
        let Some(writer) = self.writer(record.level()) else {
            return Ok(());
        };
        let bytes = self.format.encode(record)?;
        if bytes.is_empty() {
            return Ok(());
        }
        writer.lock().write_all(&bytes)?;
        Ok(())
    }

    fn level(&self) -> Level {
        self.threshold.get()
    }

    fn set_level(&self, level: Level) {
        self.threshold.set(level);
    }

    fn prepare_to_die(&self) -> Result<()> {
        for writer in [&self.debug, &self.info, &self.warn, &self.error] {
            writer.lock().flush()?;
        }
        Ok(())
    }
}
