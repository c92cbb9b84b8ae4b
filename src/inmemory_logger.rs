// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Logger
//!
//! A [`CustomLogger`] that keeps everything written to it in memory, one buffer per severity.
//! It is ideal for:
//!
//! - Unit testing code that logs through a [`Printer`](crate::Printer)
//! - Capturing logs where stdout is unavailable or redirected
//! - Programmatically examining encoded output, including the binary format
//!
//! ## Architecture
//!
//! Each severity has an `Arc<Mutex<Vec<u8>>>`. The writers handed to the printer are
//! [`BufferWriter`]s sharing those buffers, so the logger can be inspected while a printer is still
//! writing to it.

use crate::custom_logger::{CustomLogger, SeverityWriter};
use crate::format::Format;
use crate::log_record::LogRow;
use crate::Level;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

type Buffer = Arc<Mutex<Vec<u8>>>;

/// Per-severity in-memory buffers.
///
/// # Example
///
/// ```rust
/// use rotalog::{Format, InMemoryLogger, Level, Printer};
/// use std::sync::Arc;
///
/// let logger = Arc::new(InMemoryLogger::new());
/// let printer = Printer::new_custom(Format::Binary, Level::Info, logger.clone());
/// printer.info("Test message 42");
/// printer.debug("filtered out");
///
/// let rows = logger.rows(Level::Info, Format::Binary);
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].msg, "Test message 42");
/// assert!(logger.drain_logs(Level::Debug).is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryLogger {
    debug: Buffer,
    info: Buffer,
    warn: Buffer,
    error: Buffer,
    closed: AtomicBool,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug/Default: derived, an empty set of buffers is the obvious zero value
// - Clone: NOT implemented - clones would silently share buffers
// - PartialEq/Eq/Hash: NOT implemented - equality semantics unclear for loggers
// - Send/Sync: automatic through Arc<Mutex<_>> and AtomicBool

impl InMemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    fn buffer(&self, level: Level) -> Option<&Buffer> {
        match level {
            Level::Debug => Some(&self.debug),
            Level::Info => Some(&self.info),
            Level::Warn => Some(&self.warn),
            Level::Error => Some(&self.error),
            Level::None => None,
        }
    }

    /// Takes the raw bytes written for `level`, clearing that buffer.
    pub fn drain_bytes(&self, level: Level) -> Vec<u8> {
        self.buffer(level)
            .map(|buffer| std::mem::take(&mut *buffer.lock()))
            .unwrap_or_default()
    }

    /// Takes everything written for `level` as text, clearing that buffer.
    pub fn drain_logs(&self, level: Level) -> String {
        String::from_utf8_lossy(&self.drain_bytes(level)).into_owned()
    }

    /// Number of lines currently buffered for `level` in a line-oriented text or JSON format.
    pub fn line_count(&self, level: Level) -> usize {
        self.buffer(level)
            .map(|buffer| buffer.lock().iter().filter(|b| **b == b'\n').count())
            .unwrap_or_default()
    }

    /**
    Decodes the buffered records for `level` without clearing them.

    Returns an empty vector if the buffer does not decode as `format`.
    */
    pub fn rows(&self, level: Level, format: Format) -> Vec<LogRow> {
        let Some(buffer) = self.buffer(level) else {
            return Vec::new();
        };
        let bytes = buffer.lock().clone();
        format.decode_all(&bytes).unwrap_or_default()
    }

    /// Whether the owning printer has closed this logger.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Writes everything buffered to stderr and clears the buffers.
    pub fn drain_to_console(&self) {
        let mut stderr = io::stderr().lock();
        for level in [Level::Debug, Level::Info, Level::Warn, Level::Error] {
            let _ = stderr.write_all(&self.drain_bytes(level));
        }
    }
}

impl CustomLogger for InMemoryLogger {
    fn debug(&self) -> SeverityWriter {
        Box::new(BufferWriter(self.debug.clone()))
    }

    fn info(&self) -> SeverityWriter {
        Box::new(BufferWriter(self.info.clone()))
    }

    fn warn(&self) -> SeverityWriter {
        Box::new(BufferWriter(self.warn.clone()))
    }

    fn error(&self) -> SeverityWriter {
        Box::new(BufferWriter(self.error.clone()))
    }

    fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }
}

/// Appends to one of an [InMemoryLogger]'s buffers.
#[derive(Debug, Clone)]
pub struct BufferWriter(Buffer);

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writers_share_buffers() {
        let logger = InMemoryLogger::new();
        let mut writer = logger.warn();
        writer.write_all(b"first\n").unwrap();
        writer.write_all(b"second\n").unwrap();
        assert_eq!(logger.line_count(Level::Warn), 2);
        assert_eq!(logger.drain_logs(Level::Warn), "first\nsecond\n");
        assert_eq!(logger.drain_logs(Level::Warn), "");
        assert_eq!(logger.line_count(Level::Error), 0);
    }

    #[test]
    fn close_is_observable() {
        let logger = InMemoryLogger::new();
        assert!(!logger.is_closed());
        logger.close();
        assert!(logger.is_closed());
    }
}
