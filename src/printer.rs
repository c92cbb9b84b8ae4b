// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
The [`Printer`] façade.

A printer owns up to three kinds of sink (a [`CustomSink`], a [`FileLogger`] and a
[`StdoutLogger`]), a level threshold, and the time of its previous record.  Every log call is
enriched once and the finished [`LogRecord`] is handed to each sink in turn: custom first, then
file, then stdout.

```rust
use rotalog::{Format, InMemoryLogger, Level, Printer};
use std::sync::Arc;

let capture = Arc::new(InMemoryLogger::new());
let printer = Printer::new_custom(Format::Json, Level::Info, capture.clone());
printer.info("listening on :8080");
printer.debug("not emitted");

let rows = capture.rows(Level::Info, Format::Json);
assert_eq!(rows[0].msg, "listening on :8080");
assert_eq!(rows[0].td, "0.000s");
assert!(capture.drain_logs(Level::Debug).is_empty());
```

# Locking

Sinks sit behind `RwLock<Option<_>>`.  Logging takes the read side, so concurrent calls only
contend on the destination itself.  The rotation thread takes the write side of the file slot for
the close-rename-reopen step, and [`Printer::close`] takes each slot's write side once to remove
the sink.
*/

use crate::builder::PrinterBuilder;
use crate::config::{DEFAULT_LOG_DIR, TIME_LAYOUT};
use crate::custom_logger::{CustomLogger, CustomSink};
use crate::enrich::{self, LastLog};
use crate::error::Result;
use crate::file_logger::FileLogger;
use crate::format::Format;
use crate::log_record::LogRecord;
use crate::logger::{Logger, Threshold};
use crate::rotation::Rotator;
use crate::stdout_logger::StdoutLogger;
use crate::sys;
use crate::Level;
use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use std::fmt::{Arguments, Display};
use std::panic::Location;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// State shared between a [Printer] and its rotation thread.
#[derive(Debug)]
pub(crate) struct Shared {
    level: Threshold,
    last_log: LastLog,
    closed: AtomicBool,
    custom: RwLock<Option<CustomSink>>,
    custom_client: Mutex<Option<Arc<dyn CustomLogger>>>,
    file: RwLock<Option<FileLogger>>,
    file_format: Format,
    stdout: RwLock<Option<StdoutLogger>>,
}

impl Shared {
    pub(crate) fn new(
        level: Level,
        custom: Option<(Arc<dyn CustomLogger>, CustomSink)>,
        file: Option<FileLogger>,
        stdout: Option<StdoutLogger>,
    ) -> Self {
        // fix the execution id no later than the first printer
        enrich::execution_id();
        let file_format = file.as_ref().map(FileLogger::format).unwrap_or_default();
        let (custom_client, custom) = match custom {
            Some((client, sink)) => (Some(client), Some(sink)),
            None => (None, None),
        };
        Self {
            level: Threshold::new(level),
            last_log: LastLog::new(),
            closed: AtomicBool::new(false),
            custom: RwLock::new(custom),
            custom_client: Mutex::new(custom_client),
            file: RwLock::new(file),
            file_format,
            stdout: RwLock::new(stdout),
        }
    }

    pub(crate) fn level(&self) -> Level {
        self.level.get()
    }

    pub(crate) fn file_slot(&self) -> &RwLock<Option<FileLogger>> {
        &self.file
    }

    fn push(&self, message: &str, level: Level, caller: &Location<'_>) {
        if self.closed.load(Ordering::Acquire) || !self.level.allows(level) {
            return;
        }
        let now = Utc::now();
        let record = LogRecord {
            level,
            message: message.trim_end().to_string(),
            memory_usage: sys::process_memory_bytes()
                .map(enrich::format_memory)
                .unwrap_or_default(),
            time_delta: self
                .last_log
                .delta(now.timestamp_nanos_opt().unwrap_or_default()),
            trace: enrich::call_trace(caller),
            execution_id: enrich::execution_id().to_string(),
            binary_name: enrich::binary_name().to_string(),
            timestamp: now.format(TIME_LAYOUT).to_string(),
        };

        if let Some(sink) = self.custom.read().as_ref() {
            if let Err(err) = sink.finish_log_record(&record) {
                self.report(&format!("failed to write to custom logger: {err}"));
            }
        }
        if let Some(sink) = self.file.read().as_ref() {
            if let Err(err) = sink.finish_log_record(&record) {
                self.report(&format!("failed to write to {}: {err}", sink.path().display()));
            }
        }
        if let Some(sink) = self.stdout.read().as_ref() {
            if let Err(err) = sink.finish_log_record(&record) {
                // stdout itself failed, so it cannot carry the report
                eprintln!("rotalog: failed to write to stdout: {err}");
            }
        }
    }

    /**
    Reports a failure of the printer's own machinery.

    Goes to the stdout sink as an error record when there is one that accepts errors, and to
    stderr otherwise.
    */
    pub(crate) fn report(&self, message: &str) {
        if let Some(guard) = self.stdout.try_read() {
            if let Some(stdout) = guard.as_ref().filter(|sink| sink.level().allows(Level::Error)) {
                let mut record = LogRecord::new(Level::Error, message);
                record.execution_id = enrich::execution_id().to_string();
                record.binary_name = enrich::binary_name().to_string();
                if stdout.finish_log_record(&record).is_ok() {
                    return;
                }
            }
        }
        eprintln!("rotalog: {message}");
    }

    fn set_level(&self, level: Level) {
        self.level.set(level);
        if let Some(sink) = self.custom.read().as_ref() {
            sink.set_level(level);
        }
        if let Some(sink) = self.file.read().as_ref() {
            sink.set_level(level);
        }
        if let Some(sink) = self.stdout.read().as_ref() {
            sink.set_level(level);
        }
    }

    fn flush(&self) {
        if let Some(sink) = self.custom.read().as_ref() {
            if let Err(err) = sink.prepare_to_die() {
                self.report(&format!("failed to flush custom logger: {err}"));
            }
        }
        if let Some(sink) = self.file.read().as_ref() {
            if let Err(err) = sink.prepare_to_die() {
                self.report(&format!("failed to flush {}: {err}", sink.path().display()));
            }
        }
        if let Some(sink) = self.stdout.read().as_ref() {
            if let Err(err) = sink.prepare_to_die() {
                eprintln!("rotalog: failed to flush stdout: {err}");
            }
        }
    }
}

/**
Enriches log calls and fans them out to its sinks.

A printer is shared by reference (or `Arc`) between any number of threads.  Logging never fails
from the caller's point of view: sink failures are reported on stdout or stderr and the call
returns normally.

Build one with the named constructors or with [`PrinterBuilder`].
*/
#[derive(Debug)]
pub struct Printer {
    shared: Arc<Shared>,
    rotator: Mutex<Option<Rotator>>,
}

impl Printer {
    pub(crate) fn from_parts(shared: Arc<Shared>, rotator: Option<Rotator>) -> Self {
        Self {
            shared,
            rotator: Mutex::new(rotator),
        }
    }

    /**
    The general-purpose printer: JSON to `<DEFAULT_LOG_DIR>/<binary>.log` and colored text to
    stdout.
    */
    pub fn new(level: Level) -> Result<Self> {
        PrinterBuilder::new()
            .format(Format::Json)
            .level(level)
            .file_dir(DEFAULT_LOG_DIR)
            .stdout(Format::Text)
            .build()
    }

    /// A printer writing only to `<dir>/<binary>.log`.
    pub fn new_file(format: Format, level: Level, dir: impl Into<PathBuf>) -> Result<Self> {
        PrinterBuilder::new()
            .format(format)
            .level(level)
            .file_dir(dir)
            .build()
    }

    /// A printer writing only to stdout.
    pub fn new_std(format: Format, level: Level) -> Self {
        PrinterBuilder::new()
            .level(level)
            .stdout(format)
            .assemble(None)
    }

    /// A printer writing only to `client`'s per-severity writers.
    pub fn new_custom(format: Format, level: Level, client: Arc<dyn CustomLogger>) -> Self {
        PrinterBuilder::new()
            .format(format)
            .level(level)
            .custom(client)
            .assemble(None)
    }

    /// Like [Printer::new_custom], mirroring every record to stdout in the same format.
    pub fn new_custom_and_std(format: Format, level: Level, client: Arc<dyn CustomLogger>) -> Self {
        PrinterBuilder::new()
            .format(format)
            .level(level)
            .custom(client)
            .stdout(format)
            .assemble(None)
    }

    /**
    Logs `message` at `level`.

    Does nothing when `level` does not pass the printer's threshold or the printer is closed.
    Trailing whitespace is trimmed from the message.
    */
    #[track_caller]
    pub fn push(&self, message: &str, level: Level) {
        self.shared.push(message, level, Location::caller());
    }

    /// Formats and logs; formatting is skipped entirely when `level` is filtered out.
    #[track_caller]
    pub fn push_args(&self, level: Level, args: Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        let caller = Location::caller();
        match args.as_str() {
            Some(message) => self.shared.push(message, level, caller),
            None => self.shared.push(&args.to_string(), level, caller),
        }
    }

    #[track_caller]
    fn push_display(&self, level: Level, message: impl Display) {
        if self.enabled(level) {
            self.shared
                .push(&message.to_string(), level, Location::caller());
        }
    }

    #[track_caller]
    pub fn debug(&self, message: impl Display) {
        self.push_display(Level::Debug, message);
    }

    #[track_caller]
    pub fn info(&self, message: impl Display) {
        self.push_display(Level::Info, message);
    }

    #[track_caller]
    pub fn warn(&self, message: impl Display) {
        self.push_display(Level::Warn, message);
    }

    #[track_caller]
    pub fn error(&self, message: impl Display) {
        self.push_display(Level::Error, message);
    }

    /// Whether a record at `level` would currently be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        !self.is_closed() && self.shared.level.allows(level)
    }

    pub fn level(&self) -> Level {
        self.shared.level()
    }

    /// Changes the threshold of the printer and of every sink it owns.
    pub fn set_level(&self, level: Level) {
        self.shared.set_level(level);
    }

    /// Format of the file sink, [Format::None] if the printer has none.
    pub fn file_format(&self) -> Format {
        self.shared.file_format
    }

    /// Path of the active log file, if the printer has a file sink.
    pub fn file_path(&self) -> Option<PathBuf> {
        self.shared
            .file
            .read()
            .as_ref()
            .map(|file| file.path().to_path_buf())
    }

    /// Flushes every sink.
    pub fn flush(&self) {
        self.shared.flush();
    }

    pub fn is_closed(&self) -> bool {
        self.shared.closed.load(Ordering::Acquire)
    }

    /**
    Stops rotation, closes every sink and releases the custom client.

    Blocks until the rotation thread has exited, which can take up to one rotation interval if a
    check is in progress.  Only the first call has any effect; later log calls are ignored.
    Close failures are reported, never returned.
    */
    pub fn close(&self) {
        if self.shared.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        let shared = &self.shared;

        if let Some(sink) = shared.custom.write().take() {
            if let Err(err) = sink.prepare_to_die() {
                shared.report(&format!("failed to flush custom logger: {err}"));
            }
        }
        if let Some(client) = shared.custom_client.lock().take() {
            client.close();
        }

        if let Some(rotator) = self.rotator.lock().take() {
            rotator.stop();
        }

        let file = shared.file.write().take();
        if let Some(file) = file {
            let path = file.path().to_path_buf();
            if let Err(err) = file.close() {
                shared.report(&format!("failed to close file {}: {err}", path.display()));
            }
        }

        let stdout = shared.stdout.write().take();
        if let Some(stdout) = stdout {
            if let Err(err) = stdout.prepare_to_die() {
                eprintln!("rotalog: failed to flush stdout: {err}");
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn has_rotator(&self) -> bool {
        self.rotator.lock().is_some()
    }
}

impl Drop for Printer {
    fn drop(&mut self) {
        self.close();
    }
}

/*
Boilerplate notes.

# Printer

Clone is not implemented: two handles closing the same sinks would be surprising.  Share a printer
with Arc instead.
PartialEq/Eq/Hash make no sense for a set of open destinations.
Default would have to pick a directory or silently log nowhere; use the constructors.
Send/Sync: automatic, and required so one printer serves every thread.
*/
