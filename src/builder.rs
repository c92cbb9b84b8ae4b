// SPDX-License-Identifier: MIT OR Apache-2.0

//! Composes a [`Printer`] from its sinks.
//!
//! The named constructors on [`Printer`] are shorthands for the common combinations; the builder
//! covers the rest, such as a file and a custom client together or a per-printer rotation policy.
//!
//! ```rust
//! use rotalog::{Format, InMemoryLogger, Level, PrinterBuilder};
//! use std::sync::Arc;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let capture = Arc::new(InMemoryLogger::new());
//! let printer = PrinterBuilder::new()
//!     .format(Format::Binary)
//!     .level(Level::Info)
//!     .file_dir(dir.path())
//!     .file_name("worker")
//!     .custom(capture.clone())
//!     .build()
//!     .unwrap();
//! printer.info("job 7 done");
//! assert_eq!(printer.file_path().unwrap(), dir.path().join("worker.log"));
//! assert_eq!(capture.rows(Level::Info, Format::Binary)[0].msg, "job 7 done");
//! ```

use crate::config::RotationConfig;
use crate::custom_logger::{CustomLogger, CustomSink};
use crate::enrich;
use crate::error::Result;
use crate::file_logger::FileLogger;
use crate::format::Format;
use crate::printer::{Printer, Shared};
use crate::rotation::{Archiver, Rotator};
use crate::stdout_logger::StdoutLogger;
use crate::Level;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct PrinterBuilder {
    format: Format,
    level: Level,
    file_dir: Option<PathBuf>,
    file_name: Option<String>,
    stdout: Option<Format>,
    custom: Option<Arc<dyn CustomLogger>>,
    rotation: Option<RotationConfig>,
}

impl PrinterBuilder {
    /// No sinks, [Format::None], [Level::None].
    pub fn new() -> Self {
        Self::default()
    }

    /// Format of the file and custom sinks.
    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Adds a file sink in `dir`, which is created if missing.
    pub fn file_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.file_dir = Some(dir.into());
        self
    }

    /// Base name of the log file, without `.log`.  Defaults to the binary name.
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Adds a stdout sink in `format`.
    pub fn stdout(mut self, format: Format) -> Self {
        self.stdout = Some(format);
        self
    }

    /// Adds a sink writing to `client`'s per-severity writers.
    pub fn custom(mut self, client: Arc<dyn CustomLogger>) -> Self {
        self.custom = Some(client);
        self
    }

    /// Rotation policy for this printer instead of [RotationConfig::global].
    pub fn rotation(mut self, config: RotationConfig) -> Self {
        self.rotation = Some(config);
        self
    }

    /**
    Opens the sinks and starts rotation for the file sink, if any.

    Fails if the log directory or file cannot be prepared; nothing is left running in that case.
    */
    pub fn build(self) -> Result<Printer> {
        let file = match &self.file_dir {
            Some(dir) => {
                let name = match &self.file_name {
                    Some(name) => name.clone(),
                    None => enrich::binary_name().to_string(),
                };
                Some(FileLogger::open(dir, &name, self.format, self.level)?)
            }
            None => None,
        };
        Ok(self.assemble(file))
    }

    /// Builds around an already opened file sink; cannot fail.
    pub(crate) fn assemble(self, file: Option<FileLogger>) -> Printer {
        let archiver = file.as_ref().map(|file| {
            Archiver::new(
                file.path().to_path_buf(),
                file.format(),
                self.rotation.unwrap_or_else(RotationConfig::global),
            )
        });
        let custom = self.custom.map(|client| {
            let sink = CustomSink::new(client.as_ref(), self.format, self.level);
            (client, sink)
        });
        let stdout = self
            .stdout
            .map(|format| StdoutLogger::new(format, self.level));
        let shared = Arc::new(Shared::new(self.level, custom, file, stdout));

        let rotator = archiver.and_then(|archiver| {
            match Rotator::spawn(shared.clone(), archiver) {
                Ok(rotator) => Some(rotator),
                Err(err) => {
                    shared.report(&format!("failed to start log rotation: {err}"));
                    None
                }
            }
        });
        Printer::from_parts(shared, rotator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_defaults_to_binary() {
        let tmp = tempfile::tempdir().unwrap();
        let printer = PrinterBuilder::new()
            .format(Format::Text)
            .level(Level::Info)
            .file_dir(tmp.path())
            .build()
            .unwrap();
        assert_eq!(
            printer.file_path().unwrap(),
            tmp.path().join(format!("{}.log", enrich::binary_name()))
        );
        assert_eq!(printer.file_format(), Format::Text);
    }

    #[test]
    fn unopenable_directory_fails_build() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();
        let result = PrinterBuilder::new()
            .format(Format::Json)
            .file_dir(blocker.join("logs"))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn no_sinks_is_valid() {
        let printer = PrinterBuilder::new().level(Level::Debug).build().unwrap();
        printer.info("nowhere");
        assert_eq!(printer.file_format(), Format::None);
    }
}
