// SPDX-License-Identifier: MIT OR Apache-2.0

//! The active log file.
//!
//! A [`FileLogger`] owns one append-mode handle. Writes go through `&File`, so any number of
//! threads can log through a shared reference; each record is a single `write_all` of a whole line.
//! Rotation replaces the logger wholesale (see [`crate::rotation`]).

use crate::error::{Error, Result};
use crate::format::Format;
use crate::log_record::LogRecord;
use crate::logger::{Logger, Threshold};
use crate::Level;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct FileLogger {
    path: PathBuf,
    file: File,
    format: Format,
    threshold: Threshold,
}

impl FileLogger {
    /**
    Opens `<dir>/<name>.log` for appending, creating `dir` first if needed.
    */
    pub fn open(dir: &Path, name: &str, format: Format, level: Level) -> Result<Self> {
        fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
        Self::open_path(dir.join(format!("{name}.log")), format, level)
    }

    /// Opens `path` for appending; its directory must exist.
    pub fn open_path(path: PathBuf, format: Format, level: Level) -> Result<Self> {
        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }
        let file = match options.open(&path) {
            Ok(file) => file,
            Err(source) => return Err(Error::OpenFile { path, source }),
        };
        Ok(Self {
            path,
            file,
            format,
            threshold: Threshold::new(level),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Current size of the file on disk.
    pub fn size(&self) -> io::Result<u64> {
        Ok(self.file.metadata()?.len())
    }

    /**
    Flushes the file to disk and releases the handle.

    Dropping a `File` cannot report failure, so this is the place close errors surface.
    */
    pub fn close(self) -> io::Result<()> {
        self.file.sync_all()
    }
}

impl Logger for FileLogger {
    fn finish_log_record(&self, record: &LogRecord) -> Result<()> {
        if !self.threshold.allows(record.level()) {
            return Ok(());
        }
        let bytes = self.format.encode(record)?;
        if bytes.is_empty() {
            return Ok(());
        }
        (&self.file).write_all(&bytes)?;
        Ok(())
    }

    fn level(&self) -> Level {
        self.threshold.get()
    }

    fn set_level(&self, level: Level) {
        self.threshold.set(level);
    }

    fn prepare_to_die(&self) -> Result<()> {
        (&self.file).flush()?;
        Ok(())
    }
}
