// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::error::Result;
use crate::format::Format;
use crate::log_record::LogRecord;
use crate::logger::{Logger, Threshold};
use crate::Level;
use std::io::Write;

/**
A logger that writes to stdout.

Each record is written while holding the stdout lock, so lines from concurrent threads do not interleave.
 */
#[derive(Debug)]
pub struct StdoutLogger {
    format: Format,
    threshold: Threshold,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: derived
// - Clone/Copy: NOT implemented - the threshold is shared state that set_level mutates
// - PartialEq/Eq/Hash: NOT implemented - all instances share one process stdout
// - Default: NOT implemented - a format must be chosen
// - Send/Sync: automatic

impl StdoutLogger {
    pub fn new(format: Format, level: Level) -> Self {
        Self {
            format,
            threshold: Threshold::new(level),
        }
    }

    pub fn format(&self) -> Format {
        self.format
    }
}

impl Logger for StdoutLogger {
    fn finish_log_record(&self, record: &LogRecord) -> Result<()> {
        if !self.threshold.allows(record.level()) {
            return Ok(());
        }
        let bytes = self.format.encode(record)?;
        if bytes.is_empty() {
            return Ok(());
        }
        let mut lock = std::io::stdout().lock();
        lock.write_all(&bytes)?;
        Ok(())
    }

    fn level(&self) -> Level {
        self.threshold.get()
    }

    fn set_level(&self, level: Level) {
        self.threshold.set(level);
    }

    fn prepare_to_die(&self) -> Result<()> {
        std::io::stdout().lock().flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtered_records_are_not_encoded() {
        let logger = StdoutLogger::new(Format::Json, Level::Warn);
        // an Info record would be written to the test's stdout; just exercise the gate
        assert!(logger.finish_log_record(&LogRecord::new(Level::Info, "hidden")).is_ok());
        logger.set_level(Level::None);
        assert_eq!(logger.level(), Level::None);
        assert!(logger.finish_log_record(&LogRecord::new(Level::Error, "hidden")).is_ok());
    }
}
