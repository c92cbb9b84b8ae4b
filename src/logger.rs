//SPDX-License-Identifier: MIT OR Apache-2.0
use crate::Level;
use crate::error::Result;
use crate::log_record::LogRecord;
use std::fmt::Debug;
use std::sync::atomic::{AtomicU8, Ordering};

/**
A destination for encoded records.

Each logger is bound to one [crate::Format] and one severity threshold when it is built.
*/
pub trait Logger: Debug + Send + Sync {
    /**
        Encodes and writes the record, if its level passes this logger's threshold.

        Failures are returned so the printer can report them; they never reach the code that logged.
    */
    fn finish_log_record(&self, record: &LogRecord) -> Result<()>;

    /// Current threshold.
    fn level(&self) -> Level;

    /// Replaces the threshold.
    fn set_level(&self, level: Level);

    /**
    The printer is closing or the application may imminently exit.  Ensure all buffers are flushed.
    */
    fn prepare_to_die(&self) -> Result<()>;
}

/// A threshold that can be changed while other threads log.
#[derive(Debug)]
pub(crate) struct Threshold(AtomicU8);

impl Threshold {
    pub(crate) fn new(level: Level) -> Self {
        Self(AtomicU8::new(level as u8))
    }

    pub(crate) fn get(&self) -> Level {
        Level::from_u8(self.0.load(Ordering::Relaxed))
    }

    pub(crate) fn set(&self, level: Level) {
        self.0.store(level as u8, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn allows(&self, record: Level) -> bool {
        self.get().allows(record)
    }
}

/*
Boilerplate notes.

# Logger

Clone makes no sense for something owning a file handle or writer.
PartialEq/Eq/Hash: unclear whether we would mean the destination or the handle, so none.
Default is not sensible, a logger needs a destination.
Send/Sync are required: one printer is shared by every logging thread.
*/
