// SPDX-License-Identifier: MIT OR Apache-2.0

//! The optional process-wide printer.
//!
//! Applications should build a [`Printer`] in `main` and pass it where it is needed.  For code
//! that cannot easily be handed one, a single printer can be installed here; the [`crate::debug!`],
//! [`crate::info!`], [`crate::warn!`] and [`crate::error!`] macros without a `to:` argument log
//! through it, and log nowhere while none is installed.
//!
//! ```
//! use rotalog::global_printer::{set_global_printer, take_global_printer};
//! use rotalog::{Format, InMemoryLogger, Level, Printer};
//! use std::sync::Arc;
//!
//! let capture = Arc::new(InMemoryLogger::new());
//! set_global_printer(Arc::new(Printer::new_custom(Format::Json, Level::Info, capture.clone())));
//! rotalog::info!("cache warmed: {} entries", 128);
//! assert!(capture.drain_logs(Level::Info).contains("cache warmed: 128 entries"));
//! take_global_printer();
//! ```
//!
//! # Reconfiguration
//!
//! Replacing the printer while other threads log through it is safe: log calls that already
//! hold the old printer finish on it, and it is closed when the last of them drops it.
//! [`set_level`] affects whichever printer is installed at the time of the call.

use crate::printer::Printer;
use crate::Level;
use parking_lot::{RwLock, const_rwlock};
use std::fmt::Arguments;
use std::sync::Arc;

static GLOBAL_PRINTER: RwLock<Option<Arc<Printer>>> = const_rwlock(None);

/// The installed printer, if any.
pub fn global_printer() -> Option<Arc<Printer>> {
    GLOBAL_PRINTER.read().clone()
}

/// Installs `printer`, returning the one it replaces.
pub fn set_global_printer(printer: Arc<Printer>) -> Option<Arc<Printer>> {
    GLOBAL_PRINTER.write().replace(printer)
}

/// Uninstalls and returns the current printer.
pub fn take_global_printer() -> Option<Arc<Printer>> {
    GLOBAL_PRINTER.write().take()
}

/**
Sets the installed printer's level from a name such as `"debug"` or `"WARNING"`.

Unknown names turn logging off, see [Level::from_name].  Does nothing when no printer is
installed.
*/
pub fn set_level(name: &str) {
    if let Some(printer) = global_printer() {
        printer.set_level(Level::from_name(name));
    }
}

/// Implementation of the global forms of the logging macros.
#[doc(hidden)]
#[track_caller]
pub fn log(level: Level, args: Arguments<'_>) {
    if let Some(printer) = global_printer() {
        printer.push_args(level, args);
    }
}
