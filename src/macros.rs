// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging macros.
//!
//! Each macro takes `format!`-style arguments.  With a leading `to: printer,` it logs through that
//! printer; otherwise through the [global printer](crate::global_printer).  The arguments are
//! only formatted when the level is enabled.
//!
//! ```rust
//! use rotalog::{Format, InMemoryLogger, Level, Printer};
//! use std::sync::Arc;
//!
//! let capture = Arc::new(InMemoryLogger::new());
//! let printer = Printer::new_custom(Format::Json, Level::Debug, capture.clone());
//! let user = "ada";
//! rotalog::warn!(to: &printer, "login failed for {user}, attempt {}", 3);
//! assert_eq!(
//!     capture.rows(Level::Warn, Format::Json)[0].msg,
//!     "login failed for ada, attempt 3"
//! );
//! ```

/// Logs at [`Level::Debug`](crate::Level::Debug).
#[macro_export]
macro_rules! debug {
    (to: $printer:expr, $($arg:tt)+) => {
        $printer.push_args($crate::Level::Debug, format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global_printer::log($crate::Level::Debug, format_args!($($arg)+))
    };
}

/// Logs at [`Level::Info`](crate::Level::Info).
#[macro_export]
macro_rules! info {
    (to: $printer:expr, $($arg:tt)+) => {
        $printer.push_args($crate::Level::Info, format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global_printer::log($crate::Level::Info, format_args!($($arg)+))
    };
}

/// Logs at [`Level::Warn`](crate::Level::Warn).
#[macro_export]
macro_rules! warn {
    (to: $printer:expr, $($arg:tt)+) => {
        $printer.push_args($crate::Level::Warn, format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global_printer::log($crate::Level::Warn, format_args!($($arg)+))
    };
}

/// Logs at [`Level::Error`](crate::Level::Error).
#[macro_export]
macro_rules! error {
    (to: $printer:expr, $($arg:tt)+) => {
        $printer.push_args($crate::Level::Error, format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global_printer::log($crate::Level::Error, format_args!($($arg)+))
    };
}
