// SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt::Display;
use std::str::FromStr;

/// Severity threshold of a printer or sink, and the severity of a record.
///
/// Variants are ordered by verbosity: a record at level `L` passes a threshold `T` iff `L <= T`.
/// `None` as a threshold suppresses everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    #[default]
    None = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
}

impl Level {
    /**
    Resolves a level name, ignoring case.

    `"warning"` is accepted for [Level::Warn].  Anything unrecognized resolves to [Level::None],
    which turns logging off.
    */
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "error" => Level::Error,
            "warn" | "warning" => Level::Warn,
            "info" => Level::Info,
            "debug" => Level::Debug,
            _ => Level::None,
        }
    }

    /// Whether a record at `record` level passes this threshold.
    #[inline]
    pub fn allows(self, record: Level) -> bool {
        record != Level::None && record <= self
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::None => "none",
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            1 => Level::Error,
            2 => Level::Warn,
            3 => Level::Info,
            4 => Level::Debug,
            _ => Level::None,
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Level::from_name(s))
    }
}

/*
Boilerplate notes.

Copy: a one-byte enum.
Ord: verbosity ordering is the whole point.
Default: None, so an unconfigured threshold logs nothing.
FromStr is infallible since unknown names are meaningful (they disable logging).
*/

#[cfg(test)]
mod tests {
    use super::Level;

    #[test]
    fn names_resolve_case_insensitively() {
        assert_eq!(Level::from_name("DEBUG"), Level::Debug);
        assert_eq!(Level::from_name("Info"), Level::Info);
        assert_eq!(Level::from_name("warn"), Level::Warn);
        assert_eq!(Level::from_name("Warning"), Level::Warn);
        assert_eq!(Level::from_name("error"), Level::Error);
        assert_eq!(Level::from_name("verbose"), Level::None);
        assert_eq!("".parse::<Level>().unwrap(), Level::None);
    }

    #[test]
    fn threshold_gates_more_verbose_records() {
        assert!(Level::Info.allows(Level::Error));
        assert!(Level::Info.allows(Level::Info));
        assert!(!Level::Info.allows(Level::Debug));
        assert!(!Level::None.allows(Level::Error));
        assert!(!Level::Debug.allows(Level::None));
    }
}
