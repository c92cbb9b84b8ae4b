// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire formats.
//!
//! Three stateless encoders turn a [`LogRecord`] into one terminated line of bytes:
//!
//! | Format   | Encoder             | Shape                                                 |
//! |----------|---------------------|-------------------------------------------------------|
//! | `text`   | [`TextFormatter`]   | ANSI-colored columns, for terminals only              |
//! | `json`   | [`JsonFormatter`]   | one object per line, keys `level mem msg td trace eid bin ts` |
//! | `binary` | [`BinaryFormatter`] | one CBOR map per line, same keys                      |
//!
//! JSON and binary lines can be read back with [`Format::decode`] / [`Format::decode_all`]; text
//! is lossy.

use crate::error::{Error, Result};
use crate::log_record::{LogRecord, LogRow};
use crate::Level;
use std::fmt::{Debug, Display, Write as _};
use std::io::Cursor;
use std::str::FromStr;

/// Encoding selected for a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// Sinks with this format accept records and write nothing.
    ///
    /// Older releases fell back to the text layout for this value; a sink that should print text
    /// must now ask for [Format::Text].
    #[default]
    None,
    Text,
    Json,
    Binary,
}

impl Format {
    /**
    Resolves a format name, ignoring case.  `cbor` is accepted for [Format::Binary]; unknown names
    resolve to [Format::None].
    */
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "text" => Format::Text,
            "json" => Format::Json,
            "binary" | "cbor" => Format::Binary,
            _ => Format::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Format::None => "none",
            Format::Text => "text",
            Format::Json => "json",
            Format::Binary => "binary",
        }
    }

    /// Encodes `record` as one terminated line.  [Format::None] yields no bytes.
    pub fn encode(self, record: &LogRecord) -> Result<Vec<u8>> {
        match self {
            Format::None => Ok(Vec::new()),
            Format::Text => TextFormatter.format(record),
            Format::Json => JsonFormatter.format(record),
            Format::Binary => BinaryFormatter.format(record),
        }
    }

    /// Decodes the first record in `bytes`.
    pub fn decode(self, bytes: &[u8]) -> Result<LogRow> {
        match self {
            Format::Json => {
                let line = bytes.split(|b| *b == b'\n').next().unwrap_or_default();
                Ok(serde_json::from_slice(line)?)
            }
            Format::Binary => ciborium::from_reader(bytes).map_err(|e| Error::Cbor(format!("{e:?}"))),
            other => Err(Error::Unsupported(other)),
        }
    }

    /// Decodes every record in a buffer produced by this format, e.g. a whole log file.
    pub fn decode_all(self, bytes: &[u8]) -> Result<Vec<LogRow>> {
        match self {
            Format::Json => bytes
                .split(|b| *b == b'\n')
                .filter(|line| !line.is_empty())
                .map(|line| serde_json::from_slice(line).map_err(Error::from))
                .collect(),
            Format::Binary => {
                let mut rows = Vec::new();
                let mut cursor = Cursor::new(bytes);
                while (cursor.position() as usize) < bytes.len() {
                    let row: LogRow = ciborium::from_reader(&mut cursor)
                        .map_err(|e| Error::Cbor(format!("{e:?}")))?;
                    rows.push(row);
                    // each map is followed by a line terminator
                    let pos = cursor.position() as usize;
                    if bytes.get(pos) == Some(&b'\n') {
                        cursor.set_position(pos as u64 + 1);
                    }
                }
                Ok(rows)
            }
            other => Err(Error::Unsupported(other)),
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Format::from_name(s))
    }
}

/// A stateless encoder from record to bytes.
pub trait Formatter: Debug + Send + Sync {
    /// The returned bytes end with a line terminator.
    fn format(&self, record: &LogRecord) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, record: &LogRecord) -> Result<Vec<u8>> {
        let row = LogRow::from(record);
        let mut bytes = serde_json::to_vec(&row)?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryFormatter;

impl Formatter for BinaryFormatter {
    fn format(&self, record: &LogRecord) -> Result<Vec<u8>> {
        let row = LogRow::from(record);
        let mut bytes = Vec::with_capacity(128);
        ciborium::into_writer(&row, &mut bytes).map_err(|e| Error::Cbor(format!("{e:?}")))?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

pub(crate) const COLOR_NONE: &str = "\x1b[0m";
const COLOR_NONE_BOLD: &str = "\x1b[1m";
const COLOR_RED_BOLD: &str = "\x1b[1;31m";
const COLOR_YELLOW_BOLD: &str = "\x1b[1;33m";
const COLOR_CYAN: &str = "\x1b[0;36m";
const COLOR_CYAN_BOLD: &str = "\x1b[1;36m";

/// Colors of one text line: the columns, and the message inside the quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Palette {
    line: &'static str,
    message: &'static str,
}

fn palette(level: Level) -> Palette {
    match level {
        Level::Error => Palette {
            line: COLOR_RED_BOLD,
            message: COLOR_RED_BOLD,
        },
        Level::Warn => Palette {
            line: COLOR_YELLOW_BOLD,
            message: COLOR_YELLOW_BOLD,
        },
        Level::Debug => Palette {
            line: COLOR_CYAN,
            message: COLOR_CYAN_BOLD,
        },
        Level::Info | Level::None => Palette {
            line: COLOR_NONE,
            message: COLOR_NONE_BOLD,
        },
    }
}

/**
Human-oriented colored line.

Column order and padding match logs already on disk:

```text
info  mem=12MB  msg="started"  td=0.000s  trace=[src/main.rs:9,src/run.rs:30]  eid=LX2Q1  bin=app  2024-01-02T03:04:05.678
```
*/
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format(&self, record: &LogRecord) -> Result<Vec<u8>> {
        let row = LogRow::from(record);
        let colors = palette(record.level);
        let mut line = String::with_capacity(row.msg.len() + 160);
        // writing into a String cannot fail
        let _ = writeln!(
            line,
            "{line_color}{:<5} mem={:<5} msg=\"{msg_color}{}{line_color}\"  td={}  trace=[{}]  eid={}  bin={}  {}{COLOR_NONE}",
            row.level,
            row.mem,
            row.msg,
            row.td,
            row.trace,
            row.eid,
            row.bin,
            row.ts,
            line_color = colors.line,
            msg_color = colors.message,
        );
        Ok(line.into_bytes())
    }
}
