// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diagnostic fields attached to every record.
//!
//! Everything here is best-effort: a value that cannot be determined becomes an empty string
//! rather than failing the log call.

use chrono::Utc;
use std::panic::Location;
use std::path::{Component, Path};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicI64, Ordering};

const KB: u64 = 1024;
const MB: u64 = 1024 * KB;
const GB: u64 = 1024 * MB;

/// Frames inspected when looking for the caller of the logging function.
const MAX_TRACE_FRAMES: usize = 128;

static EXECUTION_ID: OnceLock<String> = OnceLock::new();
static BINARY_NAME: OnceLock<String> = OnceLock::new();

/// Current UTC time in nanoseconds since the epoch.
pub(crate) fn now_nanos() -> i64 {
    Utc::now().timestamp_nanos_opt().unwrap_or_default()
}

/**
Identifier of this process run: the start timestamp in nanoseconds, base 36, upper case.

Fixed the first time it is read.  Building a printer reads it, so the id is never later than
the construction of the first printer.
*/
pub fn execution_id() -> &'static str {
    EXECUTION_ID.get_or_init(|| to_base36_upper(now_nanos().unsigned_abs()))
}

/// File name of the running executable, or empty if unknown.
pub fn binary_name() -> &'static str {
    BINARY_NAME.get_or_init(|| {
        std::env::args_os()
            .next()
            .map(std::path::PathBuf::from)
            .or_else(|| std::env::current_exe().ok())
            .and_then(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
            .unwrap_or_default()
    })
}

fn to_base36_upper(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::with_capacity(13);
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }
    digits.iter().rev().collect()
}

/**
Scales a byte count to the largest unit of which there are at least ten.

```rust
assert_eq!(rotalog::format_memory(10 << 30), "10GB");
assert_eq!(rotalog::format_memory(5 << 20), "5120KB");
assert_eq!(rotalog::format_memory(500), "500B");
```
*/
pub fn format_memory(bytes: u64) -> String {
    match bytes {
        b if b >= 10 * GB => format!("{}GB", b / GB),
        b if b >= 10 * MB => format!("{}MB", b / MB),
        b if b >= 10 * KB => format!("{}KB", b / KB),
        b => format!("{b}B"),
    }
}

/// Renders an elapsed time as `<seconds>.<milliseconds>s`.
pub fn format_time_delta(elapsed_nanos: i64) -> String {
    let elapsed = elapsed_nanos.max(0);
    format!(
        "{}.{:03}s",
        elapsed / 1_000_000_000,
        (elapsed % 1_000_000_000) / 1_000_000
    )
}

/**
Time of the previous record emitted through one printer.

Concurrent callers each swap in their own timestamp atomically, so every delta is computed
against some real previous record, though which one is racy.
*/
#[derive(Debug, Default)]
pub(crate) struct LastLog {
    nanos: AtomicI64,
}

impl LastLog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records `now` and returns the formatted delta since the previous record.
    pub(crate) fn delta(&self, now: i64) -> String {
        let previous = self.nanos.swap(now, Ordering::AcqRel);
        if previous > 0 {
            format_time_delta(now - previous)
        } else {
            format_time_delta(0)
        }
    }
}

/// `dir/file.rs:line`, from the last two components of `path`.
fn format_site(path: &Path, line: u32) -> String {
    let mut tail: Vec<_> = path
        .components()
        .rev()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .take(2)
        .collect();
    if tail.is_empty() {
        return String::new();
    }
    tail.reverse();
    format!("{}:{line}", tail.join("/"))
}

/**
`outer,inner` call sites of a logging call.

`inner` is where the log call was written.  `outer` is the frame that called the function
containing it, found by walking the stack; it is empty when debug info is unavailable.
*/
pub(crate) fn call_trace(inner: &Location<'_>) -> String {
    let inner_site = format_site(Path::new(inner.file()), inner.line());
    let outer_site = outer_site(inner).unwrap_or_default();
    format!("{outer_site},{inner_site}")
}

fn outer_site(inner: &Location<'_>) -> Option<String> {
    let mut sites: Vec<(std::path::PathBuf, u32)> = Vec::new();
    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if let (Some(path), Some(line)) = (symbol.filename(), symbol.lineno()) {
                sites.push((path.to_path_buf(), line));
            }
        });
        sites.len() < MAX_TRACE_FRAMES
    });

    let inner_file = Path::new(inner.file());
    let own_sources = Path::new(env!("CARGO_MANIFEST_DIR"));
    // Multi-line calls may resolve to a neighbouring line; fall back to the file alone,
    // skipping this crate's own frames.
    let position = sites
        .iter()
        .position(|(path, line)| *line == inner.line() && path.ends_with(inner_file))
        .or_else(|| {
            sites
                .iter()
                .position(|(path, _)| !path.starts_with(own_sources) && path.ends_with(inner_file))
        })?;
    sites
        .get(position + 1)
        .map(|(path, line)| format_site(path, *line))
}
