//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# rotalog

rotalog is a logging library for long-running services that write their own log files.

# The problem

A service that logs to a file needs more than a line format.  The file has to be rotated before it
fills the disk, old generations have to be compressed and eventually deleted, and a line that says
"request failed" is far more useful when it also says how much memory the process held, how long it
had been since the previous line, and which call site produced it.

rotalog does all of this behind one type, the [`Printer`].

# The printer

A printer has a level threshold and up to three kinds of sink:

| Sink   | Destination                                                  | Rotation |
|--------|--------------------------------------------------------------|----------|
| file   | `<dir>/<binary-name>.log`, opened for appending              | yes      |
| stdout | the process's standard output                                | no       |
| custom | four writers supplied by a [`CustomLogger`], one per severity | no       |

Each sink is bound to one [`Format`] (`text`, `json`, `binary` or `none`).

```rust
use rotalog::{Format, Level, Printer};

let dir = tempfile::tempdir().unwrap();
let printer = Printer::new_file(Format::Json, Level::Info, dir.path()).unwrap();
printer.info("service started");
printer.debug("below the threshold, not written");
rotalog::warn!(to: &printer, "queue depth {}", 1200);
printer.close();
```

# Records

Every line carries the same eight fields, as strings:

| Key     | Contents                                                            |
|---------|---------------------------------------------------------------------|
| `level` | `debug`, `info`, `warn` or `error`                                   |
| `mem`   | resident memory of the process, e.g. `512MB`                         |
| `msg`   | the message, trailing whitespace trimmed                             |
| `td`    | seconds since the printer's previous line, e.g. `1.250s`            |
| `trace` | `outer,inner` call sites, each `dir/file.rs:line`                   |
| `eid`   | execution id, fixed for the life of the process                      |
| `bin`   | name of the executable                                               |
| `ts`    | UTC timestamp, millisecond precision                                 |

JSON and binary (CBOR) lines decode back into a [`LogRow`] with [`Format::decode`].  Text lines are
colored by level and meant for terminals only.

# Rotation

A printer with a file sink checks the file's size every [`RotationConfig::interval`].  Once it
reaches [`RotationConfig::size_max`] the file is moved to `<name>.log.1.gz`, older archives move up
one generation, and generations past [`RotationConfig::archives_max`] are deleted.  See
[`rotation`] for the details.

# Failure

Logging never fails from the caller's point of view.  Sink write errors, rotation errors and close
errors are reported on stdout (when the printer has a stdout sink) or stderr, and the call returns.
Only construction, which opens the log file, returns a [`Result`].
*/

mod builder;
mod config;
mod custom_logger;
mod enrich;
mod error;
mod file_logger;
mod format;
pub mod global_printer;
mod inmemory_logger;
mod level;
mod log_record;
mod logger;
mod macros;
mod printer;
pub mod rotation;
mod stdout_logger;
mod sys;

pub use builder::PrinterBuilder;
pub use config::{
    DEFAULT_LOG_ARCHIVES_MAX, DEFAULT_LOG_DIR, DEFAULT_LOG_SIZE_MAX, DEFAULT_ROTATION_INTERVAL,
    FALLBACK_STAGING_LAYOUT, RotationConfig, TIME_LAYOUT,
};
pub use custom_logger::{CustomLogger, CustomSink, SeverityWriter};
pub use enrich::{binary_name, execution_id, format_memory, format_time_delta};
pub use error::{Error, Result};
pub use file_logger::FileLogger;
pub use format::{BinaryFormatter, Format, Formatter, JsonFormatter, TextFormatter};
pub use global_printer::{set_global_printer, set_level};
pub use inmemory_logger::{BufferWriter, InMemoryLogger};
pub use level::Level;
pub use log_record::{LogRecord, LogRow};
pub use logger::Logger;
pub use printer::Printer;
pub use stdout_logger::StdoutLogger;
pub use sys::process_memory_bytes;
