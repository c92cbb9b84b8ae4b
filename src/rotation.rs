// SPDX-License-Identifier: MIT OR Apache-2.0

//! Size-triggered rotation of the active log file.
//!
//! For an active file `P` the archives form an aging chain `P.1.gz` (newest) .. `P.N.gz` (oldest),
//! `N` being [`RotationConfig::archives_max`]. A rotation:
//!
//! 1. shifts every `P.k.gz` to `P.(k+1).gz`, highest first, deleting generations at or past `N`;
//! 2. under the printer's write lock, closes the active file, renames it to the staging name `P.1`
//!    and reopens a fresh `P`;
//! 3. outside the lock, compresses `P.1` to `P.1.gz` and deletes `P.1`.
//!
//! If step 1 fails the file is staged under a timestamped name instead and stays out of the chain.
//! A staging file left behind by an earlier failed compression is compressed on the next cycle
//! before the active file is touched again.
//!
//! A [`Rotator`] runs these checks on its own thread every [`RotationConfig::interval`].

use crate::config::{FALLBACK_STAGING_LAYOUT, RotationConfig};
use crate::file_logger::FileLogger;
use crate::format::Format;
use crate::printer::Shared;
use crate::Level;
use chrono::{NaiveDateTime, Utc};
use flate2::Compression;
use flate2::write::GzEncoder;
use parking_lot::RwLock;
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::{self, JoinHandle};

const GZ_EXTENSION: &str = "gz";

/// A numbered sibling of the active file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation {
    pub number: u32,
    pub compressed: bool,
}

/**
Parses a directory entry name as a generation of `base`.

`name` matches iff it is `base`, a `.`, an integer and optionally `.gz`.

```rust
use rotalog::rotation::{parse_generation, Generation};

assert_eq!(parse_generation("app.log", "app.log.3.gz"), Some(Generation { number: 3, compressed: true }));
assert_eq!(parse_generation("app.log", "app.log.1"), Some(Generation { number: 1, compressed: false }));
assert_eq!(parse_generation("app.log", "app.log.2024-01-02.10-30"), None);
```
*/
pub fn parse_generation(base: &str, name: &str) -> Option<Generation> {
    let rest = name.strip_prefix(base)?.strip_prefix('.')?;
    let (digits, compressed) = match rest.strip_suffix(".gz") {
        Some(digits) => (digits, true),
        None => (rest, false),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(Generation {
        number: digits.parse().ok()?,
        compressed,
    })
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

/// `P.<number>.gz`
pub fn archive_path(path: &Path, number: u32) -> PathBuf {
    with_suffix(path, &format!("{number}.{GZ_EXTENSION}"))
}

fn staging_path(path: &Path) -> PathBuf {
    with_suffix(path, "1")
}

/// `P.<minute stamp>`, with `-<n>` appended until neither it nor its archive exists.
fn fallback_staging_path(path: &Path) -> PathBuf {
    let stamp = Utc::now().format(FALLBACK_STAGING_LAYOUT).to_string();
    let mut candidate = with_suffix(path, &stamp);
    let mut n = 1u32;
    while candidate.exists() || with_suffix(&candidate, GZ_EXTENSION).exists() {
        candidate = with_suffix(path, &format!("{stamp}-{n}"));
        n += 1;
    }
    candidate
}

fn is_fallback_stamp(stamp: &str) -> bool {
    NaiveDateTime::parse_from_str(stamp, FALLBACK_STAGING_LAYOUT).is_ok()
}

/**
Whether `name` is an uncompressed fallback staging file of `base`: `base.<stamp>` or
`base.<stamp>-<n>`, the stamp in [FALLBACK_STAGING_LAYOUT].

```rust
use rotalog::rotation::is_fallback_staging;

assert!(is_fallback_staging("app.log", "app.log.2024-01-02.10-30"));
assert!(is_fallback_staging("app.log", "app.log.2024-01-02.10-30-2"));
assert!(!is_fallback_staging("app.log", "app.log.2024-01-02.10-30.gz"));
assert!(!is_fallback_staging("app.log", "app.log.1"));
```
*/
pub fn is_fallback_staging(base: &str, name: &str) -> bool {
    let Some(rest) = name.strip_prefix(base).and_then(|rest| rest.strip_prefix('.')) else {
        return false;
    };
    match rest.rsplit_once('-') {
        Some((stamp, n))
            if !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()) && is_fallback_stamp(stamp) =>
        {
            true
        }
        _ => is_fallback_stamp(rest),
    }
}

fn dir_and_base(path: &Path) -> io::Result<(&Path, String)> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let base = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "log path has no file name"))?;
    Ok((dir, base))
}

/**
Uncompressed staging files left behind by earlier cycles: `P.1` first, then fallback-named ones
in name order.
*/
pub fn leftover_staging(path: &Path) -> io::Result<Vec<PathBuf>> {
    let (dir, base) = dir_and_base(path)?;
    let mut fallbacks = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if is_fallback_staging(&base, &entry.file_name().to_string_lossy()) {
            fallbacks.push(entry.path());
        }
    }
    fallbacks.sort();

    let mut leftovers = Vec::with_capacity(fallbacks.len() + 1);
    let staging = staging_path(path);
    if staging.exists() {
        leftovers.push(staging);
    }
    leftovers.extend(fallbacks);
    Ok(leftovers)
}

/// Compressed generations of `path` currently on disk, newest first.
pub fn list_archives(path: &Path) -> io::Result<Vec<u32>> {
    let (dir, base) = dir_and_base(path)?;
    let mut numbers = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if let Some(generation) = parse_generation(&base, &name.to_string_lossy()) {
            if generation.compressed {
                numbers.push(generation.number);
            }
        }
    }
    numbers.sort_unstable();
    Ok(numbers)
}

/**
Moves every `P.k.gz` up to `P.(k+1).gz`, making room for a new `P.1.gz`.

Generations are processed from the highest down so no rename overwrites a live archive. Anything
at or beyond `archives_max` is deleted instead of shifted.
*/
pub fn shift_archives(path: &Path, archives_max: usize) -> io::Result<()> {
    for number in list_archives(path)?.into_iter().rev() {
        let current = archive_path(path, number);
        if number as usize >= archives_max {
            fs::remove_file(&current)?;
        } else {
            fs::rename(&current, archive_path(path, number + 1))?;
        }
    }
    Ok(())
}

/**
Writes `<path>.gz` with the gzip-compressed contents of `path` and the same permissions.

Fails with [io::ErrorKind::AlreadyExists] rather than overwrite an existing archive.  The
uncompressed file is left in place; a partial archive is removed on failure.
*/
pub fn gzip_file(path: &Path) -> io::Result<PathBuf> {
    let target = with_suffix(path, GZ_EXTENSION);
    let mut source = File::open(path)?;
    let permissions = source.metadata()?.permissions();
    let archive = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&target)?;
    let written = (|| {
        let mut encoder = GzEncoder::new(archive, Compression::default());
        io::copy(&mut source, &mut encoder)?;
        encoder.finish()?.sync_all()?;
        fs::set_permissions(&target, permissions)
    })();
    if let Err(err) = written {
        let _ = fs::remove_file(&target);
        return Err(err);
    }
    Ok(target)
}

fn compress_staging(staging: &Path) -> io::Result<PathBuf> {
    let archive = gzip_file(staging)?;
    fs::remove_file(staging)?;
    Ok(archive)
}

/// What one rotation check did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rotation {
    /// Below the size threshold.
    Skipped,
    /// Leftover staging files were compressed into these archives; the active file is left for
    /// the next cycle.
    Recovered(Vec<PathBuf>),
    /// The active file was rotated into this archive.
    Rotated(PathBuf),
    /// The active file had been lost by an earlier failure and was reopened.
    Reopened,
}

/// Rotation of one active file.
#[derive(Debug, Clone)]
pub struct Archiver {
    path: PathBuf,
    format: Format,
    config: RotationConfig,
}

impl Archiver {
    pub fn new(path: PathBuf, format: Format, config: RotationConfig) -> Self {
        Self {
            path,
            format,
            config,
        }
    }

    pub fn config(&self) -> &RotationConfig {
        &self.config
    }

    /**
    Checks the active file held in `slot` and rotates it if it reached the size threshold.

    Staging files left by an earlier failed cycle are compressed first, and then nothing else
    happens in that cycle.  A leftover `P.1` goes straight into the `P.1.gz` slot its own cycle
    already freed; the chain is only shifted again if that slot is somehow occupied.

    `level` is the threshold given to the reopened file.  Non-fatal problems (a failed shift that
    forces the fallback staging name, a failed close) are passed to `report`; errors that abandon
    the cycle are returned.
    */
    pub fn rotate(
        &self,
        slot: &RwLock<Option<FileLogger>>,
        level: Level,
        report: &dyn Fn(String),
    ) -> io::Result<Rotation> {
        let size = slot.read().as_ref().map(FileLogger::size).transpose()?;
        let Some(size) = size else {
            *slot.write() = Some(self.reopen(level)?);
            return Ok(Rotation::Reopened);
        };

        let leftovers = leftover_staging(&self.path)?;
        if !leftovers.is_empty() {
            let numbered = staging_path(&self.path);
            let mut archives = Vec::with_capacity(leftovers.len());
            for staging in leftovers {
                if staging == numbered && archive_path(&self.path, 1).exists() {
                    shift_archives(&self.path, self.config.archives_max)?;
                }
                archives.push(compress_staging(&staging)?);
            }
            return Ok(Rotation::Recovered(archives));
        }

        if size < self.config.size_max {
            return Ok(Rotation::Skipped);
        }

        let staging = match shift_archives(&self.path, self.config.archives_max) {
            Ok(()) => staging_path(&self.path),
            Err(err) => {
                let staging = fallback_staging_path(&self.path);
                report(format!(
                    "failed to shift archives of {}: {err}; staging to {}",
                    self.path.display(),
                    staging.display()
                ));
                staging
            }
        };

        let renamed = {
            let mut guard = slot.write();
            if let Some(old) = guard.take() {
                if let Err(err) = old.close() {
                    report(format!("failed to close file: {err}"));
                }
            }
            let renamed = fs::rename(&self.path, &staging);
            *guard = Some(self.reopen(level)?);
            renamed
        };
        renamed?;
        compress_staging(&staging).map(Rotation::Rotated)
    }

    fn reopen(&self, level: Level) -> io::Result<FileLogger> {
        FileLogger::open_path(self.path.clone(), self.format, level).map_err(io::Error::other)
    }
}

/**
Background thread running an [Archiver] every interval until stopped.

Stopping wakes the thread immediately and joins it, so no rotation work outlives the printer.
*/
#[derive(Debug)]
pub(crate) struct Rotator {
    stop: mpsc::Sender<()>,
    handle: JoinHandle<()>,
}

impl Rotator {
    pub(crate) fn spawn(shared: Arc<Shared>, archiver: Archiver) -> io::Result<Self> {
        let (stop, stopped) = mpsc::channel();
        let handle = thread::Builder::new()
            .name("rotalog-rotation".to_string())
            .spawn(move || rotation_loop(shared, archiver, stopped))?;
        Ok(Self { stop, handle })
    }

    pub(crate) fn stop(self) {
        // The receiver only disappears if the thread already exited.
        let _ = self.stop.send(());
        let _ = self.handle.join();
    }
}

fn rotation_loop(shared: Arc<Shared>, archiver: Archiver, stopped: mpsc::Receiver<()>) {
    loop {
        match stopped.recv_timeout(archiver.config().interval) {
            Err(RecvTimeoutError::Timeout) => {
                let report = |message: String| shared.report(&message);
                if let Err(err) = archiver.rotate(shared.file_slot(), shared.level(), &report) {
                    shared.report(&format!("log rotation failed: {err}"));
                }
            }
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::cell::RefCell;
    use std::io::{Read, Write};
    use std::time::Duration;

    fn gunzip(path: &Path) -> Vec<u8> {
        let mut out = Vec::new();
        GzDecoder::new(File::open(path).unwrap())
            .read_to_end(&mut out)
            .unwrap();
        out
    }

    fn write_gz(target: &Path, contents: &[u8]) {
        let mut encoder = GzEncoder::new(File::create(target).unwrap(), Compression::default());
        encoder.write_all(contents).unwrap();
        encoder.finish().unwrap();
    }

    fn config(size_max: u64, archives_max: usize) -> RotationConfig {
        RotationConfig {
            size_max,
            archives_max,
            interval: Duration::from_millis(10),
        }
    }

    fn no_report(message: String) {
        panic!("unexpected report: {message}");
    }

    #[test]
    fn parse_rejects_other_names() {
        assert_eq!(parse_generation("app.log", "app.log"), None);
        assert_eq!(parse_generation("app.log", "app.log."), None);
        assert_eq!(parse_generation("app.log", "app.log.gz"), None);
        assert_eq!(parse_generation("app.log", "app.log.x.gz"), None);
        assert_eq!(parse_generation("app.log", "other.log.1.gz"), None);
        assert_eq!(parse_generation("app.log", "app.log.+1"), None);
        assert_eq!(
            parse_generation("app.log", "app.log.12.gz"),
            Some(Generation { number: 12, compressed: true })
        );
    }

    #[test]
    fn shift_orders_numerically_and_evicts() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("app.log");
        for n in [1u32, 2, 9, 10] {
            fs::write(archive_path(&path, n), format!("gen{n}")).unwrap();
        }
        fs::write(tmp.path().join("app.log.notes"), b"ignored").unwrap();

        shift_archives(&path, 10).unwrap();

        assert_eq!(list_archives(&path).unwrap(), vec![2, 3, 10]);
        assert_eq!(fs::read(archive_path(&path, 2)).unwrap(), b"gen1");
        assert_eq!(fs::read(archive_path(&path, 3)).unwrap(), b"gen2");
        assert_eq!(fs::read(archive_path(&path, 10)).unwrap(), b"gen9");
        assert!(tmp.path().join("app.log.notes").exists());
    }

    #[test]
    fn gzip_roundtrips_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("app.log.1");
        let contents: Vec<u8> = (0..50_000u32).flat_map(|i| i.to_le_bytes()).collect();
        fs::write(&path, &contents).unwrap();
        let archive = gzip_file(&path).unwrap();
        assert_eq!(archive, tmp.path().join("app.log.1.gz"));
        assert_eq!(gunzip(&archive), contents);
        assert!(path.exists());
    }

    #[test]
    fn rotate_at_threshold() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("app.log");
        fs::write(&path, b"0123456789").unwrap();
        let slot = RwLock::new(Some(
            FileLogger::open_path(path.clone(), Format::Json, Level::Debug).unwrap(),
        ));
        let archiver = Archiver::new(path.clone(), Format::Json, config(10, 9));

        let outcome = archiver.rotate(&slot, Level::Debug, &no_report).unwrap();

        assert_eq!(outcome, Rotation::Rotated(archive_path(&path, 1)));
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
        assert_eq!(gunzip(&archive_path(&path, 1)), b"0123456789");
        assert!(!tmp.path().join("app.log.1").exists());
        assert_eq!(list_archives(&path).unwrap(), vec![1]);
        assert_eq!(slot.read().as_ref().unwrap().path(), path);
    }

    #[test]
    fn rotate_below_threshold_is_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("app.log");
        fs::write(&path, b"012345678").unwrap();
        let slot = RwLock::new(Some(
            FileLogger::open_path(path.clone(), Format::Json, Level::Debug).unwrap(),
        ));
        let archiver = Archiver::new(path.clone(), Format::Json, config(10, 9));
        assert_eq!(archiver.rotate(&slot, Level::Debug, &no_report).unwrap(), Rotation::Skipped);
        assert_eq!(fs::read(&path).unwrap(), b"012345678");
    }

    #[test]
    fn rotate_evicts_oldest() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("app.log");
        let archiver = Archiver::new(path.clone(), Format::Json, config(1, 2));
        let slot = RwLock::new(Some(
            FileLogger::open_path(path.clone(), Format::Json, Level::Debug).unwrap(),
        ));

        for contents in ["first", "second", "third"] {
            fs::write(&path, contents).unwrap();
            archiver.rotate(&slot, Level::Debug, &no_report).unwrap();
        }

        assert_eq!(list_archives(&path).unwrap(), vec![1, 2]);
        assert_eq!(gunzip(&archive_path(&path, 1)), b"third");
        assert_eq!(gunzip(&archive_path(&path, 2)), b"second");
    }

    #[test]
    fn leftover_staging_is_recovered_first() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("app.log");
        fs::write(&path, b"active").unwrap();
        fs::write(tmp.path().join("app.log.1"), b"stranded").unwrap();
        let slot = RwLock::new(Some(
            FileLogger::open_path(path.clone(), Format::Json, Level::Debug).unwrap(),
        ));
        let archiver = Archiver::new(path.clone(), Format::Json, config(1, 9));

        let outcome = archiver.rotate(&slot, Level::Debug, &no_report).unwrap();
        assert_eq!(outcome, Rotation::Recovered(vec![archive_path(&path, 1)]));
        assert_eq!(gunzip(&archive_path(&path, 1)), b"stranded");
        assert_eq!(fs::read(&path).unwrap(), b"active");

        let outcome = archiver.rotate(&slot, Level::Debug, &no_report).unwrap();
        assert_eq!(outcome, Rotation::Rotated(archive_path(&path, 1)));
        assert_eq!(gunzip(&archive_path(&path, 1)), b"active");
        assert_eq!(gunzip(&archive_path(&path, 2)), b"stranded");
    }

    #[test]
    fn leftover_staging_keeps_the_chain_contiguous() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("app.log");
        fs::write(&path, b"active").unwrap();
        fs::write(tmp.path().join("app.log.1"), b"stranded").unwrap();
        write_gz(&archive_path(&path, 2), b"older");
        let slot = RwLock::new(Some(
            FileLogger::open_path(path.clone(), Format::Json, Level::Debug).unwrap(),
        ));
        let archiver = Archiver::new(path.clone(), Format::Json, config(1, 9));

        let outcome = archiver.rotate(&slot, Level::Debug, &no_report).unwrap();
        assert_eq!(outcome, Rotation::Recovered(vec![archive_path(&path, 1)]));
        assert_eq!(list_archives(&path).unwrap(), vec![1, 2]);
        assert_eq!(gunzip(&archive_path(&path, 1)), b"stranded");
        assert_eq!(gunzip(&archive_path(&path, 2)), b"older");

        archiver.rotate(&slot, Level::Debug, &no_report).unwrap();
        assert_eq!(list_archives(&path).unwrap(), vec![1, 2, 3]);
        assert_eq!(gunzip(&archive_path(&path, 1)), b"active");
        assert_eq!(gunzip(&archive_path(&path, 2)), b"stranded");
        assert_eq!(gunzip(&archive_path(&path, 3)), b"older");
    }

    #[test]
    fn failed_shift_stages_outside_the_chain() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("app.log");
        // a non-empty directory where the oldest generation should be cannot be evicted
        let blocker = archive_path(&path, 2);
        fs::create_dir(&blocker).unwrap();
        fs::write(blocker.join("keep"), b"").unwrap();
        let slot = RwLock::new(Some(
            FileLogger::open_path(path.clone(), Format::Json, Level::Debug).unwrap(),
        ));
        let archiver = Archiver::new(path.clone(), Format::Json, config(1, 2));
        let reports = RefCell::new(Vec::new());
        let report = |message: String| reports.borrow_mut().push(message);

        let mut archives = Vec::new();
        for contents in ["first", "second"] {
            fs::write(&path, contents).unwrap();
            match archiver.rotate(&slot, Level::Debug, &report).unwrap() {
                Rotation::Rotated(archive) => archives.push(archive),
                other => panic!("expected a rotation, got {other:?}"),
            }
        }

        assert_ne!(archives[0], archives[1]);
        assert_eq!(gunzip(&archives[0]), b"first");
        assert_eq!(gunzip(&archives[1]), b"second");
        for archive in &archives {
            let name = archive.file_name().unwrap().to_string_lossy().into_owned();
            let staging = name.strip_suffix(".gz").unwrap();
            assert!(is_fallback_staging("app.log", staging), "{name}");
            assert!(!tmp.path().join(staging).exists());
        }
        assert!(!archive_path(&path, 1).exists());
        assert_eq!(reports.borrow().len(), 2);
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn leftover_fallback_staging_is_recovered() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("app.log");
        let stranded = tmp.path().join("app.log.2024-01-02.10-30");
        fs::write(&stranded, b"stranded").unwrap();
        let slot = RwLock::new(Some(
            FileLogger::open_path(path.clone(), Format::Json, Level::Debug).unwrap(),
        ));
        let archiver = Archiver::new(path.clone(), Format::Json, config(u64::MAX, 9));

        let outcome = archiver.rotate(&slot, Level::Debug, &no_report).unwrap();
        let archive = tmp.path().join("app.log.2024-01-02.10-30.gz");
        assert_eq!(outcome, Rotation::Recovered(vec![archive.clone()]));
        assert_eq!(gunzip(&archive), b"stranded");
        assert!(!stranded.exists());
        assert_eq!(
            archiver.rotate(&slot, Level::Debug, &no_report).unwrap(),
            Rotation::Skipped
        );
    }

    #[test]
    fn gzip_never_overwrites_an_archive() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("app.log.1");
        fs::write(&path, b"new").unwrap();
        write_gz(&tmp.path().join("app.log.1.gz"), b"existing");

        let err = gzip_file(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(gunzip(&tmp.path().join("app.log.1.gz")), b"existing");
        assert!(path.exists());
    }

    #[test]
    fn fallback_names() {
        assert!(is_fallback_staging("app.log", "app.log.2024-01-02.10-30"));
        assert!(is_fallback_staging("app.log", "app.log.2024-01-02.10-30-12"));
        assert!(!is_fallback_staging("app.log", "app.log.2024-01-02.10-30-"));
        assert!(!is_fallback_staging("app.log", "app.log.notes"));
        assert!(!is_fallback_staging("app.log", "other.log.2024-01-02.10-30"));
    }

    #[test]
    fn lost_file_is_reopened() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("app.log");
        let slot = RwLock::new(None);
        let archiver = Archiver::new(path.clone(), Format::Json, config(1, 9));
        assert_eq!(archiver.rotate(&slot, Level::Info, &no_report).unwrap(), Rotation::Reopened);
        assert!(path.exists());
        assert_eq!(slot.read().as_ref().unwrap().format(), Format::Json);
    }
}
