// SPDX-License-Identifier: MIT OR Apache-2.0
use rotalog::global_printer::{global_printer, take_global_printer};
use rotalog::{Format, InMemoryLogger, Level, Printer};
use std::sync::{Arc, Mutex};

static TEST_PRINTER_GUARD: Mutex<()> = Mutex::new(());

fn install(level: Level) -> Arc<InMemoryLogger> {
    let capture = Arc::new(InMemoryLogger::new());
    rotalog::set_global_printer(Arc::new(Printer::new_custom(
        Format::Json,
        level,
        capture.clone(),
    )));
    capture
}

#[test]
fn macros_log_through_global_printer() {
    let _guard = TEST_PRINTER_GUARD.lock().unwrap();
    let capture = install(Level::Debug);

    rotalog::debug!("d {}", 1);
    rotalog::info!("i {}", 2);
    rotalog::warn!("w {}", 3);
    rotalog::error!("e {}", 4);

    for (level, message) in [
        (Level::Debug, "d 1"),
        (Level::Info, "i 2"),
        (Level::Warn, "w 3"),
        (Level::Error, "e 4"),
    ] {
        let rows = capture.rows(level, Format::Json);
        assert_eq!(rows.len(), 1, "{level}");
        assert_eq!(rows[0].msg, message);
        assert!(rows[0].trace.contains("tests/global.rs:"), "{}", rows[0].trace);
    }
    take_global_printer();
}

#[test]
fn set_level_from_string() {
    let _guard = TEST_PRINTER_GUARD.lock().unwrap();
    let capture = install(Level::Debug);

    rotalog::set_level("ERROR");
    rotalog::warn!("filtered");
    rotalog::error!("kept");
    assert!(capture.drain_logs(Level::Warn).is_empty());
    assert_eq!(capture.line_count(Level::Error), 1);
    assert_eq!(global_printer().unwrap().level(), Level::Error);

    take_global_printer();
    assert!(capture.is_closed());
}
