// SPDX-License-Identifier: MIT OR Apache-2.0
//! Kept in its own test binary: nothing else in the process may read the execution id first.
use rotalog::{Format, InMemoryLogger, Level, Printer};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

fn now_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos() as u64
}

#[test]
fn execution_id_is_fixed_when_the_printer_is_built() {
    let before = now_nanos();
    let capture = Arc::new(InMemoryLogger::new());
    let printer = Printer::new_custom(Format::Json, Level::Info, capture.clone());
    let built = now_nanos();

    thread::sleep(Duration::from_millis(50));
    printer.info("first line");

    let rows = capture.rows(Level::Info, Format::Json);
    let eid = u64::from_str_radix(&rows[0].eid, 36).unwrap();
    assert!(eid >= before, "eid {eid} predates the test start {before}");
    assert!(eid <= built, "eid {eid} was taken after the printer was built at {built}");
}
