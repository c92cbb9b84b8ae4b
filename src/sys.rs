// SPDX-License-Identifier: MIT OR Apache-2.0

//! Platform-specific process statistics.
//!
//! On Linux the resident set size is read from `/proc/self/status`. Other platforms report
//! nothing, and the `mem` field of records is left empty.

#[cfg(target_os = "linux")]
const PROC_SELF_STATUS_PATH: &str = "/proc/self/status";

/// Bytes of memory the process currently holds, if the platform exposes it.
#[cfg(target_os = "linux")]
pub fn process_memory_bytes() -> Option<u64> {
    let status = std::fs::read_to_string(PROC_SELF_STATUS_PATH).ok()?;
    parse_status_bytes(&status, "VmRSS")
}

#[cfg(not(target_os = "linux"))]
pub fn process_memory_bytes() -> Option<u64> {
    None
}

/// Reads a `Key:   1234 kB` line from a `/proc/<pid>/status` dump.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_status_bytes(status: &str, key: &str) -> Option<u64> {
    let line = status.lines().find(|line| {
        line.strip_prefix(key)
            .is_some_and(|rest| rest.starts_with(':'))
    })?;
    let mut values = line[key.len() + 1..].split_whitespace();
    let amount: u64 = values.next()?.parse().ok()?;
    match values.next() {
        Some("kB") => Some(amount * 1024),
        Some("mB") => Some(amount * 1024 * 1024),
        None => Some(amount),
        Some(_) => None,
    }
}
