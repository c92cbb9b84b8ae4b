// SPDX-License-Identifier: MIT OR Apache-2.0

//! Constants and process-wide tunables.
//!
//! Rotation is tuned per process rather than per call. A [`Printer`](crate::Printer) snapshots
//! [`RotationConfig::global`] when it is built, so changing the global afterwards only affects
//! printers built later.

use parking_lot::{RwLock, const_rwlock};
use std::time::Duration;

/// Directory used by [`Printer::new`](crate::Printer::new) for its file sink.
pub const DEFAULT_LOG_DIR: &str = "../var/log";

/// chrono layout of the `ts` field; UTC, millisecond precision, no zone suffix.
pub const TIME_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Layout appended to the active path when a rotation cannot use the numbered chain.
pub const FALLBACK_STAGING_LAYOUT: &str = "%Y-%m-%d.%H-%M";

pub const DEFAULT_LOG_SIZE_MAX: u64 = 16 * 1024 * 1024;
pub const DEFAULT_LOG_ARCHIVES_MAX: usize = 9;
pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_secs(30);

/// Size-triggered rotation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotationConfig {
    /// Active file size, in bytes, at which it is rotated.
    pub size_max: u64,
    /// Number of compressed generations kept; older ones are deleted.
    pub archives_max: usize,
    /// How long the rotator sleeps between size checks.
    pub interval: Duration,
}

static GLOBAL_ROTATION: RwLock<RotationConfig> = const_rwlock(RotationConfig::DEFAULT);

impl RotationConfig {
    pub const DEFAULT: RotationConfig = RotationConfig {
        size_max: DEFAULT_LOG_SIZE_MAX,
        archives_max: DEFAULT_LOG_ARCHIVES_MAX,
        interval: DEFAULT_ROTATION_INTERVAL,
    };

    /// The process-wide policy new printers start from.
    pub fn global() -> Self {
        *GLOBAL_ROTATION.read()
    }

    /// Replaces the process-wide policy.
    pub fn set_global(config: RotationConfig) {
        *GLOBAL_ROTATION.write() = config;
    }
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RotationConfig::default();
        assert_eq!(config.size_max, 16_777_216);
        assert_eq!(config.archives_max, 9);
        assert_eq!(config.interval, Duration::from_secs(30));
    }
}
