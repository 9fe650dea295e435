//! Scan timing and failure counters.
//!
//! Shared behind an `Arc` so a host can read them from another thread while
//! the tick loop keeps recording.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Refresh statistics recorded by the tracker.
///
/// Uses atomics for lock-free access across threads.
#[derive(Debug, Default)]
pub struct ScanMetrics {
    /// Scans that produced results
    refreshes: AtomicU64,

    /// Scans that were aborted
    failures: AtomicU64,

    /// Sum of successful scan durations, in nanoseconds
    total_scan_nanos: AtomicU64,

    /// Duration of the most recent successful scan, in nanoseconds
    last_scan_nanos: AtomicU64,

    /// Tiles the categorizer could not read, summed over all scans
    skipped_tiles: AtomicU64,
}

impl ScanMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&self, elapsed: Duration, skipped_tiles: usize) {
        let nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        self.refreshes.fetch_add(1, Ordering::Relaxed);
        self.total_scan_nanos.fetch_add(nanos, Ordering::Relaxed);
        self.last_scan_nanos.store(nanos, Ordering::Relaxed);
        self.skipped_tiles
            .fetch_add(skipped_tiles as u64, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn refreshes(&self) -> u64 {
        self.refreshes.load(Ordering::Relaxed)
    }

    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    /// Running average over successful scans.
    pub fn average(&self) -> Duration {
        let refreshes = self.refreshes();
        if refreshes == 0 {
            Duration::ZERO
        } else {
            let total_nanos = self.total_scan_nanos.load(Ordering::Relaxed);
            Duration::from_nanos(total_nanos / refreshes)
        }
    }

    /// Creates a snapshot of all counters for display/logging.
    ///
    /// Individual fields are read atomically; the snapshot as a whole may mix
    /// values from concurrent updates.
    pub fn snapshot(&self) -> ScanMetricsSnapshot {
        ScanMetricsSnapshot {
            refreshes: self.refreshes(),
            failures: self.failures(),
            average: self.average(),
            last: Duration::from_nanos(self.last_scan_nanos.load(Ordering::Relaxed)),
            skipped_tiles: self.skipped_tiles.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of scan metrics at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanMetricsSnapshot {
    pub refreshes: u64,
    pub failures: u64,
    pub average: Duration,
    pub last: Duration,
    pub skipped_tiles: u64,
}
