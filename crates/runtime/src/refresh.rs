//! Staleness tracking for the scan results.
//!
//! World notifications may arrive from any thread, so the dirty state lives
//! behind a mutex shared through [`RefreshSignal`]. The tick thread owns the
//! [`RefreshScheduler`] and is the only place a scan is started.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Default debounce window between dirty-flag refreshes.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Default)]
struct RefreshState {
    dirty: bool,
    debounced: bool,
    /// Bumped on every `mark_dirty`, so a scan only clears the flag it saw.
    generation: u64,
    last_refresh: Option<Instant>,
}

/// Cloneable handle used by notification sources to request a rescan.
#[derive(Clone, Debug, Default)]
pub struct RefreshSignal {
    state: Arc<Mutex<RefreshState>>,
}

impl RefreshSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flags the results as stale, subject to debounce.
    pub fn mark_dirty(&self) {
        let mut state = self.lock();
        state.dirty = true;
        state.debounced = true;
        state.generation = state.generation.wrapping_add(1);
    }

    /// Flags the results as stale and skips the debounce window.
    pub fn request_refresh(&self) {
        let mut state = self.lock();
        state.dirty = true;
        state.debounced = false;
        state.generation = state.generation.wrapping_add(1);
    }

    pub fn is_dirty(&self) -> bool {
        self.lock().dirty
    }

    // The state is a handful of flags; a panic while holding the lock cannot
    // leave it torn, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, RefreshState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Proof that a refresh was due, handed back on completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefreshTicket {
    generation: u64,
}

/// Decides on each tick whether a rescan should run.
#[derive(Clone, Debug)]
pub struct RefreshScheduler {
    signal: RefreshSignal,
    interval: Duration,
}

impl RefreshScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            signal: RefreshSignal::new(),
            interval,
        }
    }

    /// Handle for notification sources.
    pub fn signal(&self) -> RefreshSignal {
        self.signal.clone()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns a ticket when a refresh is due at `now`.
    ///
    /// Due means dirty and either not debounced, never refreshed, or at least
    /// one interval since the last refresh.
    pub fn poll(&self, now: Instant) -> Option<RefreshTicket> {
        let state = self.signal.lock();
        if !state.dirty {
            return None;
        }

        let window_elapsed = match state.last_refresh {
            Some(last) => now.saturating_duration_since(last) >= self.interval,
            None => true,
        };
        (!state.debounced || window_elapsed).then_some(RefreshTicket {
            generation: state.generation,
        })
    }

    /// Records a successful scan started with `ticket`.
    ///
    /// The dirty flag survives when a new notification arrived mid-scan.
    pub fn complete(&self, ticket: RefreshTicket, now: Instant) {
        let mut state = self.signal.lock();
        if state.generation == ticket.generation {
            state.dirty = false;
            state.debounced = false;
        }
        state.last_refresh = Some(now);
    }

    /// Records a failed scan. The flag stays set and the next attempt waits a
    /// full interval.
    pub fn defer(&self, now: Instant) {
        let mut state = self.signal.lock();
        state.debounced = true;
        state.last_refresh = Some(now);
    }

    /// Records a scan that ran outside the scheduler (location entry).
    pub fn mark_refreshed(&self, now: Instant) {
        let mut state = self.signal.lock();
        state.dirty = false;
        state.debounced = false;
        state.last_refresh = Some(now);
    }
}

impl Default for RefreshScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn clean_scheduler_is_never_due() {
        let scheduler = RefreshScheduler::default();
        assert_eq!(scheduler.poll(Instant::now()), None);
    }

    #[test]
    fn first_dirty_mark_refreshes_immediately() {
        let scheduler = RefreshScheduler::default();
        let start = Instant::now();

        scheduler.signal().mark_dirty();

        assert!(scheduler.poll(start).is_some());
    }

    #[test]
    fn burst_of_marks_coalesces_into_one_scan() {
        let scheduler = RefreshScheduler::default();
        let signal = scheduler.signal();
        let start = Instant::now();

        let mut scans = 0;
        for step in 0..5 {
            signal.mark_dirty();
            let now = start + ms(10 * step);
            if let Some(ticket) = scheduler.poll(now) {
                scans += 1;
                scheduler.complete(ticket, now);
            }
        }
        // Tick every 16 ms for the rest of the window.
        let mut elapsed = 50;
        while elapsed < 1000 {
            let now = start + ms(elapsed);
            if let Some(ticket) = scheduler.poll(now) {
                scans += 1;
                scheduler.complete(ticket, now);
            }
            elapsed += 16;
        }

        assert_eq!(scans, 1);
        // The later marks are still pending for the next window.
        assert!(signal.is_dirty());
        assert!(scheduler.poll(start + ms(1000)).is_some());
    }

    #[test]
    fn debounced_refresh_runs_one_interval_late_at_most() {
        let scheduler = RefreshScheduler::default();
        let start = Instant::now();
        scheduler.mark_refreshed(start);

        scheduler.signal().mark_dirty();

        assert!(scheduler.poll(start + ms(999)).is_none());
        assert!(scheduler.poll(start + ms(1000)).is_some());
    }

    #[test]
    fn explicit_request_bypasses_debounce() {
        let scheduler = RefreshScheduler::default();
        let start = Instant::now();
        scheduler.mark_refreshed(start);

        scheduler.signal().request_refresh();

        assert!(scheduler.poll(start + ms(1)).is_some());
    }

    #[test]
    fn mark_during_scan_keeps_flag_set() {
        let scheduler = RefreshScheduler::default();
        let signal = scheduler.signal();
        let start = Instant::now();

        signal.mark_dirty();
        let ticket = scheduler.poll(start).unwrap();
        signal.mark_dirty();
        scheduler.complete(ticket, start);

        assert!(signal.is_dirty());
        assert!(scheduler.poll(start + ms(500)).is_none());
        assert!(scheduler.poll(start + ms(1000)).is_some());
    }

    #[test]
    fn failed_scan_waits_a_full_interval() {
        let scheduler = RefreshScheduler::default();
        let start = Instant::now();

        scheduler.signal().request_refresh();
        assert!(scheduler.poll(start).is_some());
        scheduler.defer(start);

        assert!(scheduler.poll(start + ms(10)).is_none());
        assert!(scheduler.poll(start + ms(1000)).is_some());
    }

    #[test]
    fn signal_is_shared_across_threads() {
        let scheduler = RefreshScheduler::default();
        let signal = scheduler.signal();

        std::thread::spawn(move || signal.mark_dirty())
            .join()
            .unwrap();

        assert!(scheduler.poll(Instant::now()).is_some());
    }
}
