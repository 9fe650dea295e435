use std::time::{Duration, Instant};

/// Window for both consecutive-press counting and navigation confirmation.
pub const DEFAULT_PRESS_INTERVAL: Duration = Duration::from_millis(500);

/// Numbered slots per stack; slot `k` on stack `s` is hotkey `k + 10 * s`.
pub const SLOTS_PER_STACK: u32 = 10;

/// The fourteen favorite key identities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FavoriteKey {
    /// Numbered slot, `1..=10`.
    Slot(u8),
    StackDown,
    StackUp,
    CoordinatesToggle,
    SaveDefault,
}

impl FavoriteKey {
    /// Numbered slot key, if `number` is in `1..=10`.
    pub fn slot(number: u8) -> Option<Self> {
        (1..=SLOTS_PER_STACK as u8)
            .contains(&number)
            .then_some(Self::Slot(number))
    }

    /// Absolute hotkey for a slot key on `stack`.
    pub fn hotkey(self, stack: u32) -> Option<u32> {
        match self {
            Self::Slot(number) => Some(u32::from(number) + SLOTS_PER_STACK * stack),
            _ => None,
        }
    }
}

/// One recognised press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Press {
    pub key: FavoriteKey,
    /// Consecutive presses of `key` inside the window, starting at 1.
    pub count: u32,
    /// Absolute hotkey for slot keys, resolved against the current stack.
    pub hotkey: Option<u32>,
}

/// A timer that expired during [`PressTracker::poll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    /// No cancelling press arrived; navigation to `hotkey` should begin.
    NavigationConfirmed { hotkey: u32 },
    /// The same-key window lapsed and counting restarted.
    DecayElapsed,
}

#[derive(Clone, Copy, Debug)]
struct PendingNavigation {
    hotkey: u32,
    deadline: Instant,
}

/// Multi-press timing state machine.
///
/// Time only moves when the caller passes an `Instant` in. Timers are plain
/// deadlines checked by [`PressTracker::poll`], so the whole recognizer lives
/// on the caller's thread.
#[derive(Clone, Debug)]
pub struct PressTracker {
    interval: Duration,
    last_key: Option<FavoriteKey>,
    count: u32,
    stack: u32,
    decay_deadline: Option<Instant>,
    pending_navigation: Option<PendingNavigation>,
}

impl Default for PressTracker {
    fn default() -> Self {
        Self::new(DEFAULT_PRESS_INTERVAL)
    }
}

impl PressTracker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_key: None,
            count: 0,
            stack: 0,
            decay_deadline: None,
            pending_navigation: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Registers a press and re-arms the decay window.
    pub fn press(&mut self, key: FavoriteKey, now: Instant) -> Press {
        if self.last_key == Some(key) {
            self.count = self.count.saturating_add(1);
        } else {
            self.last_key = Some(key);
            self.count = 1;
        }
        self.decay_deadline = Some(now + self.interval);

        Press {
            key,
            count: self.count,
            hotkey: key.hotkey(self.stack),
        }
    }

    /// Schedules navigation to `hotkey` one interval from `now`, replacing any
    /// earlier pending navigation.
    pub fn arm_navigation(&mut self, hotkey: u32, now: Instant) {
        self.pending_navigation = Some(PendingNavigation {
            hotkey,
            deadline: now + self.interval,
        });
    }

    /// Drops a pending navigation, returning its hotkey.
    pub fn cancel_navigation(&mut self) -> Option<u32> {
        self.pending_navigation.take().map(|pending| pending.hotkey)
    }

    pub fn pending_navigation(&self) -> Option<u32> {
        self.pending_navigation.map(|pending| pending.hotkey)
    }

    /// Fires every timer whose deadline is at or before `now`.
    ///
    /// Navigation is reported before decay. Decay never cancels a pending
    /// navigation.
    pub fn poll(&mut self, now: Instant) -> Vec<TimerEvent> {
        let mut fired = Vec::new();

        if let Some(pending) = self.pending_navigation {
            if pending.deadline <= now {
                self.pending_navigation = None;
                fired.push(TimerEvent::NavigationConfirmed {
                    hotkey: pending.hotkey,
                });
            }
        }

        if self.decay_deadline.is_some_and(|deadline| deadline <= now) {
            self.reset();
            fired.push(TimerEvent::DecayElapsed);
        }

        fired
    }

    /// Earliest armed deadline, for callers that sleep between polls.
    pub fn next_deadline(&self) -> Option<Instant> {
        let navigation = self.pending_navigation.map(|pending| pending.deadline);
        match (self.decay_deadline, navigation) {
            (Some(decay), Some(navigation)) => Some(decay.min(navigation)),
            (decay, navigation) => decay.or(navigation),
        }
    }

    /// Forgets the press count. Pending navigation is left alone.
    pub fn reset(&mut self) {
        self.last_key = None;
        self.count = 0;
        self.decay_deadline = None;
    }

    pub fn stack(&self) -> u32 {
        self.stack
    }

    pub fn set_stack(&mut self, stack: u32) {
        self.stack = stack;
    }

    /// Moves one stack down, stopping at 0. Returns the new stack.
    pub fn stack_down(&mut self) -> u32 {
        self.stack = self.stack.saturating_sub(1);
        self.stack
    }

    pub fn stack_up(&mut self) -> u32 {
        self.stack = self.stack.saturating_add(1);
        self.stack
    }
}
