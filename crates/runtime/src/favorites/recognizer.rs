use std::time::{Duration, Instant};

use tracker_core::{FavoriteKey, HotkeyBinding, PressTracker, TimerEvent};

use super::FavoriteStore;

/// What a favorite key press resolved to.
///
/// Everything except [`FavoriteAction::Save`] has already been applied to the
/// store; the caller only announces it. Saving needs the caller's selection,
/// so it is handed back as an instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FavoriteAction {
    /// First press on a bound slot.
    ReadBinding { hotkey: u32, binding: HotkeyBinding },
    /// First press on an empty slot.
    ReadUnset { hotkey: u32 },
    /// Second press on an empty slot: store the current target under `hotkey`.
    Save { hotkey: u32 },
    /// Second press on a bound slot: navigation starts unless a third press
    /// arrives within the window.
    NavigationArmed { hotkey: u32 },
    /// Third or later press: the binding is gone.
    Delete {
        hotkey: u32,
        removed: Option<HotkeyBinding>,
        /// Navigation that was pending and got cancelled by this press.
        cancelled: Option<u32>,
    },
    /// Zero-based stack after a stack key.
    StackChanged { stack: u32 },
    CoordinatesToggled { enabled: bool },
    DefaultPromoted { promoted: bool },
    DefaultCleared { cleared: bool },
}

/// Turns favorite key presses into reads, saves, navigations and deletes.
pub struct FavoriteRecognizer {
    presses: PressTracker,
    store: FavoriteStore,
    save_coordinates: bool,
}

impl FavoriteRecognizer {
    pub fn new(store: FavoriteStore, interval: Duration) -> Self {
        Self {
            presses: PressTracker::new(interval),
            store,
            save_coordinates: false,
        }
    }

    pub fn on_press(&mut self, key: FavoriteKey, location_id: &str, now: Instant) -> FavoriteAction {
        let press = self.presses.press(key, now);

        match key {
            FavoriteKey::Slot(_) => {
                let hotkey = press.hotkey.unwrap_or_default();
                self.on_slot(hotkey, press.count, location_id, now)
            }
            FavoriteKey::StackDown => FavoriteAction::StackChanged {
                stack: self.presses.stack_down(),
            },
            FavoriteKey::StackUp => FavoriteAction::StackChanged {
                stack: self.presses.stack_up(),
            },
            FavoriteKey::CoordinatesToggle => {
                self.save_coordinates = !self.save_coordinates;
                FavoriteAction::CoordinatesToggled {
                    enabled: self.save_coordinates,
                }
            }
            FavoriteKey::SaveDefault if press.count <= 1 => FavoriteAction::DefaultPromoted {
                promoted: self.store.promote_default(),
            },
            FavoriteKey::SaveDefault => FavoriteAction::DefaultCleared {
                cleared: self.store.clear_default(),
            },
        }
    }

    fn on_slot(&mut self, hotkey: u32, count: u32, location_id: &str, now: Instant) -> FavoriteAction {
        let binding = self.store.binding(location_id, hotkey).cloned();

        match (count, binding) {
            (1, Some(binding)) => FavoriteAction::ReadBinding { hotkey, binding },
            (1, None) => FavoriteAction::ReadUnset { hotkey },
            (2, Some(_)) => {
                self.presses.arm_navigation(hotkey, now);
                FavoriteAction::NavigationArmed { hotkey }
            }
            (2, None) => FavoriteAction::Save { hotkey },
            _ => {
                let cancelled = self.presses.cancel_navigation();
                let removed = self.store.delete(location_id, hotkey);
                FavoriteAction::Delete {
                    hotkey,
                    removed,
                    cancelled,
                }
            }
        }
    }

    /// Fires expired timers.
    pub fn poll(&mut self, now: Instant) -> Vec<TimerEvent> {
        self.presses.poll(now)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.presses.next_deadline()
    }

    /// Forgets the press count, e.g. when a non-favorite key was pressed.
    pub fn reset(&mut self) {
        self.presses.reset();
    }

    pub fn reset_stack(&mut self) {
        self.presses.set_stack(0);
    }

    pub fn stack(&self) -> u32 {
        self.presses.stack()
    }

    pub fn pending_navigation(&self) -> Option<u32> {
        self.presses.pending_navigation()
    }

    pub fn saves_coordinates(&self) -> bool {
        self.save_coordinates
    }

    pub fn save(&mut self, location_id: &str, hotkey: u32, binding: HotkeyBinding) {
        self.store.save_binding(location_id, hotkey, binding);
    }

    pub fn binding(&self, location_id: &str, hotkey: u32) -> Option<&HotkeyBinding> {
        self.store.binding(location_id, hotkey)
    }

    pub fn store(&self) -> &FavoriteStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut FavoriteStore {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tracker_core::DEFAULT_PRESS_INTERVAL;

    use super::*;
    use crate::repository::InMemoryFavoritesRepository;

    const FARM: &str = "Farm";

    fn recognizer() -> FavoriteRecognizer {
        let mut store = FavoriteStore::new(Arc::new(InMemoryFavoritesRepository::new()));
        store.activate("save");
        FavoriteRecognizer::new(store, DEFAULT_PRESS_INTERVAL)
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn slot(number: u8) -> FavoriteKey {
        FavoriteKey::slot(number).unwrap()
    }

    fn chest() -> HotkeyBinding {
        HotkeyBinding::object("Chest", "container")
    }

    #[test]
    fn single_press_reads_binding() {
        let mut favorites = recognizer();
        let now = Instant::now();

        assert_eq!(
            favorites.on_press(slot(1), FARM, now),
            FavoriteAction::ReadUnset { hotkey: 1 }
        );

        favorites.save(FARM, 2, chest());
        assert_eq!(
            favorites.on_press(slot(2), FARM, now + ms(10)),
            FavoriteAction::ReadBinding {
                hotkey: 2,
                binding: chest()
            }
        );
    }

    #[test]
    fn double_press_on_empty_slot_asks_to_save() {
        let mut favorites = recognizer();
        let now = Instant::now();

        favorites.on_press(slot(3), FARM, now);
        let action = favorites.on_press(slot(3), FARM, now + ms(100));

        assert_eq!(action, FavoriteAction::Save { hotkey: 3 });
        assert_eq!(favorites.pending_navigation(), None);
    }

    #[test]
    fn double_press_on_bound_slot_arms_then_confirms_navigation() {
        let mut favorites = recognizer();
        favorites.save(FARM, 4, chest());
        let now = Instant::now();

        favorites.on_press(slot(4), FARM, now);
        let action = favorites.on_press(slot(4), FARM, now + ms(100));
        assert_eq!(action, FavoriteAction::NavigationArmed { hotkey: 4 });

        assert!(favorites.poll(now + ms(200)).is_empty());
        let fired = favorites.poll(now + ms(600));
        assert!(fired.contains(&TimerEvent::NavigationConfirmed { hotkey: 4 }));
        assert!(fired.contains(&TimerEvent::DecayElapsed));
    }

    #[test]
    fn third_press_cancels_navigation_and_deletes() {
        let mut favorites = recognizer();
        favorites.save(FARM, 4, chest());
        let now = Instant::now();

        favorites.on_press(slot(4), FARM, now);
        favorites.on_press(slot(4), FARM, now + ms(100));
        let action = favorites.on_press(slot(4), FARM, now + ms(200));

        assert_eq!(
            action,
            FavoriteAction::Delete {
                hotkey: 4,
                removed: Some(chest()),
                cancelled: Some(4),
            }
        );
        assert_eq!(favorites.binding(FARM, 4), None);
        assert_eq!(favorites.poll(now + ms(2000)), vec![TimerEvent::DecayElapsed]);
    }

    #[test]
    fn slow_presses_restart_counting() {
        let mut favorites = recognizer();
        let now = Instant::now();

        favorites.on_press(slot(1), FARM, now);
        favorites.poll(now + ms(600));
        let action = favorites.on_press(slot(1), FARM, now + ms(700));

        assert_eq!(action, FavoriteAction::ReadUnset { hotkey: 1 });
    }

    #[test]
    fn stack_offsets_hotkeys_and_floors_at_zero() {
        let mut favorites = recognizer();
        let now = Instant::now();

        assert_eq!(
            favorites.on_press(FavoriteKey::StackDown, FARM, now),
            FavoriteAction::StackChanged { stack: 0 }
        );
        assert_eq!(
            favorites.on_press(FavoriteKey::StackUp, FARM, now),
            FavoriteAction::StackChanged { stack: 1 }
        );
        assert_eq!(
            favorites.on_press(slot(3), FARM, now),
            FavoriteAction::ReadUnset { hotkey: 13 }
        );

        favorites.reset_stack();
        assert_eq!(favorites.stack(), 0);
    }

    #[test]
    fn coordinate_toggle_flips() {
        let mut favorites = recognizer();
        let now = Instant::now();

        assert_eq!(
            favorites.on_press(FavoriteKey::CoordinatesToggle, FARM, now),
            FavoriteAction::CoordinatesToggled { enabled: true }
        );
        assert!(favorites.saves_coordinates());
        assert_eq!(
            favorites.on_press(FavoriteKey::CoordinatesToggle, FARM, now + ms(10)),
            FavoriteAction::CoordinatesToggled { enabled: false }
        );
    }

    #[test]
    fn default_key_promotes_then_clears() {
        let mut favorites = recognizer();
        favorites.save(FARM, 1, chest());
        let now = Instant::now();

        assert_eq!(
            favorites.on_press(FavoriteKey::SaveDefault, FARM, now),
            FavoriteAction::DefaultPromoted { promoted: true }
        );
        assert_eq!(
            favorites.on_press(FavoriteKey::SaveDefault, FARM, now + ms(100)),
            FavoriteAction::DefaultCleared { cleared: true }
        );
        assert!(favorites.store().table().default_row().is_none());
    }
}
