//! Cheap change detection between full scans.
//!
//! Rescanning every tick is too expensive, so the host exposes a handful of
//! counters (placed objects, debris, furniture) and the watcher samples one of
//! them per step. A change anywhere in a cycle marks the results dirty.

use crate::api::WorldView;

#[derive(Clone, Debug, Default)]
pub struct CountWatcher {
    baselines: Vec<Option<usize>>,
    cursor: usize,
    changed: bool,
}

impl CountWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples the next counter.
    ///
    /// Returns true at the end of a cycle in which any counter differed from
    /// its previous sample. Counters seen for the first time only establish a
    /// baseline.
    pub fn step(&mut self, world: &dyn WorldView) -> bool {
        let len = world.count_probe_len();
        if len == 0 {
            return false;
        }
        if self.baselines.len() != len {
            self.baselines.resize(len, None);
            self.cursor = self.cursor.min(len - 1);
        }

        let current = world.count_probe(self.cursor);
        let slot = &mut self.baselines[self.cursor];
        if slot.is_some() && *slot != current {
            self.changed = true;
        }
        *slot = current;

        self.cursor += 1;
        if self.cursor < len {
            return false;
        }

        self.cursor = 0;
        std::mem::take(&mut self.changed)
    }

    /// Forgets every baseline, e.g. after entering a new location.
    pub fn reset(&mut self) {
        self.baselines.clear();
        self.cursor = 0;
        self.changed = false;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use tracker_core::{Categorizer, LocationMap, MapDimensions, Position};

    use super::*;

    struct Counters {
        values: RefCell<Vec<usize>>,
    }

    impl WorldView for Counters {
        fn location_id(&self) -> &str {
            "Farm"
        }

        fn player_tile(&self) -> Position {
            Position::ORIGIN
        }

        fn facing_tile(&self) -> Position {
            Position::ORIGIN
        }

        fn map(&self) -> &dyn LocationMap {
            static MAP: MapDimensions = MapDimensions::new(1, 1);
            &MAP
        }

        fn categorizer(&self) -> &dyn Categorizer {
            unreachable!("watcher never categorizes")
        }

        fn count_probe_len(&self) -> usize {
            self.values.borrow().len()
        }

        fn count_probe(&self, index: usize) -> Option<usize> {
            self.values.borrow().get(index).copied()
        }
    }

    fn run_cycle(watcher: &mut CountWatcher, world: &Counters) -> bool {
        let len = world.count_probe_len();
        (0..len).map(|_| watcher.step(world)).last().unwrap_or(false)
    }

    #[test]
    fn first_cycle_only_records_baselines() {
        let world = Counters {
            values: RefCell::new(vec![3, 1, 4]),
        };
        let mut watcher = CountWatcher::new();

        assert!(!run_cycle(&mut watcher, &world));
        assert!(!run_cycle(&mut watcher, &world));
    }

    #[test]
    fn change_is_reported_at_end_of_cycle() {
        let world = Counters {
            values: RefCell::new(vec![3, 1, 4]),
        };
        let mut watcher = CountWatcher::new();
        run_cycle(&mut watcher, &world);

        world.values.borrow_mut()[0] = 2;

        assert!(!watcher.step(&world));
        assert!(!watcher.step(&world));
        assert!(watcher.step(&world));
        // Reported once.
        assert!(!run_cycle(&mut watcher, &world));
    }

    #[test]
    fn reset_drops_baselines() {
        let world = Counters {
            values: RefCell::new(vec![5]),
        };
        let mut watcher = CountWatcher::new();
        run_cycle(&mut watcher, &world);

        watcher.reset();
        world.values.borrow_mut()[0] = 9;

        assert!(!run_cycle(&mut watcher, &world));
    }
}
