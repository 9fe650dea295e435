use tracker_core::{Categorizer, LocationMap, Position};

/// Read-only view of the host game for one update.
pub trait WorldView {
    /// Identifier favorites are keyed by (festival name during events).
    fn location_id(&self) -> &str;

    fn player_tile(&self) -> Position;

    /// Tile the player is facing; saved by coordinate favorites.
    fn facing_tile(&self) -> Position;

    fn map(&self) -> &dyn LocationMap;

    fn categorizer(&self) -> &dyn Categorizer;

    /// A menu has focus; auto-walk is cancelled and keys are not ours.
    fn menu_open(&self) -> bool {
        false
    }

    /// Number of cheap counters the count watcher samples.
    fn count_probe_len(&self) -> usize {
        0
    }

    /// Current value of counter `index` (debris, placed objects, furniture, ...).
    fn count_probe(&self, index: usize) -> Option<usize> {
        let _ = index;
        None
    }
}
