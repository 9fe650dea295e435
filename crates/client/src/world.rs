//! The simulated location the console player walks around in.

use tracker_content::LocationLayout;
use tracker_core::{Categorizer, LocationMap, Position};
use tracker_runtime::{StaticLocation, WorldView};

pub struct ConsoleWorld {
    pub location: StaticLocation,
    pub player: Position,
    /// Last step direction; the facing tile is one step that way.
    pub facing: (i32, i32),
}

impl ConsoleWorld {
    pub fn new(layout: &LocationLayout) -> Self {
        Self {
            location: StaticLocation::from_layout(layout),
            player: layout.player,
            facing: (0, 1),
        }
    }

    /// Moves one tile unless the destination is off the map or occupied.
    /// Returns whether the player moved.
    pub fn step(&mut self, dx: i32, dy: i32) -> bool {
        if (dx, dy) != (0, 0) {
            self.facing = (dx, dy);
        }
        let next = self.player.offset(dx, dy);
        if !self.location.contains(next) || self.occupied(next) {
            return false;
        }
        self.player = next;
        true
    }

    fn occupied(&self, tile: Position) -> bool {
        matches!(self.location.categorize(tile, &self.location), Ok(Some(_)))
    }
}

impl WorldView for ConsoleWorld {
    fn location_id(&self) -> &str {
        self.location.name()
    }

    fn player_tile(&self) -> Position {
        self.player
    }

    fn facing_tile(&self) -> Position {
        self.player.offset(self.facing.0, self.facing.1)
    }

    fn map(&self) -> &dyn LocationMap {
        &self.location
    }

    fn categorizer(&self) -> &dyn Categorizer {
        &self.location
    }

    fn count_probe_len(&self) -> usize {
        1
    }

    fn count_probe(&self, _index: usize) -> Option<usize> {
        Some(self.location.object_count())
    }
}
