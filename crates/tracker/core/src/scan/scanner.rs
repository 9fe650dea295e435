use std::collections::VecDeque;

use crate::env::{CategorizeError, Categorizer, LocationMap};
use crate::state::Position;

use super::visited::VisitedGrid;
use super::{Entry, OTHER_CATEGORY, ScanError, ScanResult};

/// Expansion order for the location scan: orthogonal first, then diagonals.
///
/// The order is observable through the discovery order inside each category.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Order each category by distance from the origin instead of by
    /// discovery order.
    pub sort_by_proximity: bool,
}

/// Outcome of a completed scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub result: ScanResult,
    /// Tiles dequeued and handed to the categorizer.
    pub tiles_visited: usize,
    /// Tiles whose categorization failed and were left out of the result.
    pub tiles_skipped: usize,
}

/// Reusable breadth-first scanner.
///
/// The queue and visited grid keep their allocations between scans, so one
/// scanner per tracker is enough.
#[derive(Debug, Default)]
pub struct TileScanner {
    queue: VecDeque<Position>,
    visited: VisitedGrid,
}

impl TileScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans every tile reachable from `origin`.
    ///
    /// In-bounds tiles are always expanded. Tiles outside the map are only
    /// entered when they carry a portal and lie within the one-tile margin.
    /// Each tile is categorized exactly once. A tile-level categorizer error
    /// skips that tile; a location-level error aborts the whole scan.
    pub fn scan(
        &mut self,
        origin: Position,
        map: &dyn LocationMap,
        categorizer: &dyn Categorizer,
        options: ScanOptions,
    ) -> Result<ScanReport, ScanError> {
        let dimensions = map.dimensions();
        self.visited.reset(dimensions);
        self.queue.clear();

        let origin_enterable = dimensions.contains(origin) || map.is_portal(origin);
        if !origin_enterable || !self.visited.mark(origin) {
            return Err(ScanError::OriginOutOfBounds { origin, dimensions });
        }
        self.queue.push_back(origin);

        let mut report = ScanReport::default();
        while let Some(tile) = self.queue.pop_front() {
            report.tiles_visited += 1;

            match categorizer.categorize(tile, map) {
                Ok(Some(detection)) => {
                    let category = detection.category.as_deref().unwrap_or(OTHER_CATEGORY);
                    report.result.push(category, Entry::new(tile, detection.name));
                }
                Ok(None) => {}
                Err(CategorizeError::Tile { .. }) => report.tiles_skipped += 1,
                Err(source) => {
                    self.queue.clear();
                    return Err(ScanError::Aborted {
                        position: tile,
                        source,
                    });
                }
            }

            for (dx, dy) in NEIGHBOR_OFFSETS {
                let next = tile.offset(dx, dy);
                if !dimensions.contains(next) && !map.is_portal(next) {
                    continue;
                }
                if self.visited.mark(next) {
                    self.queue.push_back(next);
                }
            }
        }

        if options.sort_by_proximity {
            report.result.sort_by_proximity(origin);
        }

        Ok(report)
    }
}
