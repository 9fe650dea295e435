use std::collections::{HashSet, VecDeque};

use crate::env::{CategorizeError, Categorizer, LocationMap};
use crate::state::Position;

use super::ScanError;

/// Expansion order for the short-range probe: west, south, east, north.
const PROBE_OFFSETS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Something found by [`probe`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeHit {
    pub position: Position,
    pub name: String,
    pub category: Option<String>,
}

/// Four-connected breadth-first search around `center`.
///
/// Stays within `radius` tiles on each axis (a square, not a circle) and does
/// not consult the map bounds; the categorizer decides what lives off-map.
/// Uses [`Categorizer::categorize_fast`]. Tile errors are skipped.
pub fn probe(
    center: Position,
    radius: u32,
    map: &dyn LocationMap,
    categorizer: &dyn Categorizer,
) -> Result<Vec<ProbeHit>, ScanError> {
    let radius = i64::from(radius);
    let within = |tile: Position| {
        (i64::from(tile.x) - i64::from(center.x)).abs() <= radius
            && (i64::from(tile.y) - i64::from(center.y)).abs() <= radius
    };

    let mut hits = Vec::new();
    let mut searched = HashSet::from([center]);
    let mut queue = VecDeque::from([center]);

    while let Some(tile) = queue.pop_front() {
        match categorizer.categorize_fast(tile, map) {
            Ok(Some(detection)) => hits.push(ProbeHit {
                position: tile,
                name: detection.name,
                category: detection.category,
            }),
            Ok(None) | Err(CategorizeError::Tile { .. }) => {}
            Err(source) => {
                return Err(ScanError::Aborted {
                    position: tile,
                    source,
                });
            }
        }

        for (dx, dy) in PROBE_OFFSETS {
            let next = tile.offset(dx, dy);
            if within(next) && searched.insert(next) {
                queue.push_back(next);
            }
        }
    }

    Ok(hits)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::env::{Detection, MapDimensions};

    struct Open;

    impl LocationMap for Open {
        fn dimensions(&self) -> MapDimensions {
            MapDimensions::new(1, 1)
        }

        fn is_portal(&self, _position: Position) -> bool {
            false
        }
    }

    #[derive(Default)]
    struct Recorder {
        seen: RefCell<Vec<Position>>,
    }

    impl Categorizer for Recorder {
        fn categorize(
            &self,
            tile: Position,
            _map: &dyn LocationMap,
        ) -> Result<Option<Detection>, CategorizeError> {
            self.seen.borrow_mut().push(tile);
            Ok((tile == Position::new(7, 4)).then(|| Detection::uncategorized("Barrel")))
        }
    }

    #[test]
    fn covers_square_radius_ignoring_bounds() {
        let recorder = Recorder::default();
        let hits = probe(Position::new(5, 5), 2, &Open, &recorder).unwrap();

        let seen = recorder.seen.borrow();
        assert_eq!(seen.len(), 25);
        assert!(seen.contains(&Position::new(7, 7)));
        assert!(!seen.contains(&Position::new(8, 5)));
        assert_eq!(
            hits,
            [ProbeHit {
                position: Position::new(7, 4),
                name: "Barrel".into(),
                category: None,
            }]
        );
    }

    #[test]
    fn first_ring_follows_probe_order() {
        let recorder = Recorder::default();
        probe(Position::ORIGIN, 1, &Open, &recorder).unwrap();

        let seen = recorder.seen.borrow();
        assert_eq!(
            seen[..5],
            [
                Position::ORIGIN,
                Position::new(-1, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(0, -1),
            ]
        );
    }

    #[test]
    fn zero_radius_checks_only_center() {
        let recorder = Recorder::default();
        probe(Position::new(3, 3), 0, &Open, &recorder).unwrap();
        assert_eq!(recorder.seen.borrow().as_slice(), [Position::new(3, 3)]);
    }
}
