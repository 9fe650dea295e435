use crate::env::MapDimensions;
use crate::state::Position;

/// Dense visited flags covering the map plus a one-tile margin on every side.
///
/// The margin holds portal tiles at logical `-1` and at `width`/`height`.
/// Storage is reused between scans.
#[derive(Debug, Default)]
pub(crate) struct VisitedGrid {
    stride: usize,
    rows: usize,
    cells: Vec<bool>,
}

impl VisitedGrid {
    pub(crate) const MARGIN: i64 = 1;

    /// Clears all flags and resizes for `dimensions`.
    pub(crate) fn reset(&mut self, dimensions: MapDimensions) {
        self.stride = dimensions.width as usize + 2 * Self::MARGIN as usize;
        self.rows = dimensions.height as usize + 2 * Self::MARGIN as usize;
        self.cells.clear();
        self.cells.resize(self.stride * self.rows, false);
    }

    fn index(&self, position: Position) -> Option<usize> {
        let column = i64::from(position.x) + Self::MARGIN;
        let row = i64::from(position.y) + Self::MARGIN;
        if column < 0 || row < 0 || column >= self.stride as i64 || row >= self.rows as i64 {
            return None;
        }
        Some(row as usize * self.stride + column as usize)
    }

    /// Marks `position` as visited.
    ///
    /// Returns `false` when it was already visited or lies outside the grid.
    pub(crate) fn mark(&mut self, position: Position) -> bool {
        match self.index(position) {
            Some(index) if !self.cells[index] => {
                self.cells[index] = true;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn is_visited(&self, position: Position) -> bool {
        self.index(position).is_some_and(|index| self.cells[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_covers_negative_and_overflowing_tiles() {
        let mut grid = VisitedGrid::default();
        grid.reset(MapDimensions::new(3, 2));

        assert!(grid.mark(Position::new(-1, -1)));
        assert!(grid.mark(Position::new(3, 2)));
        assert!(!grid.mark(Position::new(-2, 0)));
        assert!(!grid.mark(Position::new(4, 0)));
        assert!(!grid.mark(Position::new(-1, -1)));
    }

    #[test]
    fn reset_clears_previous_scan() {
        let mut grid = VisitedGrid::default();
        grid.reset(MapDimensions::new(4, 4));
        grid.mark(Position::new(2, 2));

        grid.reset(MapDimensions::new(4, 4));
        assert!(!grid.is_visited(Position::new(2, 2)));
    }
}
