use crate::state::Position;

/// Read-only view of the current location's extent and portal edges.
pub trait LocationMap {
    fn dimensions(&self) -> MapDimensions;

    /// Returns true when a door or warp is registered at `position`.
    ///
    /// Portals usually sit just outside the map extent (at `-1` or at
    /// `width`/`height`), which is how the scanner reaches them.
    fn is_portal(&self, position: Position) -> bool;

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }
}

impl<T: LocationMap + ?Sized> LocationMap for &T {
    fn dimensions(&self) -> MapDimensions {
        (**self).dimensions()
    }

    fn is_portal(&self, position: Position) -> bool {
        (**self).is_portal(position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && i64::from(position.x) < i64::from(self.width)
            && i64::from(position.y) < i64::from(self.height)
    }

    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// A plain rectangle without portals.
impl LocationMap for MapDimensions {
    fn dimensions(&self) -> MapDimensions {
        *self
    }

    fn is_portal(&self, _position: Position) -> bool {
        false
    }
}
