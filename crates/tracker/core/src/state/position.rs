use std::fmt;

/// Discrete grid position expressed in tile coordinates.
///
/// `y` grows downward, matching screen space: a smaller `y` is further north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position shifted by the given delta.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Squared Euclidean distance, exact and cheap enough for sorting.
    #[inline]
    pub fn distance_squared(self, other: Self) -> i64 {
        let dx = i64::from(other.x) - i64::from(self.x);
        let dy = i64::from(other.y) - i64::from(self.y);
        dx * dx + dy * dy
    }

    /// Euclidean distance rounded to the nearest whole tile, for announcements.
    pub fn rounded_distance(self, other: Self) -> u32 {
        (self.distance_squared(other) as f64).sqrt().round() as u32
    }

    /// Parses the `"x, y"` text form used by coordinate favorites.
    ///
    /// Fractional components are truncated toward zero.
    pub fn parse_coordinates(text: &str) -> Option<Self> {
        let (x, y) = text.split_once(',')?;
        if y.contains(',') {
            return None;
        }
        let x: f64 = x.trim().parse().ok()?;
        let y: f64 = y.trim().parse().ok()?;
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        Some(Self::new(x as i32, y as i32))
    }

    /// Formats as `"x, y"`, the inverse of [`Position::parse_coordinates`].
    pub fn to_coordinates(self) -> String {
        format!("{}, {}", self.x, self.y)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Eight-way compass bearing from one tile to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum CompassDirection {
    /// Both tiles are the same.
    Here,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CompassDirection {
    /// Bearing from `from` toward `to`, snapped to the nearest 45 degree sector.
    pub fn between(from: Position, to: Position) -> Self {
        let dx = f64::from(to.x - from.x);
        // Flip y so that north is a positive angle.
        let dy = f64::from(from.y - to.y);
        if dx == 0.0 && dy == 0.0 {
            return Self::Here;
        }

        let degrees = dy.atan2(dx).to_degrees();
        let sector = ((degrees + 22.5).rem_euclid(360.0) / 45.0) as u8;
        match sector {
            0 => Self::East,
            1 => Self::NorthEast,
            2 => Self::North,
            3 => Self::NorthWest,
            4 => Self::West,
            5 => Self::SouthWest,
            6 => Self::South,
            _ => Self::SouthEast,
        }
    }
}
