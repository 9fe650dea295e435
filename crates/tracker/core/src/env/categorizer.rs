use thiserror::Error;

use crate::env::LocationMap;
use crate::error::{ErrorSeverity, TrackerError};
use crate::state::Position;

/// Something the categorizer recognised on a tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Detection {
    pub name: String,
    /// Coarse tag such as `"container"` or `"npc"`. `None` files the
    /// detection under the catch-all category.
    pub category: Option<String>,
}

impl Detection {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: Some(category.into()),
        }
    }

    pub fn uncategorized(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
        }
    }
}

/// Failure raised while inspecting a tile.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CategorizeError {
    /// Only this tile could not be read; the scan skips it and moves on.
    #[error("tile {position} could not be categorized: {reason}")]
    Tile { position: Position, reason: String },

    /// The whole location is unreadable (e.g. it was unloaded mid-scan).
    #[error("location could not be categorized: {reason}")]
    Location { reason: String },
}

impl TrackerError for CategorizeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Tile { .. } => "CATEGORIZE_TILE",
            Self::Location { .. } => "CATEGORIZE_LOCATION",
        }
    }
}

/// Names and classifies whatever occupies a tile.
///
/// Implementations are expected to be pure from the tracker's point of view:
/// the same tile on an unchanged map yields the same answer.
pub trait Categorizer {
    fn categorize(
        &self,
        tile: Position,
        map: &dyn LocationMap,
    ) -> Result<Option<Detection>, CategorizeError>;

    /// Cheaper lookup used by the short-range probe. Implementations may skip
    /// category resolution and return `category: None`.
    fn categorize_fast(
        &self,
        tile: Position,
        map: &dyn LocationMap,
    ) -> Result<Option<Detection>, CategorizeError> {
        self.categorize(tile, map)
    }
}

impl<T: Categorizer + ?Sized> Categorizer for &T {
    fn categorize(
        &self,
        tile: Position,
        map: &dyn LocationMap,
    ) -> Result<Option<Detection>, CategorizeError> {
        (**self).categorize(tile, map)
    }

    fn categorize_fast(
        &self,
        tile: Position,
        map: &dyn LocationMap,
    ) -> Result<Option<Detection>, CategorizeError> {
        (**self).categorize_fast(tile, map)
    }
}
