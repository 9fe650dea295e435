//! Breadth-first discovery of tracked objects.
//!
//! [`TileScanner`] walks the whole location from the player's tile and groups
//! every detection by category into a [`ScanResult`]. [`probe`] is the small
//! radius variant used for directional cues around the player.
mod probe;
mod scanner;
mod visited;

use std::collections::BTreeMap;

use thiserror::Error;

use crate::env::{CategorizeError, MapDimensions};
use crate::error::{ErrorSeverity, TrackerError};
use crate::state::Position;

pub use probe::{ProbeHit, probe};
pub use scanner::{NEIGHBOR_OFFSETS, ScanOptions, ScanReport, TileScanner};

/// Category used when the categorizer names a tile without classifying it.
pub const OTHER_CATEGORY: &str = "other";

/// One discovered object.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub position: Position,
    pub name: String,
}

impl Entry {
    pub fn new(position: Position, name: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
        }
    }
}

/// Discovered objects grouped by category.
///
/// Categories iterate in ordinal (byte-wise) name order. A category key only
/// exists while its list is non-empty, so every key has at least one entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanResult {
    categories: BTreeMap<String, Vec<Entry>>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, creating the category on first use.
    pub fn push(&mut self, category: &str, entry: Entry) {
        match self.categories.get_mut(category) {
            Some(entries) => entries.push(entry),
            None => {
                self.categories.insert(category.to_owned(), vec![entry]);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Total number of entries across all categories.
    pub fn entry_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Category names in ordinal order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Name of the `index`-th category in ordinal order.
    pub fn category_at(&self, index: usize) -> Option<&str> {
        self.categories.keys().nth(index).map(String::as_str)
    }

    /// Ordinal index of `category`, if present.
    pub fn category_index(&self, category: &str) -> Option<usize> {
        self.categories.keys().position(|key| key == category)
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    pub fn entries(&self, category: &str) -> Option<&[Entry]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Entry])> {
        self.categories
            .iter()
            .map(|(category, entries)| (category.as_str(), entries.as_slice()))
    }

    /// Stable-sorts every category by distance from `origin`.
    ///
    /// Equidistant entries keep their discovery order.
    pub fn sort_by_proximity(&mut self, origin: Position) {
        for entries in self.categories.values_mut() {
            entries.sort_by_key(|entry| origin.distance_squared(entry.position));
        }
    }

    pub fn clear(&mut self) {
        self.categories.clear();
    }
}

impl<C: Into<String>> FromIterator<(C, Entry)> for ScanResult {
    fn from_iter<I: IntoIterator<Item = (C, Entry)>>(iter: I) -> Self {
        let mut result = Self::new();
        for (category, entry) in iter {
            let category: String = category.into();
            result.push(&category, entry);
        }
        result
    }
}

/// A scan that could not complete. Partial results are never returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("scan origin {origin} lies outside the {}x{} location", dimensions.width, dimensions.height)]
    OriginOutOfBounds {
        origin: Position,
        dimensions: MapDimensions,
    },

    #[error("scan aborted at {position}")]
    Aborted {
        position: Position,
        #[source]
        source: CategorizeError,
    },
}

impl TrackerError for ScanError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::OriginOutOfBounds { .. } => ErrorSeverity::Validation,
            Self::Aborted { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OriginOutOfBounds { .. } => "SCAN_ORIGIN_OUT_OF_BOUNDS",
            Self::Aborted { .. } => "SCAN_ABORTED",
        }
    }
}
