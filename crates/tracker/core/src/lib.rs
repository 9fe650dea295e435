//! Spatial discovery and selection logic for key-driven object tracking.
//!
//! `tracker-core` holds the pure parts of the tracker: grid geometry, the
//! breadth-first [`scan::TileScanner`], the [`selection::SelectionTracker`]
//! pointer state machine, and the favorites table plus its multi-press
//! recognizer. Nothing here performs I/O or reads a clock; callers pass
//! `Instant`s in and act on the returned outcomes.
pub mod env;
pub mod error;
pub mod favorites;
pub mod scan;
pub mod selection;
pub mod state;

pub use env::{CategorizeError, Categorizer, Detection, LocationMap, MapDimensions};
pub use error::{ErrorSeverity, TrackerError};
pub use favorites::{
    BindingTarget, COORDINATES_CATEGORY, DEFAULT_PRESS_INTERVAL, DEFAULT_SAVE_ID, FavoriteKey,
    FavoriteTable, HotkeyBinding, LocationFavorites, Press, PressTracker, SLOTS_PER_STACK,
    TimerEvent,
};
pub use scan::{
    Entry, NEIGHBOR_OFFSETS, OTHER_CATEGORY, ProbeHit, ScanError, ScanOptions, ScanReport,
    ScanResult, TileScanner, probe,
};
pub use selection::{Boundary, SelectionError, SelectionState, SelectionTracker};
pub use state::{CompassDirection, Position};
