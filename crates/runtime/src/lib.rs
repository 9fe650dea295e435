//! Runtime orchestration for the object tracker.
//!
//! This crate wires the pure pieces of `tracker-core` (scanner, selection
//! pointers, favorites table and press recognizer) to the host through a set
//! of narrow contracts: [`api::WorldView`] for reading the game,
//! [`api::Announcer`] for speech, [`api::Pathfinder`] for auto-walking and
//! [`api::InputState`] for key presses. Consumers build an [`ObjectTracker`]
//! once and drive it from their update loop.
//!
//! Modules are organized by responsibility:
//! - [`tracker`] hosts the engine context and its builder
//! - [`api`] exposes the contracts hosts implement
//! - [`refresh`] and [`watcher`] decide when a rescan is due
//! - [`favorites`] turns favorite key presses into actions on the table
//! - [`repository`] persists favorites
//! - [`oracle`] adapts content layouts into map and categorizer views
pub mod api;
pub mod config;
pub mod favorites;
pub mod keys;
pub mod navigation;
pub mod oracle;
pub mod radar;
pub mod refresh;
pub mod repository;
pub mod tracker;
pub mod watcher;

mod metrics;

pub use api::{
    Announcer, InputState, PathRequest, Pathfinder, Result, RuntimeError, TrackerAction,
    WorldView,
};
pub use config::{RadarConfig, TrackerConfig};
pub use favorites::{FavoriteAction, FavoriteRecognizer, FavoriteStore};
pub use metrics::{ScanMetrics, ScanMetricsSnapshot};
pub use navigation::NavigationBridge;
pub use oracle::StaticLocation;
pub use radar::{CueDirection, CueSink, Radar, RadarCue};
pub use refresh::{RefreshScheduler, RefreshSignal, RefreshTicket};
pub use repository::{
    FavoritesRepository, FileFavoritesRepository, InMemoryFavoritesRepository, RepositoryError,
};
pub use tracker::{ObjectTracker, ObjectTrackerBuilder};
pub use watcher::CountWatcher;
