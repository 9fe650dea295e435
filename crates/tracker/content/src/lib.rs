//! Data-driven location layouts.
//!
//! A layout describes one location the tracker can be dropped into: its
//! extent, the portal tiles around its edge, the objects placed on it and
//! where the player starts. Layouts are authored as RON files and consumed by
//! runtime oracles; nothing here knows about scanning or selection.

pub mod layout;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use layout::{LocationLayout, PlacedObject, PortalSpec};

#[cfg(feature = "loaders")]
pub use loaders::{ContentFactory, LayoutLoader, LoadResult};
