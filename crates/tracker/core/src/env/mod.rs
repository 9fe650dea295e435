//! Traits describing the world the tracker observes.
//!
//! The host game owns the real map and object data. The tracker only sees it
//! through [`LocationMap`] (extent plus portal edges) and [`Categorizer`]
//! (what, if anything, sits on a tile).
mod categorizer;
mod map;

pub use categorizer::{CategorizeError, Categorizer, Detection};
pub use map::{LocationMap, MapDimensions};
