//! Grid geometry shared by the scanner, selection, and favorites.
mod position;

pub use position::{CompassDirection, Position};
