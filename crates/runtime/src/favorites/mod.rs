//! Favorite hotkeys: the persisted table and the press recognizer on top.
mod recognizer;
mod store;

pub use recognizer::{FavoriteAction, FavoriteRecognizer};
pub use store::FavoriteStore;
