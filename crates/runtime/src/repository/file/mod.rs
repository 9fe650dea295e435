//! File-based repository implementations.

mod favorites;

pub use favorites::FileFavoritesRepository;
