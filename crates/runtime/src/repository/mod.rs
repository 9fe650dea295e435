//! Repository layer for favorites.
//!
//! Favorites are the only data the tracker persists. Scan results and
//! selection pointers are rebuilt from the world on every refresh.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileFavoritesRepository;
pub use memory::InMemoryFavoritesRepository;
pub use traits::FavoritesRepository;
