//! Repository contracts for persisting favorites.

use tracker_core::FavoriteTable;

use crate::repository::Result;

/// Repository for the favorites table.
///
/// The whole nested table is loaded once per save activation and written back
/// after every mutating favorite operation.
pub trait FavoritesRepository: Send + Sync {
    /// Load the stored table. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<FavoriteTable>>;

    /// Replace the stored table.
    fn save(&self, table: &FavoriteTable) -> Result<()>;
}
