//! In-memory FavoritesRepository implementation for tests and local runs.

use std::sync::RwLock;

use tracker_core::FavoriteTable;

use crate::repository::{FavoritesRepository, RepositoryError, Result};

/// In-memory implementation of FavoritesRepository.
#[derive(Debug, Default)]
pub struct InMemoryFavoritesRepository {
    table: RwLock<Option<FavoriteTable>>,
}

impl InMemoryFavoritesRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a table already stored.
    pub fn with_table(table: FavoriteTable) -> Self {
        Self {
            table: RwLock::new(Some(table)),
        }
    }
}

impl FavoritesRepository for InMemoryFavoritesRepository {
    fn load(&self) -> Result<Option<FavoriteTable>> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(table.clone())
    }

    fn save(&self, table: &FavoriteTable) -> Result<()> {
        let mut stored = self
            .table
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *stored = Some(table.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tracker_core::HotkeyBinding;

    use super::*;

    #[test]
    fn test_save_and_load() {
        let repo = InMemoryFavoritesRepository::new();
        assert!(repo.load().unwrap().is_none());

        let mut table = FavoriteTable::new();
        table.set("save", "Farm", 1, HotkeyBinding::object("Chest", "container"));
        repo.save(&table).unwrap();

        assert_eq!(repo.load().unwrap(), Some(table));
    }
}
