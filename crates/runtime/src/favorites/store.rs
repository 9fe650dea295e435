use std::sync::Arc;

use tracker_core::{DEFAULT_SAVE_ID, FavoriteTable, HotkeyBinding};

use crate::repository::FavoritesRepository;

/// The favorites table of the active save, written through to a repository.
///
/// Persistence failures never reach the caller: they are logged and the
/// in-memory table stays authoritative until the next successful write.
pub struct FavoriteStore {
    table: FavoriteTable,
    repository: Arc<dyn FavoritesRepository>,
    save_id: String,
}

impl FavoriteStore {
    pub fn new(repository: Arc<dyn FavoritesRepository>) -> Self {
        Self {
            table: FavoriteTable::new(),
            repository,
            save_id: DEFAULT_SAVE_ID.to_owned(),
        }
    }

    /// Loads the table for a newly activated save.
    ///
    /// A save without its own row is seeded from the default row. When the
    /// repository cannot be read, the store starts empty and keeps the
    /// default row it already had.
    pub fn activate(&mut self, save_id: &str) {
        let previous_defaults = self.table.default_row().cloned();

        self.table = match self.repository.load() {
            Ok(Some(table)) => table,
            Ok(None) => FavoriteTable::new(),
            Err(err) => {
                tracing::warn!("Failed to load favorites, starting empty: {}", err);
                let mut table = FavoriteTable::new();
                for (location, bindings) in previous_defaults.into_iter().flatten() {
                    for (hotkey, binding) in bindings {
                        table.set(DEFAULT_SAVE_ID, &location, hotkey, binding);
                    }
                }
                table
            }
        };
        self.save_id = save_id.to_owned();

        if self.table.seed_from_default(save_id) {
            tracing::info!("Seeded favorites for save '{}' from defaults", save_id);
            self.persist();
        }
    }

    pub fn save_id(&self) -> &str {
        &self.save_id
    }

    pub fn table(&self) -> &FavoriteTable {
        &self.table
    }

    /// The binding stored under `hotkey`, if it is set.
    pub fn binding(&self, location_id: &str, hotkey: u32) -> Option<&HotkeyBinding> {
        self.table.binding(&self.save_id, location_id, hotkey)
    }

    pub fn save_binding(&mut self, location_id: &str, hotkey: u32, binding: HotkeyBinding) {
        self.table.set(&self.save_id, location_id, hotkey, binding);
        self.persist();
    }

    pub fn delete(&mut self, location_id: &str, hotkey: u32) -> Option<HotkeyBinding> {
        let removed = self.table.remove(&self.save_id, location_id, hotkey);
        if removed.is_some() {
            self.persist();
        }
        removed
    }

    /// Copies the active save's row over the default row.
    pub fn promote_default(&mut self) -> bool {
        let promoted = self.table.promote_to_default(&self.save_id);
        if promoted {
            self.persist();
        }
        promoted
    }

    pub fn clear_default(&mut self) -> bool {
        let cleared = self.table.clear_default();
        if cleared {
            self.persist();
        }
        cleared
    }

    fn persist(&self) -> bool {
        match self.repository.save(&self.table) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("Failed to persist favorites: {}", err);
                false
            }
        }
    }
}
