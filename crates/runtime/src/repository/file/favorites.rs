//! File-based FavoritesRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use tracker_core::{FavoriteTable, LocationFavorites};

use crate::repository::{FavoritesRepository, RepositoryError, Result};

/// File name used inside a data directory.
const FAVORITES_FILE: &str = "favorites.json";

/// File-based implementation of FavoritesRepository.
///
/// Stores the table as pretty-printed JSON. Writes go to a `.json.tmp`
/// sibling first and are renamed into place.
pub struct FileFavoritesRepository {
    path: PathBuf,
}

impl FileFavoritesRepository {
    /// Create a repository backed by `path`, creating its parent directory.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
        }
        Ok(Self { path })
    }

    /// Create a repository for `favorites.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::new(dir.as_ref().join(FAVORITES_FILE))
    }

    /// Platform data directory location.
    ///
    /// - macOS: `~/Library/Application Support/tracker/favorites.json`
    /// - Linux: `~/.local/share/tracker/favorites.json`
    /// - Windows: `%APPDATA%\tracker\favorites.json`
    /// - Fallback: `./save_data/favorites.json`
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "tracker")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./save_data"))
            .join(FAVORITES_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, table: &FavoriteTable) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");

        // Write to temp file
        let json = serde_json::to_string_pretty(table)
            .map_err(|e| RepositoryError::Json(e.to_string()))?;
        fs::write(&temp_path, json).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        Ok(())
    }
}

impl FavoritesRepository for FileFavoritesRepository {
    fn load(&self) -> Result<Option<FavoriteTable>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path).map_err(RepositoryError::Io)?;
        if json.trim().is_empty() {
            return Err(RepositoryError::CorruptedData(format!(
                "{} is empty",
                self.path.display()
            )));
        }

        // Current layout first. Older files have no save level and are
        // `location -> hotkey -> binding`; those get wrapped and rewritten.
        let table = match serde_json::from_str::<FavoriteTable>(&json) {
            Ok(table) => table,
            Err(nested) => {
                let locations: LocationFavorites = serde_json::from_str(&json)
                    .map_err(|_| RepositoryError::Json(nested.to_string()))?;
                let table = FavoriteTable::from_legacy(locations);
                self.write(&table)?;
                tracing::info!(
                    "Converted legacy favorites to the per-save format: {}",
                    self.path.display()
                );
                table
            }
        };

        tracing::debug!(
            "Loaded favorites for {} save(s) from {}",
            table.saves().count(),
            self.path.display()
        );

        Ok(Some(table))
    }

    fn save(&self, table: &FavoriteTable) -> Result<()> {
        self.write(table)?;
        tracing::debug!("Saved favorites: {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use tracker_core::{DEFAULT_SAVE_ID, HotkeyBinding, Position};

    use super::*;

    fn setup() -> (TempDir, FileFavoritesRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileFavoritesRepository::in_dir(temp_dir.path()).unwrap();
        (temp_dir, repo)
    }

    #[test]
    fn test_missing_file_loads_nothing() {
        let (_temp, repo) = setup();
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let (_temp, repo) = setup();

        let mut table = FavoriteTable::new();
        table.set("save-1", "Farm", 3, HotkeyBinding::object("Chest", "container"));
        table.set("save-1", "Town", 12, HotkeyBinding::coordinates(Position::new(4, 9)));
        repo.save(&table).unwrap();

        assert_eq!(repo.load().unwrap(), Some(table));
        assert!(!repo.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_delete_then_load() {
        let (_temp, repo) = setup();

        let mut table = FavoriteTable::new();
        table.set("save-1", "Farm", 3, HotkeyBinding::object("Chest", "container"));
        repo.save(&table).unwrap();
        table.remove("save-1", "Farm", 3);
        repo.save(&table).unwrap();

        let loaded = repo.load().unwrap().unwrap();
        assert_eq!(loaded.get("save-1", "Farm", 3), None);
    }

    #[test]
    fn test_binding_wire_format() {
        let (_temp, repo) = setup();

        let mut table = FavoriteTable::new();
        table.set("s", "Farm", 1, HotkeyBinding::object("Chest", "container"));
        repo.save(&table).unwrap();

        let json = fs::read_to_string(repo.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["s"]["Farm"]["1"]["Item1"], "Chest");
        assert_eq!(value["s"]["Farm"]["1"]["Item2"], "container");
    }

    #[test]
    fn test_legacy_format_is_upgraded() {
        let (_temp, repo) = setup();
        fs::write(
            repo.path(),
            r#"{
                "Farm": {
                    "1": { "Item1": "Chest", "Item2": "container" },
                    "2": { "Item1": "12, 7", "Item2": "coordinates" }
                },
                "Town": {
                    "11": { "name": "Pierre", "category": "npc" }
                }
            }"#,
        )
        .unwrap();

        let table = repo.load().unwrap().unwrap();

        let chest = table.binding(DEFAULT_SAVE_ID, "Farm", 1).unwrap();
        assert_eq!(chest, &HotkeyBinding::object("Chest", "container"));
        let spot = table.binding(DEFAULT_SAVE_ID, "Farm", 2).unwrap();
        assert_eq!(spot, &HotkeyBinding::coordinates(Position::new(12, 7)));
        let pierre = table.binding(DEFAULT_SAVE_ID, "Town", 11).unwrap();
        assert_eq!(pierre, &HotkeyBinding::object("Pierre", "npc"));

        // Rewritten in the nested layout.
        let json = fs::read_to_string(repo.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[""]["Town"]["11"]["Item1"], "Pierre");
    }

    #[test]
    fn test_hand_written_file_loads_without_rewrite() {
        let (_temp, repo) = setup();
        let json = r#"{
            "save-1": {
                "Farm": {
                    "4": { "Item1": "Chest", "Item2": "container" }
                }
            },
            "": {}
        }"#;
        fs::write(repo.path(), json).unwrap();

        let table = repo.load().unwrap().unwrap();

        assert_eq!(
            table.binding("save-1", "Farm", 4),
            Some(&HotkeyBinding::object("Chest", "container"))
        );
        assert!(table.has_save(DEFAULT_SAVE_ID));
        assert_eq!(fs::read_to_string(repo.path()).unwrap(), json);
    }

    #[test]
    fn test_corrupted_file_is_an_error() {
        let (_temp, repo) = setup();
        fs::write(repo.path(), "{ not json").unwrap();

        assert!(matches!(repo.load(), Err(RepositoryError::Json(_))));
    }
}
