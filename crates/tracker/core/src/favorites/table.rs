use std::collections::BTreeMap;

use crate::state::Position;

/// Save id of the shared row used to seed new saves.
pub const DEFAULT_SAVE_ID: &str = "";

/// Category stored alongside coordinate favorites.
pub const COORDINATES_CATEGORY: &str = "coordinates";

/// `location_id → hotkey → binding` for a single save.
pub type LocationFavorites = BTreeMap<String, BTreeMap<u32, HotkeyBinding>>;

/// What a hotkey slot points at.
///
/// Stored as a loose pair for compatibility with existing favorites files;
/// only bindings with both halves present count as set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HotkeyBinding {
    #[cfg_attr(feature = "serde", serde(rename = "Item1", alias = "name", default))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "Item2", alias = "category", default))]
    pub category: Option<String>,
}

/// A resolved binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindingTarget {
    Coordinates(Position),
    Object { name: String, category: String },
}

impl HotkeyBinding {
    pub fn object(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            category: Some(category.into()),
        }
    }

    pub fn coordinates(position: Position) -> Self {
        Self::object(position.to_coordinates(), COORDINATES_CATEGORY)
    }

    pub fn is_set(&self) -> bool {
        self.name.is_some() && self.category.is_some()
    }

    /// Interprets the binding. A name in `"x, y"` form is a coordinate
    /// regardless of the stored category.
    pub fn target(&self) -> Option<BindingTarget> {
        let (name, category) = (self.name.as_deref()?, self.category.as_deref()?);
        Some(match Position::parse_coordinates(name) {
            Some(position) => BindingTarget::Coordinates(position),
            None => BindingTarget::Object {
                name: name.to_owned(),
                category: category.to_owned(),
            },
        })
    }
}

/// `save_id → location_id → hotkey → binding`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FavoriteTable {
    saves: BTreeMap<String, LocationFavorites>,
}

impl FavoriteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a table that predates per-save rows as the shared default row.
    pub fn from_legacy(locations: LocationFavorites) -> Self {
        let mut table = Self::new();
        table.saves.insert(DEFAULT_SAVE_ID.to_owned(), locations);
        table
    }

    pub fn is_empty(&self) -> bool {
        self.saves.is_empty()
    }

    pub fn has_save(&self, save_id: &str) -> bool {
        self.saves.contains_key(save_id)
    }

    pub fn save(&self, save_id: &str) -> Option<&LocationFavorites> {
        self.saves.get(save_id)
    }

    pub fn saves(&self) -> impl Iterator<Item = &str> {
        self.saves.keys().map(String::as_str)
    }

    pub fn get(&self, save_id: &str, location_id: &str, hotkey: u32) -> Option<&HotkeyBinding> {
        self.saves.get(save_id)?.get(location_id)?.get(&hotkey)
    }

    /// The binding for `hotkey`, only when both name and category are set.
    pub fn binding(&self, save_id: &str, location_id: &str, hotkey: u32) -> Option<&HotkeyBinding> {
        self.get(save_id, location_id, hotkey)
            .filter(|binding| binding.is_set())
    }

    pub fn set(&mut self, save_id: &str, location_id: &str, hotkey: u32, binding: HotkeyBinding) {
        self.saves
            .entry(save_id.to_owned())
            .or_default()
            .entry(location_id.to_owned())
            .or_default()
            .insert(hotkey, binding);
    }

    /// Removes a binding, dropping the location row once it is empty.
    pub fn remove(&mut self, save_id: &str, location_id: &str, hotkey: u32) -> Option<HotkeyBinding> {
        let locations = self.saves.get_mut(save_id)?;
        let slots = locations.get_mut(location_id)?;
        let removed = slots.remove(&hotkey);
        if slots.is_empty() {
            locations.remove(location_id);
        }
        removed
    }

    /// Copies the default row into `save_id` when that save has no row yet.
    ///
    /// Returns true when a copy happened.
    pub fn seed_from_default(&mut self, save_id: &str) -> bool {
        if save_id == DEFAULT_SAVE_ID || self.has_save(save_id) {
            return false;
        }
        match self.saves.get(DEFAULT_SAVE_ID).cloned() {
            Some(defaults) => {
                self.saves.insert(save_id.to_owned(), defaults);
                true
            }
            None => false,
        }
    }

    /// Replaces the default row with a copy of `save_id`'s row.
    pub fn promote_to_default(&mut self, save_id: &str) -> bool {
        match self.saves.get(save_id).cloned() {
            Some(row) => {
                self.saves.insert(DEFAULT_SAVE_ID.to_owned(), row);
                true
            }
            None => false,
        }
    }

    pub fn clear_default(&mut self) -> bool {
        self.saves.remove(DEFAULT_SAVE_ID).is_some()
    }

    /// Default row to carry over when a fresh table replaces this one.
    pub fn default_row(&self) -> Option<&LocationFavorites> {
        self.saves.get(DEFAULT_SAVE_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_get_returns_same_pair() {
        let mut table = FavoriteTable::new();
        table.set("farm-1", "Farm", 3, HotkeyBinding::object("Chest", "container"));

        let binding = table.binding("farm-1", "Farm", 3).unwrap();
        assert_eq!(binding.name.as_deref(), Some("Chest"));
        assert_eq!(binding.category.as_deref(), Some("container"));
    }

    #[test]
    fn delete_clears_slot_and_empty_location_row() {
        let mut table = FavoriteTable::new();
        table.set("farm-1", "Farm", 3, HotkeyBinding::object("Chest", "container"));

        assert!(table.remove("farm-1", "Farm", 3).is_some());

        assert_eq!(table.get("farm-1", "Farm", 3), None);
        assert!(table.has_save("farm-1"));
        assert!(table.save("farm-1").unwrap().is_empty());
    }

    #[test]
    fn half_set_binding_is_not_a_binding() {
        let mut table = FavoriteTable::new();
        let partial = HotkeyBinding {
            name: Some("Chest".into()),
            category: None,
        };
        table.set("s", "Farm", 1, partial);

        assert!(table.get("s", "Farm", 1).is_some());
        assert!(table.binding("s", "Farm", 1).is_none());
    }

    #[test]
    fn seeding_only_fills_missing_saves() {
        let mut table = FavoriteTable::new();
        table.set(DEFAULT_SAVE_ID, "Farm", 1, HotkeyBinding::object("Bin", "container"));
        table.set("existing", "Town", 2, HotkeyBinding::object("Pierre", "npc"));

        assert!(table.seed_from_default("fresh"));
        assert!(!table.seed_from_default("existing"));

        assert!(table.binding("fresh", "Farm", 1).is_some());
        assert!(table.binding("existing", "Farm", 1).is_none());
    }

    #[test]
    fn promote_and_clear_default() {
        let mut table = FavoriteTable::new();
        assert!(!table.promote_to_default("missing"));

        table.set("s", "Farm", 4, HotkeyBinding::coordinates(Position::new(7, 9)));
        assert!(table.promote_to_default("s"));
        assert!(table.binding(DEFAULT_SAVE_ID, "Farm", 4).is_some());

        assert!(table.clear_default());
        assert!(table.default_row().is_none());
        assert!(!table.clear_default());
    }

    #[test]
    fn coordinate_names_resolve_to_positions() {
        let binding = HotkeyBinding::coordinates(Position::new(12, 4));
        assert_eq!(
            binding.target(),
            Some(BindingTarget::Coordinates(Position::new(12, 4)))
        );

        let binding = HotkeyBinding::object("Chest", "container");
        assert_eq!(
            binding.target(),
            Some(BindingTarget::Object {
                name: "Chest".into(),
                category: "container".into(),
            })
        );
        assert_eq!(HotkeyBinding::default().target(), None);
    }
}
