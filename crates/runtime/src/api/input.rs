use tracker_core::FavoriteKey;

/// Logical actions the tracker reacts to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TrackerAction {
    CycleCategoryUp,
    CycleCategoryDown,
    CycleObjectUp,
    CycleObjectDown,
    ReadSelected,
    ReadSelectedTile,
    MoveToSelected,
    ToggleSort,
    CancelAutoWalk,
    Favorite1,
    Favorite2,
    Favorite3,
    Favorite4,
    Favorite5,
    Favorite6,
    Favorite7,
    Favorite8,
    Favorite9,
    Favorite10,
    FavoriteStackDown,
    FavoriteStackUp,
    FavoriteCoordinatesToggle,
    FavoriteSaveDefault,
}

impl TrackerAction {
    /// Favorite keys in the order they are checked each update.
    pub const FAVORITES: [TrackerAction; 14] = [
        Self::Favorite1,
        Self::Favorite2,
        Self::Favorite3,
        Self::Favorite4,
        Self::Favorite5,
        Self::Favorite6,
        Self::Favorite7,
        Self::Favorite8,
        Self::Favorite9,
        Self::Favorite10,
        Self::FavoriteStackDown,
        Self::FavoriteStackUp,
        Self::FavoriteCoordinatesToggle,
        Self::FavoriteSaveDefault,
    ];

    pub fn favorite_key(self) -> Option<FavoriteKey> {
        let key = match self {
            Self::Favorite1 => FavoriteKey::Slot(1),
            Self::Favorite2 => FavoriteKey::Slot(2),
            Self::Favorite3 => FavoriteKey::Slot(3),
            Self::Favorite4 => FavoriteKey::Slot(4),
            Self::Favorite5 => FavoriteKey::Slot(5),
            Self::Favorite6 => FavoriteKey::Slot(6),
            Self::Favorite7 => FavoriteKey::Slot(7),
            Self::Favorite8 => FavoriteKey::Slot(8),
            Self::Favorite9 => FavoriteKey::Slot(9),
            Self::Favorite10 => FavoriteKey::Slot(10),
            Self::FavoriteStackDown => FavoriteKey::StackDown,
            Self::FavoriteStackUp => FavoriteKey::StackUp,
            Self::FavoriteCoordinatesToggle => FavoriteKey::CoordinatesToggle,
            Self::FavoriteSaveDefault => FavoriteKey::SaveDefault,
            _ => return None,
        };
        Some(key)
    }
}

/// Per-update view of which bound actions were just pressed.
pub trait InputState {
    fn just_pressed(&self, action: TrackerAction) -> bool;

    /// True when any key at all went down this update, bound or not.
    fn any_pressed(&self) -> bool;
}
