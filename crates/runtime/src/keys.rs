//! Translation keys handed to the [`Announcer`](crate::Announcer).
//!
//! The host owns the translated templates; the tracker only picks the key and
//! fills the tokens.

pub const START_OF_LIST: &str = "feature-object_tracker-start_of_list";
pub const END_OF_LIST: &str = "feature-object_tracker-end_of_list";
pub const NO_OBJECTS_FOUND: &str = "feature-object_tracker-no_objects_found";
pub const NO_CATEGORIES_FOUND: &str = "feature-object_tracker-no_categories_found";

/// Tokens: `is_enabled`.
pub const SORT_BY_PROXIMITY: &str = "feature-object_tracker-sort_by_proximity";

/// Tokens: `coordinates`, `player_coordinates`, `direction`, `distance`.
pub const READ_SELECTED_COORDINATES: &str = "feature-object_tracker-read_selected_coordinates";
/// Tokens: `object_name`, `only_tile`, `coordinates`, `player_coordinates`,
/// `direction`, `distance`.
pub const READ_SELECTED_OBJECT: &str = "feature-object_tracker-read_selected_object";

pub const COULD_NOT_FIND_PATH: &str = "feature-object_tracker-could_not_find_path";
/// Tokens: `object_name`, `coordinates`.
pub const MOVING_TO: &str = "feature-object_tracker-moving_to";

/// Tokens: `favorite_number`, `target_object`, `target_category`.
pub const READ_FAVORITE: &str = "feature-object_tracker-read_favorite";
/// Tokens: `favorite_number`.
pub const FAVORITE_UNSET: &str = "feature-object_tracker-favorite_unset";
/// Tokens: `favorite_number`, `selected_object`, `selected_category`.
pub const FAVORITE_SAVE: &str = "feature-object_tracker-favorite_save";
/// Tokens: `favorite_number`, `coordinates`.
pub const FAVORITE_SAVE_COORDINATES: &str = "feature-object_tracker-favorite_save_coordinates";
pub const NO_DESTINATION_SELECTED: &str = "feature-object_tracker-no_destination_selected";
/// Tokens: `favorite_number`.
pub const FAVORITE_CLEARED: &str = "feature-object_tracker-favorite_cleared";
/// Tokens: `stack_number`.
pub const READ_FAVORITE_STACK: &str = "feature-object_tracker-read_favorite_stack";
/// Tokens: `is_enabled`.
pub const SAVE_COORDINATES_TOGGLE: &str = "feature-object_tracker-save_coordinates_toggle";
pub const FAVORITE_SET_AS_DEFAULT: &str = "feature-object_tracker-favorite_set_as_default";
pub const FAVORITE_DEFAULT_CLEARED: &str = "feature-object_tracker-favorite_default_cleared";
