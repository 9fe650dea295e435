//! Hotkey favorites: the persisted binding table and the press recognizer.
//!
//! [`FavoriteTable`] is plain data keyed by save, location and absolute
//! hotkey. [`PressTracker`] turns timed key presses into counts and expiring
//! timers; deciding what a count means is left to the caller.
mod press;
mod table;

pub use press::{DEFAULT_PRESS_INTERVAL, FavoriteKey, Press, PressTracker, SLOTS_PER_STACK, TimerEvent};
pub use table::{
    BindingTarget, COORDINATES_CATEGORY, DEFAULT_SAVE_ID, FavoriteTable, HotkeyBinding,
    LocationFavorites,
};
