//! Category and entry pointers into the latest scan.
//!
//! Scans replace the backing [`ScanResult`](crate::scan::ScanResult) wholesale
//! and may add, drop or reorder entries. [`SelectionTracker`] keeps the user's
//! place across those replacements, preferring to stay on the same object over
//! resetting to the start of a list.
mod tracker;

use thiserror::Error;

use crate::error::{ErrorSeverity, TrackerError};
use crate::scan::Entry;

pub use tracker::SelectionTracker;

/// Snapshot of the selection pointers.
///
/// `None` indices mean "nothing selected". When both `entry_index` and
/// `selected_entry` are set they refer to the same list item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_category: Option<String>,
    pub category_index: Option<usize>,
    pub selected_entry: Option<Entry>,
    pub entry_index: Option<usize>,
}

/// Which end of a list the user tried to move past.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Boundary {
    Start,
    End,
}

impl Boundary {
    /// Classifies an out-of-range index: negative indices hit the start.
    pub fn of(index: isize) -> Self {
        if index < 0 { Self::Start } else { Self::End }
    }
}

/// Selection outcomes that leave the state untouched.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("category '{name}' is not present in the current scan")]
    InvalidCategory { name: String },

    /// The selected category vanished, so no entry index can be applied.
    #[error("no valid category is selected")]
    InvalidEntry,

    #[error("reached the {0} of the list")]
    Boundary(Boundary),

    #[error("the current scan found nothing to track")]
    Empty,
}

impl TrackerError for SelectionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Boundary(_) | Self::Empty => ErrorSeverity::Recoverable,
            Self::InvalidCategory { .. } | Self::InvalidEntry => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCategory { .. } => "SELECTION_INVALID_CATEGORY",
            Self::InvalidEntry => "SELECTION_INVALID_ENTRY",
            Self::Boundary(Boundary::Start) => "SELECTION_START_OF_LIST",
            Self::Boundary(Boundary::End) => "SELECTION_END_OF_LIST",
            Self::Empty => "SELECTION_EMPTY",
        }
    }
}
