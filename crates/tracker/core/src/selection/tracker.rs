use crate::scan::{Entry, ScanResult};

use super::{Boundary, SelectionError, SelectionState};

/// Owns the latest scan and the pointers into it.
///
/// Every failing operation leaves the state exactly as it was.
#[derive(Clone, Debug, Default)]
pub struct SelectionTracker {
    results: ScanResult,
    state: SelectionState,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &ScanResult {
        &self.results
    }

    /// Raw pointer snapshot. Prefer the resolving accessors for reads.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Swaps in a fresh scan. Pointers are re-derived lazily on next access.
    pub fn replace_results(&mut self, results: ScanResult) {
        self.results = results;
    }

    /// Drops both the results and the selection.
    pub fn clear(&mut self) {
        self.results.clear();
        self.state = SelectionState::default();
    }

    /// The selected category, provided it still exists in the current scan.
    pub fn selected_category(&self) -> Option<&str> {
        self.state
            .selected_category
            .as_deref()
            .filter(|category| self.results.contains_category(category))
    }

    pub fn category_index(&self) -> Option<usize> {
        self.selected_category()
            .and_then(|category| self.results.category_index(category))
    }

    /// Selects `name` and moves to its first entry.
    pub fn set_category(&mut self, name: &str) -> Result<(), SelectionError> {
        let Some(first) = self.results.entries(name).and_then(<[Entry]>::first) else {
            return Err(SelectionError::InvalidCategory {
                name: name.to_owned(),
            });
        };

        self.state = SelectionState {
            selected_category: Some(name.to_owned()),
            category_index: self.results.category_index(name),
            selected_entry: Some(first.clone()),
            entry_index: Some(0),
        };
        Ok(())
    }

    /// Selects the `index`-th category in ordinal order.
    pub fn set_category_index(&mut self, index: isize) -> Result<(), SelectionError> {
        let category = usize::try_from(index)
            .ok()
            .and_then(|index| self.results.category_at(index))
            .map(str::to_owned)
            .ok_or(SelectionError::Boundary(Boundary::of(index)))?;

        self.set_category(&category)
    }

    /// Moves to the `index`-th entry of the selected category.
    pub fn set_entry_index(&mut self, index: isize) -> Result<(), SelectionError> {
        let entries = self
            .selected_category()
            .and_then(|category| self.results.entries(category))
            .ok_or(SelectionError::InvalidEntry)?;

        let (index, entry) = usize::try_from(index)
            .ok()
            .and_then(|index| Some((index, entries.get(index)?.clone())))
            .ok_or(SelectionError::Boundary(Boundary::of(index)))?;

        self.state.entry_index = Some(index);
        self.state.selected_entry = Some(entry);
        self.state.category_index = self.category_index();
        Ok(())
    }

    /// Resolves the selected entry's index against the current scan.
    ///
    /// Tries the stored index, then the stored entry's new position, then
    /// clamps the stored index to the end of the list. Whatever is found is
    /// written back so index and entry agree. Returns `None` when no category
    /// is selected or it vanished from the latest scan.
    pub fn selected_entry_index(&mut self) -> Option<usize> {
        let (index, entry) = {
            let category = self.selected_category()?;
            let entries = self.results.entries(category)?;
            let index = match self.locate_entry(entries) {
                Some(index) => index,
                None => self
                    .state
                    .entry_index
                    .unwrap_or(0)
                    .min(entries.len().checked_sub(1)?),
            };
            (index, entries[index].clone())
        };

        self.state.entry_index = Some(index);
        self.state.selected_entry = Some(entry);
        self.state.category_index = self.category_index();
        Some(index)
    }

    pub fn selected_entry(&mut self) -> Option<&Entry> {
        self.selected_entry_index()?;
        self.state.selected_entry.as_ref()
    }

    /// Puts focus on a sensible first object.
    ///
    /// With a surviving category and `force_category` unset, only the entry
    /// is checked, snapping to index 0 when the old entry is gone. Otherwise
    /// the first category is selected.
    pub fn reset_focus(&mut self, force_category: bool) -> Result<(), SelectionError> {
        if self.results.is_empty() {
            return Err(SelectionError::Empty);
        }

        let kept = (!force_category)
            .then(|| self.selected_category())
            .flatten()
            .and_then(|category| self.results.entries(category));

        match kept {
            Some(entries) => {
                if let Some(index) = self.locate_entry(entries) {
                    let entry = entries[index].clone();
                    self.state.entry_index = Some(index);
                    self.state.selected_entry = Some(entry);
                    self.state.category_index = self.category_index();
                    Ok(())
                } else {
                    self.set_entry_index(0)
                }
            }
            None => self.set_category_index(0),
        }
    }

    /// Moves to the first entry of the selected category, or of the first
    /// category when the selected one is gone.
    pub fn focus_first_entry(&mut self) -> Result<(), SelectionError> {
        if self.results.is_empty() {
            return Err(SelectionError::Empty);
        }

        match self.selected_category() {
            Some(_) => self.set_entry_index(0),
            None => self.set_category_index(0),
        }
    }

    /// Steps the category pointer by `delta`, starting from before the first
    /// category when none is selected.
    pub fn cycle_category(&mut self, delta: isize) -> Result<(), SelectionError> {
        let current = self.category_index().map_or(-1, |index| index as isize);
        self.set_category_index(current + delta)
    }

    /// Steps the entry pointer by `delta` within the selected category.
    pub fn cycle_entry(&mut self, delta: isize) -> Result<(), SelectionError> {
        let current = self.selected_entry_index().map_or(-1, |index| index as isize);
        self.set_entry_index(current + delta)
    }

    /// Selects the first entry named `name` in the selected category.
    pub fn select_entry_named(&mut self, name: &str) -> Option<usize> {
        let index = self
            .selected_category()
            .and_then(|category| self.results.entries(category))?
            .iter()
            .position(|entry| entry.name == name)?;
        self.set_entry_index(index as isize).ok()?;
        Some(index)
    }

    /// Steps 1 and 2 of index resolution: the stored index if it still holds
    /// the stored entry, otherwise the stored entry's current position.
    fn locate_entry(&self, entries: &[Entry]) -> Option<usize> {
        let selected = self.state.selected_entry.as_ref()?;
        self.state
            .entry_index
            .filter(|&index| entries.get(index) == Some(selected))
            .or_else(|| entries.iter().position(|entry| entry == selected))
    }
}
