//! Selection state for suggestion navigation
//!
//! Tracks which suggestion row the arrow keys have highlighted, if any.

/// Selection over the suggestion list
///
/// `None` means the input itself is active and Enter commits the raw term.
/// Navigation clamps at the list edges rather than wrapping: ArrowDown stops
/// on the last row, ArrowUp walks back off the list onto the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// Currently highlighted row
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Drop the highlight back onto the input
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Move the highlight one row down, clamping at the last row
    pub fn select_next(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(current) => (current + 1).min(count - 1),
            None => 0,
        });
    }

    /// Move the highlight one row up; from the first row it returns to the
    /// input
    pub fn select_previous(&mut self) {
        self.selected = match self.selected {
            Some(0) | None => None,
            Some(current) => Some(current - 1),
        };
    }

    /// Re-establish the range invariant after the list changed size
    pub fn clamp(&mut self, count: usize) {
        self.selected = match self.selected {
            Some(_) if count == 0 => None,
            Some(current) => Some(current.min(count - 1)),
            None => None,
        };
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
