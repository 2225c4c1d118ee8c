//! Key handling for the search session

use crossterm::event::{KeyCode, KeyEvent};

use super::search_state::SearchState;

impl SearchState {
    /// Handle a key press while the search input is active
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            // Navigation over the suggestion list
            KeyCode::Down => {
                self.selection.select_next(self.suggestions.len());
            }
            KeyCode::Up => {
                self.selection.select_previous();
            }
            // Commit the highlighted suggestion, or the raw term
            KeyCode::Enter => {
                self.commit_current();
            }
            // Dismiss the popup, keep the typed text
            KeyCode::Esc => {
                self.dismiss();
            }
            // Everything else edits the input
            _ => {
                let before = self.term().to_string();
                self.input.input(key);
                if self.term() != before {
                    self.on_term_changed();
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "search_events_tests.rs"]
mod search_events_tests;
