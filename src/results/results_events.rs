//! Key handling for the results pane

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::results_state::ResultsState;

impl ResultsState {
    /// Handle a key press while the results pane is active
    ///
    /// Returns true when the pane should close and focus return to the
    /// search input.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('j') | KeyCode::Down => self.scroll.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll.scroll_up(1),
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.scroll.page_down();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.scroll.page_up();
            }
            KeyCode::PageDown => self.scroll.page_down(),
            KeyCode::PageUp => self.scroll.page_up(),
            KeyCode::Char('g') | KeyCode::Home => self.scroll.jump_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.scroll.jump_to_bottom(),
            _ => {}
        }
        false
    }
}
