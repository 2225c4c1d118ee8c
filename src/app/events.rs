use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::state::{App, View};
use crate::search::suggestion_at;

impl App {
    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Try global keys first
        if self.handle_global_keys(key) {
            return;
        }

        match self.view {
            View::Search => self.search.handle_key(key),
            View::Results => {
                if let Some(results) = &mut self.results
                    && results.handle_key(key)
                {
                    self.close_results();
                }
            }
        }
    }

    /// Handle global keys that work regardless of the active view
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C / Ctrl+Q: Exit application
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.should_quit = true;
            return true;
        }

        // q: Exit from the results pane ('q' is a search character otherwise)
        if key.code == KeyCode::Char('q')
            && !key.modifiers.contains(KeyModifiers::CONTROL)
            && self.view == View::Results
        {
            self.should_quit = true;
            return true;
        }

        false
    }

    /// Handle mouse events
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if self.view == View::Search => {
                self.handle_suggestion_click(mouse.column, mouse.row);
            }
            MouseEventKind::ScrollDown if self.view == View::Results => {
                if let Some(results) = &mut self.results {
                    results.scroll.scroll_down(1);
                }
            }
            MouseEventKind::ScrollUp if self.view == View::Results => {
                if let Some(results) = &mut self.results {
                    results.scroll.scroll_up(1);
                }
            }
            _ => {}
        }
    }

    /// A click on a suggestion row commits that suggestion
    fn handle_suggestion_click(&mut self, column: u16, row: u16) {
        if let Some(index) = suggestion_at(&self.layout, self.search.list_offset, column, row)
            && index < self.search.suggestions.len()
        {
            let tag = self.search.suggestions[index].tag.clone();
            self.search.commit(&tag);
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
