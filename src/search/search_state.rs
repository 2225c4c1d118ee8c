//! Query session state
//!
//! Owns the search input, the debounce deadline, the suggestion list and its
//! selection, and the channel to the search worker. One session exists per
//! app; dropping it drops any pending debounce fire and closes the worker's
//! request channel.

use std::sync::mpsc::Sender;
use std::time::Instant;

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

use super::debounce::Debouncer;
use super::selection::SelectionState;
use super::suggest::Suggestion;
use super::worker::SearchRequest;

/// Live search session state
pub struct SearchState {
    pub input: TextArea<'static>,
    /// True while the user is mid-search and the suggestion popup is shown
    pub typing: bool,
    pub suggestions: Vec<Suggestion>,
    pub selection: SelectionState,
    /// First visible row of the suggestion list window
    pub list_offset: usize,
    debouncer: Debouncer,
    request_tx: Option<Sender<SearchRequest>>,
    /// Monotonic id source shared by suggestion and dispatch requests
    next_request_id: u64,
    /// Id of the newest suggestion request; older responses are stale
    newest_suggest_id: Option<u64>,
    /// Id of the in-flight dispatch, if any
    pending_dispatch_id: Option<u64>,
}

impl SearchState {
    pub fn new(debounce_ms: u64) -> Self {
        let mut input = TextArea::default();
        input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        input.set_cursor_line_style(Style::default());

        Self {
            input,
            typing: false,
            suggestions: Vec::new(),
            selection: SelectionState::new(),
            list_offset: 0,
            debouncer: Debouncer::new(debounce_ms),
            request_tx: None,
            next_request_id: 0,
            newest_suggest_id: None,
            pending_dispatch_id: None,
        }
    }

    /// Connect the session to the worker's request channel
    pub fn set_request_channel(&mut self, request_tx: Sender<SearchRequest>) {
        self.request_tx = Some(request_tx);
    }

    /// Current input text
    pub fn term(&self) -> &str {
        self.input.lines()[0].as_ref()
    }

    /// React to an input edit: restart the idle interval with the new term
    /// and drop any stale highlight
    pub fn on_term_changed(&mut self) {
        let term = self.term().to_string();
        self.typing = !term.is_empty();
        self.selection.clear();
        self.debouncer.schedule(term);
    }

    /// Fire the debouncer if its deadline has passed
    pub fn tick(&mut self, now: Instant) {
        if let Some(term) = self.debouncer.poll(now) {
            self.fetch_suggestions(term);
        }
    }

    /// Time left until the pending debounce fire, for the event-loop timeout
    pub fn time_until_fire(&self, now: Instant) -> Option<std::time::Duration> {
        self.debouncer.time_until_fire(now)
    }

    /// Fire the pending debounce immediately (test hook)
    pub fn flush_debounce(&mut self) {
        if let Some(term) = self.debouncer.flush() {
            self.fetch_suggestions(term);
        }
    }

    /// Request suggestions for `term`
    ///
    /// An empty or whitespace-only term clears the list without a request.
    fn fetch_suggestions(&mut self, term: String) {
        if term.trim().is_empty() {
            self.suggestions.clear();
            self.selection.clear();
            self.list_offset = 0;
            return;
        }

        let request_id = self.next_id();
        self.newest_suggest_id = Some(request_id);
        self.send(SearchRequest::Suggest { term, request_id });
    }

    /// Install a suggestion response, unless a newer request has superseded it
    pub fn apply_suggestions(&mut self, suggestions: Vec<Suggestion>, request_id: u64) {
        if self.newest_suggest_id != Some(request_id) {
            log::debug!("Discarding stale suggestion response {}", request_id);
            return;
        }
        self.suggestions = suggestions;
        self.selection.clear();
        self.list_offset = 0;
    }

    /// Commit a term: dispatch it across every configured collection
    ///
    /// Returns false when the term is blank and nothing was sent.
    pub fn commit(&mut self, term: &str) -> bool {
        if term.trim().is_empty() {
            return false;
        }

        // The commit supersedes any pending suggestion fetch
        self.debouncer.cancel();

        let request_id = self.next_id();
        self.pending_dispatch_id = Some(request_id);
        self.send(SearchRequest::Dispatch {
            term: term.to_string(),
            request_id,
        })
    }

    /// Commit the highlighted suggestion, or the raw input when none is
    /// highlighted
    pub fn commit_current(&mut self) -> bool {
        match self.selection.selected() {
            Some(index) => {
                let tag = self.suggestions[index].tag.clone();
                self.commit(&tag)
            }
            None => {
                let term = self.term().to_string();
                self.commit(&term)
            }
        }
    }

    /// Settle the in-flight dispatch
    ///
    /// Returns true when `request_id` matches the dispatch this session is
    /// waiting for. The typing display resets either way a dispatch ends.
    pub fn settle_dispatch(&mut self, request_id: u64) -> bool {
        if self.pending_dispatch_id != Some(request_id) {
            log::debug!("Discarding stale dispatch response {}", request_id);
            return false;
        }
        self.pending_dispatch_id = None;
        self.typing = false;
        true
    }

    /// Dismiss the suggestion popup, keeping the input text
    pub fn dismiss(&mut self) {
        self.typing = false;
        self.suggestions.clear();
        self.selection.clear();
        self.list_offset = 0;
        self.debouncer.cancel();
    }

    /// Keep the highlighted row inside the visible window
    pub fn ensure_selection_visible(&mut self, visible_rows: usize) {
        if visible_rows == 0 {
            return;
        }
        let max_offset = self.suggestions.len().saturating_sub(visible_rows);
        self.list_offset = self.list_offset.min(max_offset);

        if let Some(selected) = self.selection.selected() {
            if selected < self.list_offset {
                self.list_offset = selected;
            } else if selected >= self.list_offset + visible_rows {
                self.list_offset = selected + 1 - visible_rows;
            }
        }
    }

    fn next_id(&mut self) -> u64 {
        self.next_request_id = self.next_request_id.wrapping_add(1);
        self.next_request_id
    }

    fn send(&mut self, request: SearchRequest) -> bool {
        match &self.request_tx {
            Some(tx) => tx.send(request).is_ok(),
            None => {
                log::debug!("No search worker connected; request dropped");
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
