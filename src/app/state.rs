use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::results::ResultsState;
use crate::search::{SearchLayout, SearchRequest, SearchResponse, SearchState};

/// Idle tick interval when no debounce deadline is pending
const DEFAULT_TICK: Duration = Duration::from_millis(100);

/// Which surface is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Search,
    Results,
}

/// Application state
pub struct App {
    pub view: View,
    pub search: SearchState,
    /// Payload of the last dispatched search; transient, never persisted
    pub results: Option<ResultsState>,
    /// Regions the search surface occupied last frame, for mouse hit-testing
    pub layout: SearchLayout,
    pub should_quit: bool,
    response_rx: Option<Receiver<SearchResponse>>,
}

impl App {
    /// Create a new App instance from validated configuration
    pub fn new(config: &Config) -> Self {
        Self {
            view: View::Search,
            search: SearchState::new(config.search.debounce_ms),
            results: None,
            layout: SearchLayout::default(),
            should_quit: false,
            response_rx: None,
        }
    }

    /// Connect the app to the search worker's channels
    pub fn set_channels(
        &mut self,
        request_tx: Sender<SearchRequest>,
        response_rx: Receiver<SearchResponse>,
    ) {
        self.search.set_request_channel(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// How long the event loop may block before the next tick
    ///
    /// Bounded by the pending debounce deadline so a fire is not held until
    /// the next input event.
    pub fn tick_timeout(&self) -> Duration {
        match self.search.time_until_fire(Instant::now()) {
            Some(remaining) => remaining.min(DEFAULT_TICK),
            None => DEFAULT_TICK,
        }
    }

    /// Drain worker responses and fire any due debounce
    pub fn on_tick(&mut self) {
        loop {
            let response = match &self.response_rx {
                Some(rx) => rx.try_recv(),
                None => break,
            };
            match response {
                Ok(response) => self.handle_response(response),
                Err(_) => break,
            }
        }

        self.search.tick(Instant::now());
    }

    /// Apply one worker response to the session
    pub fn handle_response(&mut self, response: SearchResponse) {
        match response {
            SearchResponse::Suggestions {
                suggestions,
                request_id,
            } => {
                self.search.apply_suggestions(suggestions, request_id);
            }
            SearchResponse::Results {
                documents,
                term,
                request_id,
            } => {
                if self.search.settle_dispatch(request_id) {
                    self.search.dismiss();
                    self.results = Some(ResultsState::new(term, documents));
                    self.view = View::Results;
                }
            }
            SearchResponse::DispatchFailed { request_id } => {
                // The failure itself was already logged by the worker; the
                // typing display resets and the user stays on the input
                self.search.settle_dispatch(request_id);
            }
        }
    }

    /// Leave the results pane and return focus to the search input
    pub fn close_results(&mut self) {
        self.view = View::Search;
        self.results = None;
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
