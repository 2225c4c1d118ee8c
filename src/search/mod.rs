//! Live search pipeline
//!
//! Keystrokes land in [`SearchState`], the debouncer holds the term until the
//! input has been idle, the worker fetches tag suggestions from the document
//! store, and Enter (or a click) dispatches the committed term across every
//! configured collection.

mod debounce;
mod search_events;
mod search_render;
mod search_state;
mod selection;
mod suggest;
pub mod worker;

pub use debounce::Debouncer;
pub use search_render::{SearchLayout, render_search, suggestion_at};
pub use search_state::SearchState;
pub use selection::SelectionState;
pub use suggest::{Suggestion, derive_suggestions};
pub use worker::{SearchRequest, SearchResponse, SearchTargets, spawn_worker};
