//! Merged search results view
//!
//! Holds the transient payload of a dispatched search: the committed term and
//! the documents merged across every collection, in dispatch order. Nothing
//! here is persisted; leaving the view or quitting discards it.

mod results_events;
mod results_render;
mod results_state;

pub use results_render::render_results;
pub use results_state::ResultsState;
