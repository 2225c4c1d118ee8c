//! snapq - interactive tag search for photo-sharing service libraries
//!
//! Type a term and get live tag suggestions fetched from the service's
//! document store, navigate them with the arrow keys, and press Enter to run
//! the search across every configured collection. The merged results open in
//! a scrollable pane.

pub mod app;
pub mod config;
pub mod error;
pub mod results;
pub mod scroll;
pub mod search;
pub mod store;

pub use app::App;
pub use error::SnapqError;
