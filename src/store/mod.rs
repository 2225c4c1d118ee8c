//! Document-store client
//!
//! Thin REST client for the photo-sharing service's document store. The only
//! capability the app consumes is a filtered document listing; the query
//! language is composed with [`Query`] and serialized the way the service's
//! own SDKs do it.

mod client;
mod query;
mod types;

use thiserror::Error;

pub use client::StoreClient;
pub use query::Query;
pub use types::{Document, DocumentList};

/// Errors that can occur talking to the document store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Network error during the request
    #[error("Network error: {0}")]
    Network(String),

    /// The store returned an error response
    #[error("Store error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    Parse(String),
}
