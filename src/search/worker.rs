//! Search worker thread
//!
//! Runs the document-store requests in a background thread so the UI never
//! blocks on the network. Receives requests via channel, drives the HTTP
//! client on a local async runtime, and sends responses back to the main
//! thread. Every request carries the caller's id and every response echoes
//! it, so the session can drop responses that a newer request has superseded.

use std::sync::mpsc::{Receiver, Sender};

use futures::future::try_join_all;

use super::suggest::{Suggestion, derive_suggestions};
use crate::config::Config;
use crate::store::{Document, DocumentList, Query, StoreClient, StoreError};

/// Collections a search runs against
#[derive(Debug, Clone)]
pub struct SearchTargets {
    pub database_id: String,
    /// Primary collection; its matches lead the merged result order
    pub post_collection_id: String,
    /// Auxiliary collections, merged after the primary in this order
    pub other_collection_ids: Vec<String>,
    /// Page size for the suggestion source query
    pub suggestion_limit: u64,
}

impl SearchTargets {
    pub fn from_config(config: &Config) -> Self {
        Self {
            database_id: config.service.database_id.clone(),
            post_collection_id: config.service.post_collection_id.clone(),
            other_collection_ids: config.service.other_collection_ids.clone(),
            suggestion_limit: config.search.suggestion_limit,
        }
    }
}

/// Request messages sent to the search worker thread
#[derive(Debug)]
pub enum SearchRequest {
    /// Fetch tag suggestions for a partial term
    Suggest { term: String, request_id: u64 },
    /// Run the committed term across every configured collection
    Dispatch { term: String, request_id: u64 },
}

/// Response messages received from the search worker thread
#[derive(Debug)]
pub enum SearchResponse {
    /// Suggestion list for the request; empty on fetch failure
    Suggestions {
        suggestions: Vec<Suggestion>,
        request_id: u64,
    },
    /// Merged documents of a completed dispatch
    Results {
        documents: Vec<Document>,
        term: String,
        request_id: u64,
    },
    /// A dispatch aborted because one of its requests failed
    DispatchFailed { request_id: u64 },
}

/// Spawn the search worker thread
///
/// The worker runs until the request channel closes, which happens when the
/// owning session is dropped.
pub fn spawn_worker(
    client: StoreClient,
    targets: SearchTargets,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    std::thread::spawn(move || match build_runtime() {
        Ok(runtime) => worker_loop(&runtime, &client, &targets, &request_rx, &response_tx),
        Err(e) => log::error!("Search worker failed to start: {}", e),
    });
}

fn build_runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    runtime: &tokio::runtime::Runtime,
    client: &StoreClient,
    targets: &SearchTargets,
    request_rx: &Receiver<SearchRequest>,
    response_tx: &Sender<SearchResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        // Keystrokes can outrun the network; only the newest queued request
        // of each kind still matters
        let request = drain_to_latest(request, request_rx);

        let response = match request {
            SearchRequest::Suggest { term, request_id } => {
                let suggestions =
                    runtime.block_on(fetch_suggestions(client, targets, &term));
                SearchResponse::Suggestions {
                    suggestions,
                    request_id,
                }
            }
            SearchRequest::Dispatch { term, request_id } => {
                match runtime.block_on(dispatch_search(client, targets, &term)) {
                    Ok(documents) => SearchResponse::Results {
                        documents,
                        term,
                        request_id,
                    },
                    Err(e) => {
                        log::warn!("Search dispatch for {:?} failed: {}", term, e);
                        SearchResponse::DispatchFailed { request_id }
                    }
                }
            }
        };

        if response_tx.send(response).is_err() {
            // Main thread disconnected
            return;
        }
    }

    log::debug!("Search worker thread shutting down");
}

/// Collapse a queued run of suggestion requests down to the newest one
///
/// A dispatch is never skipped; it stops the drain so commit order is
/// preserved.
fn drain_to_latest(request: SearchRequest, request_rx: &Receiver<SearchRequest>) -> SearchRequest {
    let mut latest = request;
    if matches!(latest, SearchRequest::Dispatch { .. }) {
        return latest;
    }
    while let Ok(next) = request_rx.try_recv() {
        log::debug!("Superseding queued suggestion request");
        let stop = matches!(next, SearchRequest::Dispatch { .. });
        latest = next;
        if stop {
            break;
        }
    }
    latest
}

/// Fetch suggestion source documents and derive the tag list
///
/// Searches the primary collection's `tags` and `description` fields
/// disjunctively. Any failure degrades to an empty list; suggestion fetches
/// never surface errors.
async fn fetch_suggestions(
    client: &StoreClient,
    targets: &SearchTargets,
    term: &str,
) -> Vec<Suggestion> {
    let queries = vec![
        Query::or(vec![
            Query::search("tags", term),
            Query::search("description", term),
        ]),
        Query::limit(targets.suggestion_limit),
    ];

    match client
        .list_documents(&targets.database_id, &targets.post_collection_id, &queries)
        .await
    {
        Ok(list) => derive_suggestions(&list.documents, term),
        Err(e) => {
            log::warn!("Error fetching suggestions: {}", e);
            Vec::new()
        }
    }
}

/// Run the committed term against the primary and every auxiliary collection
///
/// All requests must succeed; the first failure aborts the whole dispatch.
async fn dispatch_search(
    client: &StoreClient,
    targets: &SearchTargets,
    term: &str,
) -> Result<Vec<Document>, StoreError> {
    let queries = vec![Query::search("tags", term)];

    let primary = client.list_documents(&targets.database_id, &targets.post_collection_id, &queries);
    let others = try_join_all(
        targets
            .other_collection_ids
            .iter()
            .map(|collection_id| {
                client.list_documents(&targets.database_id, collection_id, &queries)
            }),
    );

    let (primary, others) = tokio::try_join!(primary, others)?;
    Ok(merge_documents(primary, others))
}

/// Concatenate result lists, primary matches first, then each auxiliary
/// collection in configured order
fn merge_documents(primary: DocumentList, others: Vec<DocumentList>) -> Vec<Document> {
    let mut merged = primary.documents;
    for list in others {
        merged.extend(list.documents);
    }
    merged
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
