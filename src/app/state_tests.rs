//! Tests for app-level state and worker response handling

use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use super::{App, View};
use crate::config::{Config, SearchConfig, ServiceConfig};
use crate::search::worker::SearchRequest;
use crate::search::{SearchResponse, Suggestion};
use crate::store::Document;

fn test_config() -> Config {
    Config {
        service: ServiceConfig {
            endpoint: "https://store.example.com/v1".to_string(),
            project: "proj".to_string(),
            database_id: "db".to_string(),
            post_collection_id: "posts".to_string(),
            other_collection_ids: vec!["articles".to_string()],
            api_key: None,
        },
        search: SearchConfig {
            debounce_ms: 300,
            suggestion_limit: 25,
        },
    }
}

fn connected_app() -> (App, Receiver<SearchRequest>) {
    let (request_tx, request_rx) = mpsc::channel();
    let (_response_tx, response_rx) = mpsc::channel();
    let mut app = App::new(&test_config());
    app.set_channels(request_tx, response_rx);
    (app, request_rx)
}

fn doc(id: &str) -> Document {
    serde_json::from_value(serde_json::json!({ "$id": id })).unwrap()
}

fn suggestion(tag: &str) -> Suggestion {
    Suggestion {
        id: "0".to_string(),
        tag: tag.to_string(),
        result_count: 1,
    }
}

fn commit_and_get_id(app: &mut App, request_rx: &Receiver<SearchRequest>, term: &str) -> u64 {
    app.search.input.insert_str(term);
    app.search.on_term_changed();
    app.search.commit_current();
    match request_rx.try_recv().unwrap() {
        SearchRequest::Dispatch { request_id, .. } => request_id,
        other => panic!("expected a dispatch, got {:?}", other),
    }
}

#[test]
fn test_app_starts_on_search_view() {
    let app = App::new(&test_config());
    assert_eq!(app.view, View::Search);
    assert!(app.results.is_none());
    assert!(!app.should_quit());
}

#[test]
fn test_dispatch_results_open_results_view() {
    let (mut app, request_rx) = connected_app();
    let request_id = commit_and_get_id(&mut app, &request_rx, "sunset");

    app.handle_response(SearchResponse::Results {
        documents: vec![doc("p1"), doc("a1")],
        term: "sunset".to_string(),
        request_id,
    });

    assert_eq!(app.view, View::Results);
    let results = app.results.as_ref().unwrap();
    assert_eq!(results.term, "sunset");
    assert_eq!(results.documents.len(), 2);
    assert!(!app.search.typing, "typing display resets on arrival");
}

#[test]
fn test_stale_dispatch_response_ignored() {
    let (mut app, request_rx) = connected_app();
    let first = commit_and_get_id(&mut app, &request_rx, "sun");
    let second = commit_and_get_id(&mut app, &request_rx, "set");

    app.handle_response(SearchResponse::Results {
        documents: vec![doc("old")],
        term: "sun".to_string(),
        request_id: first,
    });
    assert_eq!(app.view, View::Search, "superseded dispatch must not land");

    app.handle_response(SearchResponse::Results {
        documents: vec![doc("new")],
        term: "sunset".to_string(),
        request_id: second,
    });
    assert_eq!(app.view, View::Results);
}

#[test]
fn test_dispatch_failure_resets_typing_and_stays_on_search() {
    let (mut app, request_rx) = connected_app();
    let request_id = commit_and_get_id(&mut app, &request_rx, "sunset");
    assert!(app.search.typing);

    app.handle_response(SearchResponse::DispatchFailed { request_id });

    assert_eq!(app.view, View::Search);
    assert!(app.results.is_none());
    assert!(!app.search.typing);
}

#[test]
fn test_suggestion_response_reaches_session() {
    let (mut app, request_rx) = connected_app();
    app.search.input.insert_str("cat");
    app.search.on_term_changed();
    app.search.flush_debounce();
    let request_id = match request_rx.try_recv().unwrap() {
        SearchRequest::Suggest { request_id, .. } => request_id,
        other => panic!("expected a suggest request, got {:?}", other),
    };

    app.handle_response(SearchResponse::Suggestions {
        suggestions: vec![suggestion("cats")],
        request_id,
    });

    assert_eq!(app.search.suggestions.len(), 1);
}

#[test]
fn test_on_tick_drains_responses_in_order() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let mut app = App::new(&test_config());
    app.set_channels(request_tx, response_rx);

    let request_id = commit_and_get_id(&mut app, &request_rx, "sunset");
    response_tx
        .send(SearchResponse::Results {
            documents: vec![doc("p1")],
            term: "sunset".to_string(),
            request_id,
        })
        .unwrap();

    app.on_tick();
    assert_eq!(app.view, View::Results);
}

#[test]
fn test_close_results_returns_to_search() {
    let (mut app, request_rx) = connected_app();
    let request_id = commit_and_get_id(&mut app, &request_rx, "sunset");
    app.handle_response(SearchResponse::Results {
        documents: vec![],
        term: "sunset".to_string(),
        request_id,
    });
    assert_eq!(app.view, View::Results);

    app.close_results();
    assert_eq!(app.view, View::Search);
    assert!(app.results.is_none(), "payload is discarded, not kept");
}

#[test]
fn test_tick_timeout_bounded_by_debounce_deadline() {
    let (mut app, _request_rx) = connected_app();

    // Idle: default tick
    assert_eq!(app.tick_timeout(), Duration::from_millis(100));

    // Pending debounce shorter than the default tick wins
    let mut short = App::new(&Config {
        search: SearchConfig {
            debounce_ms: 20,
            suggestion_limit: 25,
        },
        ..test_config()
    });
    short.search.input.insert_str("c");
    short.search.on_term_changed();
    assert!(short.tick_timeout() <= Duration::from_millis(20));

    // Pending debounce longer than the default tick does not stretch it
    app.search.input.insert_str("c");
    app.search.on_term_changed();
    assert!(app.tick_timeout() <= Duration::from_millis(100));
}
