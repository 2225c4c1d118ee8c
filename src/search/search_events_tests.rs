//! Tests for search key handling

use std::sync::mpsc::{self, Receiver};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::SearchState;
use crate::search::Suggestion;
use crate::search::worker::SearchRequest;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn state_with_suggestions(tags: &[&str]) -> (SearchState, Receiver<SearchRequest>) {
    let (tx, rx) = mpsc::channel();
    let mut state = SearchState::new(300);
    state.set_request_channel(tx);
    state.suggestions = tags
        .iter()
        .enumerate()
        .map(|(i, tag)| Suggestion {
            id: i.to_string(),
            tag: tag.to_string(),
            result_count: 1,
        })
        .collect();
    (state, rx)
}

#[test]
fn test_typed_characters_restart_the_debounce() {
    let (mut state, rx) = state_with_suggestions(&[]);

    state.handle_key(key(KeyCode::Char('c')));
    state.handle_key(key(KeyCode::Char('a')));
    state.handle_key(key(KeyCode::Char('t')));

    assert_eq!(state.term(), "cat");
    assert!(state.typing);

    state.flush_debounce();
    match rx.try_recv().unwrap() {
        SearchRequest::Suggest { term, .. } => assert_eq!(term, "cat"),
        other => panic!("expected a suggest request, got {:?}", other),
    }
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_backspace_to_empty_clears_suggestions() {
    let (mut state, _rx) = state_with_suggestions(&["cats"]);
    state.handle_key(key(KeyCode::Char('c')));
    state.handle_key(key(KeyCode::Backspace));

    assert_eq!(state.term(), "");
    assert!(!state.typing);

    state.flush_debounce();
    assert!(state.suggestions.is_empty());
}

#[test]
fn test_arrow_down_walks_and_clamps() {
    let (mut state, _rx) = state_with_suggestions(&["a", "b"]);

    state.handle_key(key(KeyCode::Down));
    assert_eq!(state.selection.selected(), Some(0));
    state.handle_key(key(KeyCode::Down));
    assert_eq!(state.selection.selected(), Some(1));
    state.handle_key(key(KeyCode::Down));
    assert_eq!(state.selection.selected(), Some(1), "clamped at last row");
}

#[test]
fn test_arrow_up_floors_at_input() {
    let (mut state, _rx) = state_with_suggestions(&["a", "b"]);
    state.handle_key(key(KeyCode::Down));

    state.handle_key(key(KeyCode::Up));
    assert_eq!(state.selection.selected(), None);
    state.handle_key(key(KeyCode::Up));
    assert_eq!(state.selection.selected(), None, "stays on the input");
}

#[test]
fn test_arrow_down_with_no_suggestions_is_noop() {
    let (mut state, _rx) = state_with_suggestions(&[]);
    state.handle_key(key(KeyCode::Down));
    assert_eq!(state.selection.selected(), None);
}

#[test]
fn test_enter_commits_highlighted_tag() {
    let (mut state, rx) = state_with_suggestions(&["cats", "catnip"]);
    state.handle_key(key(KeyCode::Down));
    state.handle_key(key(KeyCode::Down));

    state.handle_key(key(KeyCode::Enter));

    match rx.try_recv().unwrap() {
        SearchRequest::Dispatch { term, .. } => assert_eq!(term, "catnip"),
        other => panic!("expected a dispatch, got {:?}", other),
    }
}

#[test]
fn test_enter_without_selection_commits_typed_text() {
    let (mut state, rx) = state_with_suggestions(&["cats"]);
    state.handle_key(key(KeyCode::Char('c')));
    state.handle_key(key(KeyCode::Char('a')));

    state.handle_key(key(KeyCode::Enter));

    match rx.try_recv().unwrap() {
        SearchRequest::Dispatch { term, .. } => assert_eq!(term, "ca"),
        other => panic!("expected a dispatch, got {:?}", other),
    }
}

#[test]
fn test_enter_with_empty_input_sends_nothing() {
    let (mut state, rx) = state_with_suggestions(&[]);
    state.handle_key(key(KeyCode::Enter));
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_enter_does_not_insert_a_newline() {
    let (mut state, _rx) = state_with_suggestions(&[]);
    state.handle_key(key(KeyCode::Char('x')));
    state.handle_key(key(KeyCode::Enter));
    assert_eq!(state.input.lines().len(), 1);
    assert_eq!(state.term(), "x");
}

#[test]
fn test_esc_dismisses_popup_but_keeps_text() {
    let (mut state, _rx) = state_with_suggestions(&["cats"]);
    state.handle_key(key(KeyCode::Char('c')));

    state.handle_key(key(KeyCode::Esc));

    assert_eq!(state.term(), "c");
    assert!(!state.typing);
    assert!(state.suggestions.is_empty());
}

#[test]
fn test_cursor_movement_does_not_restart_debounce() {
    let (mut state, rx) = state_with_suggestions(&[]);
    state.handle_key(key(KeyCode::Char('c')));
    state.flush_debounce();
    let _ = rx.try_recv();

    // Left arrow moves the cursor without changing the text
    state.handle_key(key(KeyCode::Left));
    state.flush_debounce();
    assert!(rx.try_recv().is_err());
}
