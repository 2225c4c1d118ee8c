//! Search input and suggestion popup rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::search_state::SearchState;

// Suggestion popup display constants
const MAX_VISIBLE_SUGGESTIONS: usize = 8;
const MAX_POPUP_WIDTH: u16 = 48;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 2;

/// Regions the search surface occupied this frame
///
/// The mouse handler uses these to hit-test suggestion clicks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchLayout {
    pub input: Rect,
    pub popup: Option<Rect>,
}

/// Render the search input plus, while the user is typing, the suggestion
/// popup anchored below it
pub fn render_search(
    state: &mut SearchState,
    frame: &mut Frame,
    input_area: Rect,
    below: Rect,
) -> SearchLayout {
    let border_color = if state.typing {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    state.input.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(&state.input, input_area);

    let popup = if state.typing && !state.suggestions.is_empty() {
        Some(render_popup(state, frame, below))
    } else {
        None
    };

    SearchLayout {
        input: input_area,
        popup,
    }
}

/// Render the suggestion list and return the area it covered
fn render_popup(state: &mut SearchState, frame: &mut Frame, below: Rect) -> Rect {
    let max_rows = (below.height.saturating_sub(POPUP_BORDER_HEIGHT) as usize)
        .min(MAX_VISIBLE_SUGGESTIONS);
    let visible_rows = state.suggestions.len().min(max_rows).max(1);
    state.ensure_selection_visible(visible_rows);

    let popup_height = visible_rows as u16 + POPUP_BORDER_HEIGHT;
    let max_tag_width = state
        .suggestions
        .iter()
        .map(|s| s.tag.width())
        .max()
        .unwrap_or(16) as u16;
    let popup_width = (max_tag_width + POPUP_PADDING)
        .clamp(16, MAX_POPUP_WIDTH)
        .min(below.width);

    let popup_area = Rect {
        x: below.x + POPUP_OFFSET_X.min(below.width.saturating_sub(popup_width)),
        y: below.y,
        width: popup_width,
        height: popup_height.min(below.height),
    };

    let items: Vec<ListItem> = state
        .suggestions
        .iter()
        .enumerate()
        .skip(state.list_offset)
        .take(visible_rows)
        .map(|(index, suggestion)| {
            let style = if state.selection.selected() == Some(index) {
                Style::default()
                    .add_modifier(Modifier::REVERSED)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            ListItem::new(Line::from(Span::styled(suggestion.tag.clone(), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Tags ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(list, popup_area);
    popup_area
}

/// Map a click position inside the popup to a suggestion index
pub fn suggestion_at(layout: &SearchLayout, list_offset: usize, column: u16, row: u16) -> Option<usize> {
    let popup = layout.popup?;
    let inner_top = popup.y + 1;
    let inner_bottom = popup.y + popup.height.saturating_sub(1);
    if column <= popup.x || column >= popup.x + popup.width.saturating_sub(1) {
        return None;
    }
    if row < inner_top || row >= inner_bottom {
        return None;
    }
    Some(list_offset + (row - inner_top) as usize)
}

#[cfg(test)]
#[path = "search_render_tests.rs"]
mod search_render_tests;
