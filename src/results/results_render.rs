//! Results pane rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::results_state::ResultsState;
use crate::store::Document;

/// Render the merged results below the search input
pub fn render_results(results: &mut ResultsState, frame: &mut Frame, area: Rect) {
    let viewport_height = area.height.saturating_sub(2);
    results
        .scroll
        .update_bounds(results.line_count(), viewport_height);

    let title = format!(
        " Results for \"{}\" ({}) ",
        results.term,
        results.documents.len()
    );

    let lines: Vec<Line> = if results.documents.is_empty() {
        vec![Line::from(Span::styled(
            "No matches",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        results
            .documents
            .iter()
            .skip(results.scroll.offset as usize)
            .take(viewport_height as usize)
            .map(document_line)
            .collect()
    };

    let pane = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(pane, area);
}

/// One-line summary of a document: poster, tags, likes, description
fn document_line(doc: &Document) -> Line<'_> {
    let mut spans: Vec<Span> = Vec::new();

    let poster = doc.user_name.as_deref().unwrap_or("unknown");
    spans.push(Span::styled(
        format!("@{poster}"),
        Style::default().fg(Color::Green),
    ));

    if let Some(tags) = doc.tags.as_deref().filter(|t| !t.trim().is_empty()) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            tags.to_string(),
            Style::default().fg(Color::Cyan),
        ));
    }

    if let Some(likes) = doc.like_count_text() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("♥ {likes}"),
            Style::default().fg(Color::Magenta),
        ));
    }

    if let Some(description) = doc.description.as_deref().filter(|d| !d.trim().is_empty()) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            description.to_string(),
            Style::default().add_modifier(Modifier::DIM),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
#[path = "results_render_tests.rs"]
mod results_render_tests;
