use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::state::{App, View};
use crate::results::render_results;
use crate::search::render_search;

impl App {
    /// Render the UI: search input on top, suggestions or results below
    pub fn render(&mut self, frame: &mut Frame) {
        let [input_area, body_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(frame.area());

        self.layout = render_search(&mut self.search, frame, input_area, body_area);

        if self.view == View::Results
            && let Some(results) = &mut self.results
        {
            render_results(results, frame, body_area);
        }
    }
}
