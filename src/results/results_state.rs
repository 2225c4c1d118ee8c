use crate::scroll::ScrollState;
use crate::store::Document;

/// State of the results pane
pub struct ResultsState {
    /// The committed term that produced these results
    pub term: String,
    /// Merged documents, primary collection first
    pub documents: Vec<Document>,
    pub scroll: ScrollState,
}

impl ResultsState {
    pub fn new(term: String, documents: Vec<Document>) -> Self {
        Self {
            term,
            documents,
            scroll: ScrollState::new(),
        }
    }

    /// One rendered line per document
    pub fn line_count(&self) -> u32 {
        self.documents.len() as u32
    }
}
