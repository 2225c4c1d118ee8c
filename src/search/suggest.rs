//! Tag suggestion derivation
//!
//! Matched documents carry their tags as one comma-delimited string. The
//! suggestion list is every individual tag that contains the typed term,
//! deduplicated across documents in first-seen order.

use crate::store::Document;

/// One entry in the suggestion list
///
/// Ephemeral: rebuilt for every fetch and discarded on the next keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Synthetic sequential identifier
    pub id: String,
    /// The tag text itself
    pub tag: String,
    /// Fixed at 1; the store query does not report per-tag frequencies
    pub result_count: u32,
}

/// Derive the suggestion list for `term` from matched documents
///
/// Splits each document's tag field on commas, trims the pieces, keeps those
/// containing `term` case-insensitively, and deduplicates by exact text while
/// preserving first-seen order.
pub fn derive_suggestions(documents: &[Document], term: &str) -> Vec<Suggestion> {
    let needle = term.to_lowercase();
    let mut seen: Vec<String> = Vec::new();

    for doc in documents {
        let Some(tags) = &doc.tags else {
            continue;
        };
        for tag in tags.split(',') {
            let tag = tag.trim();
            if tag.is_empty() || !tag.to_lowercase().contains(&needle) {
                continue;
            }
            if !seen.iter().any(|known| known == tag) {
                seen.push(tag.to_string());
            }
        }
    }

    seen.into_iter()
        .enumerate()
        .map(|(i, tag)| Suggestion {
            id: i.to_string(),
            tag,
            result_count: 1,
        })
        .collect()
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod suggest_tests;
