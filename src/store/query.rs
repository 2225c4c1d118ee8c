//! Query builder for document listings
//!
//! Queries travel as JSON objects in the `queries[]` request parameter, one
//! object per filter, nested for disjunctions.

use serde_json::{Value, json};

/// A single filter in a document listing request
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Full-text search of one attribute
    Search { attribute: String, term: String },
    /// Disjunction of nested queries
    Or(Vec<Query>),
    /// Page size cap
    Limit(u64),
}

impl Query {
    /// Full-text search on `attribute` for `term`
    pub fn search(attribute: impl Into<String>, term: impl Into<String>) -> Self {
        Query::Search {
            attribute: attribute.into(),
            term: term.into(),
        }
    }

    /// Match documents satisfying any of `queries`
    pub fn or(queries: Vec<Query>) -> Self {
        Query::Or(queries)
    }

    /// Cap the number of returned documents
    pub fn limit(count: u64) -> Self {
        Query::Limit(count)
    }

    fn to_value(&self) -> Value {
        match self {
            Query::Search { attribute, term } => json!({
                "method": "search",
                "attribute": attribute,
                "values": [term],
            }),
            Query::Or(queries) => json!({
                "method": "or",
                "values": queries.iter().map(Query::to_value).collect::<Vec<_>>(),
            }),
            Query::Limit(count) => json!({
                "method": "limit",
                "values": [count],
            }),
        }
    }

    /// Wire form of this query
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod query_tests;
