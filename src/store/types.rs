//! Document payload types

use serde::Deserialize;
use serde_json::Value;

/// One record from a store collection
///
/// Only the attributes the search surface renders are typed; everything else
/// the collection carries is kept in `extra` untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    #[serde(rename = "$id")]
    pub id: String,
    /// Comma-delimited tag list, e.g. `"sunset, beach, waves"`
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "userName")]
    pub user_name: Option<String>,
    #[serde(default, rename = "fileName")]
    pub file_name: Option<String>,
    #[serde(default, rename = "likeCount")]
    pub like_count: Option<Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Document {
    /// Like count rendered as text; the store stores it as either a string or
    /// a number depending on which writer created the record
    pub fn like_count_text(&self) -> Option<String> {
        match &self.like_count {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Response envelope of a document listing
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentList {
    pub total: u64,
    pub documents: Vec<Document>,
}
