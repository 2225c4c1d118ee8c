//! HTTP client for the document store

use std::time::Duration;

use super::{DocumentList, Query, StoreError};
use crate::config::ServiceConfig;

/// Header carrying the project identifier
const PROJECT_HEADER: &str = "X-Appwrite-Project";

/// Header carrying the optional server API key
const API_KEY_HEADER: &str = "X-Appwrite-Key";

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the document-store REST API
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    endpoint: String,
    project: String,
    api_key: Option<String>,
}

impl StoreClient {
    /// Create a client from validated service settings
    pub fn new(service: &ServiceConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| StoreError::Network(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: service.endpoint.trim_end_matches('/').to_string(),
            project: service.project.clone(),
            api_key: service.api_key.clone(),
        })
    }

    /// List documents of a collection, filtered by `queries`
    ///
    /// # Arguments
    /// * `database_id` - Database the collection lives in
    /// * `collection_id` - Collection to list
    /// * `queries` - Filters, serialized one per `queries[]` parameter
    pub async fn list_documents(
        &self,
        database_id: &str,
        collection_id: &str,
        queries: &[Query],
    ) -> Result<DocumentList, StoreError> {
        let url = format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint, database_id, collection_id
        );

        let params: Vec<(&str, String)> = queries
            .iter()
            .map(|query| ("queries[]", query.to_json()))
            .collect();

        let mut request = self
            .http
            .get(&url)
            .header(PROJECT_HEADER, &self.project)
            .query(&params);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.text().await {
                Ok(body) => extract_error_message(&body),
                Err(_) => "Unknown error".to_string(),
            };
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<DocumentList>()
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))
    }
}

/// Pull the human-readable message out of an error body, falling back to the
/// raw body when it isn't the usual `{"message": ...}` envelope
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;

    fn service() -> ServiceConfig {
        ServiceConfig {
            endpoint: "https://store.example.com/v1/".to_string(),
            project: "proj".to_string(),
            database_id: "db".to_string(),
            post_collection_id: "posts".to_string(),
            other_collection_ids: vec![],
            api_key: None,
        }
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let client = StoreClient::new(&service()).unwrap();
        assert_eq!(client.endpoint, "https://store.example.com/v1");
    }

    #[test]
    fn test_extract_error_message_from_envelope() {
        let body = r#"{"message": "Collection not found", "code": 404}"#;
        assert_eq!(extract_error_message(body), "Collection not found");
    }

    #[test]
    fn test_extract_error_message_raw_fallback() {
        assert_eq!(extract_error_message("gateway timeout"), "gateway timeout");
    }
}
