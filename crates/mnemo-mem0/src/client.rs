// SPDX-FileCopyrightText: 2026 Mnemo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Mem0 hosted memory API.
//!
//! Provides [`Mem0Client`] which handles request construction,
//! authentication, and error mapping. Failures are never retried: any
//! transport or auth error propagates to the caller unchanged.

use std::time::Duration;

use mnemo_core::{MemoryRecord, MnemoError, Turn};
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::types::{AddRequest, ApiErrorBody, ApiMessage, SearchRequest};

/// HTTP client for Mem0 API communication.
#[derive(Debug, Clone)]
pub struct Mem0Client {
    client: reqwest::Client,
    base_url: String,
}

impl Mem0Client {
    /// Creates a new Mem0 API client.
    ///
    /// # Arguments
    /// * `api_key` - Mem0 API key, sent as `Authorization: Token <key>`
    /// * `base_url` - API base URL without a trailing slash
    pub fn new(api_key: String, base_url: String) -> Result<Self, MnemoError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Authorization",
            HeaderValue::from_str(&format!("Token {api_key}")).map_err(|e| {
                MnemoError::Config(format!("invalid Mem0 API key header value: {e}"))
            })?,
        );
        headers.insert(
            "content-type",
            HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(|e| MnemoError::Memory {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self { client, base_url })
    }

    /// Searches for memories related to `query`, scoped to `user_id`.
    ///
    /// Returns records in the service's ranking order. An empty list is a
    /// normal outcome; a record missing its `memory` text is a
    /// deserialization error.
    pub async fn search(
        &self,
        query: &str,
        user_id: &str,
    ) -> Result<Vec<MemoryRecord>, MnemoError> {
        let url = format!("{}/v1/memories/search/", self.base_url);
        let body = SearchRequest { query, user_id };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| MnemoError::Memory {
                message: format!("search request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, user_id, "memory search response received");

        if !status.is_success() {
            return Err(self.error_from_response(status, response).await);
        }

        let body = response.text().await.map_err(|e| MnemoError::Memory {
            message: format!("failed to read search response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        let records: Vec<MemoryRecord> =
            serde_json::from_str(&body).map_err(|e| MnemoError::Memory {
                message: format!("failed to parse search response: {e}"),
                source: Some(Box::new(e)),
            })?;

        debug!(count = records.len(), "memories retrieved");
        Ok(records)
    }

    /// Persists `turns` as memory material owned by `user_id`.
    ///
    /// The acknowledgment body is ignored; only the status matters.
    pub async fn add(&self, turns: &[Turn], user_id: &str) -> Result<(), MnemoError> {
        let url = format!("{}/v1/memories/", self.base_url);
        let body = AddRequest {
            messages: turns.iter().map(ApiMessage::from).collect(),
            user_id,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| MnemoError::Memory {
                message: format!("add request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, user_id, turns = turns.len(), "memory add response received");

        if !status.is_success() {
            return Err(self.error_from_response(status, response).await);
        }

        Ok(())
    }

    /// Maps a non-success response into a [`MnemoError::Memory`].
    async fn error_from_response(
        &self,
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> MnemoError {
        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.message().map(str::to_string))
        {
            Some(detail) => format!("Mem0 API error ({status}): {detail}"),
            None => format!("Mem0 API returned {status}: {body}"),
        };
        MnemoError::Memory {
            message,
            source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> Mem0Client {
        Mem0Client::new("test-key".into(), base_url.to_string()).unwrap()
    }

    #[tokio::test]
    async fn search_returns_records_in_order() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!([
            {"id": "m1", "memory": "prefers tea", "score": 0.91},
            {"id": "m2", "memory": "lives in Lisbon", "score": 0.67}
        ]);

        Mock::given(method("POST"))
            .and(path("/v1/memories/search/"))
            .and(header("Authorization", "Token test-key"))
            .and(body_json(serde_json::json!({
                "query": "what do I drink?",
                "user_id": "alice"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let records = client.search("what do I drink?", "alice").await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].memory, "prefers tea");
        assert_eq!(records[1].memory, "lives in Lisbon");
    }

    #[tokio::test]
    async fn search_with_no_matches_returns_empty() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/memories/search/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let records = client.search("anything", "alice").await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn search_fails_on_record_missing_memory_field() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!([{"id": "m1", "score": 0.5}]);

        Mock::given(method("POST"))
            .and(path("/v1/memories/search/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.search("q", "alice").await.unwrap_err();
        assert!(
            err.to_string().contains("failed to parse search response"),
            "got: {err}"
        );
    }

    #[tokio::test]
    async fn search_maps_auth_error_detail() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/memories/search/"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({"detail": "Invalid token."})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.search("q", "alice").await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Invalid token."), "got: {msg}");
    }

    #[tokio::test]
    async fn add_posts_turns_with_lowercase_roles() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/memories/"))
            .and(header("Authorization", "Token test-key"))
            .and(body_json(serde_json::json!({
                "messages": [
                    {"role": "user", "content": "I moved to Lisbon"},
                    {"role": "assistant", "content": "Noted!"}
                ],
                "user_id": "alice"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"results": []})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let turns = vec![Turn::user("I moved to Lisbon"), Turn::assistant("Noted!")];
        client.add(&turns, "alice").await.unwrap();
    }

    #[tokio::test]
    async fn add_propagates_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/memories/"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.add(&[Turn::user("x")], "alice").await.unwrap_err();
        assert!(err.to_string().contains("500"), "got: {err}");
    }
}
