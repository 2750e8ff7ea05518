// SPDX-FileCopyrightText: 2026 Mnemo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the OpenAI Chat Completions API.
//!
//! Provides [`OpenAiClient`] which handles request construction,
//! authentication, and error mapping. Failures are never retried: any
//! transport or API error propagates to the caller unchanged.

use std::time::Duration;

use mnemo_core::{MnemoError, Turn};
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::types::{ApiErrorResponse, ApiMessage, ChatCompletionRequest, ChatCompletionResponse};

/// HTTP client for OpenAI API communication.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    model: String,
    reasoning_effort: String,
    base_url: String,
}

impl OpenAiClient {
    /// Creates a new OpenAI API client.
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API key, sent as `Authorization: Bearer <key>`
    /// * `model` - Model identifier for every request
    /// * `reasoning_effort` - Effort hint forwarded verbatim
    /// * `base_url` - API base URL without a trailing slash
    pub fn new(
        api_key: String,
        model: String,
        reasoning_effort: String,
        base_url: String,
    ) -> Result<Self, MnemoError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Authorization",
            HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
                MnemoError::Config(format!("invalid OpenAI API key header value: {e}"))
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
            .map_err(|e| MnemoError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            model,
            reasoning_effort,
            base_url,
        })
    }

    /// Returns the configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends the system prompt plus the conversation history and returns
    /// the first choice's reply text.
    pub async fn complete(&self, system: &str, history: &[Turn]) -> Result<String, MnemoError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(ApiMessage {
            role: "system".to_string(),
            content: system.to_string(),
        });
        messages.extend(history.iter().map(ApiMessage::from));

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages,
            reasoning_effort: Some(self.reasoning_effort.clone()),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| MnemoError::Provider {
                message: format!("completion request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, model = %self.model, "completion response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(api_err) => format!(
                    "OpenAI API error ({}): {}",
                    api_err.error.type_.as_deref().unwrap_or("unknown"),
                    api_err.error.message
                ),
                Err(_) => format!("OpenAI API returned {status}: {body}"),
            };
            return Err(MnemoError::Provider {
                message,
                source: None,
            });
        }

        let body = response.text().await.map_err(|e| MnemoError::Provider {
            message: format!("failed to read completion response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        let completion: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(|e| MnemoError::Provider {
                message: format!("failed to parse completion response: {e}"),
                source: Some(Box::new(e)),
            })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| MnemoError::Provider {
                message: "completion response contained no reply text".into(),
                source: None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> OpenAiClient {
        OpenAiClient::new(
            "sk-test".into(),
            "gpt-5-mini".into(),
            "minimal".into(),
            base_url.to_string(),
        )
        .unwrap()
    }

    fn reply_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": text}}
            ]
        })
    }

    #[tokio::test]
    async fn complete_returns_first_choice_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer sk-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("Hi there!")))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let reply = client
            .complete("be honest", &[Turn::user("hello")])
            .await
            .unwrap();
        assert_eq!(reply, "Hi there!");
    }

    #[tokio::test]
    async fn complete_sends_system_before_history() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-5-mini",
                "reasoning_effort": "minimal",
                "messages": [
                    {"role": "system", "content": "be honest"},
                    {"role": "user", "content": "q1"},
                    {"role": "assistant", "content": "a1"},
                    {"role": "user", "content": "q2"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("a2")))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let history = vec![Turn::user("q1"), Turn::assistant("a1"), Turn::user("q2")];
        let reply = client.complete("be honest", &history).await.unwrap();
        assert_eq!(reply, "a2");
    }

    #[tokio::test]
    async fn complete_maps_api_error_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.complete("s", &[Turn::user("x")]).await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("invalid_request_error"), "got: {msg}");
        assert!(msg.contains("Incorrect API key"), "got: {msg}");
    }

    #[tokio::test]
    async fn complete_fails_on_empty_choices() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": "c", "choices": []})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.complete("s", &[Turn::user("x")]).await.unwrap_err();
        assert!(
            err.to_string().contains("no reply text"),
            "got: {err}"
        );
    }

    #[tokio::test]
    async fn complete_fails_on_null_content() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "c",
                "choices": [{"index": 0, "message": {"role": "assistant", "content": null}}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.complete("s", &[Turn::user("x")]).await.unwrap_err();
        assert!(err.to_string().contains("no reply text"), "got: {err}");
    }
}
