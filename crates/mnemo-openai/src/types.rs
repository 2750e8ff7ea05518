// SPDX-FileCopyrightText: 2026 Mnemo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI Chat Completions API request/response types.

use mnemo_core::Turn;
use serde::{Deserialize, Serialize};

/// A request to `POST /v1/chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// Model identifier (e.g., "gpt-5-mini").
    pub model: String,

    /// Message sequence: the synthesized system message followed by the
    /// full accumulated user/assistant history.
    pub messages: Vec<ApiMessage>,

    /// Reasoning effort hint (e.g., "minimal").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning_effort: Option<String>,
}

/// A single message in the Chat Completions wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    /// Role: "system", "user", or "assistant".
    pub role: String,
    /// Message text.
    pub content: String,
}

impl From<&Turn> for ApiMessage {
    fn from(turn: &Turn) -> Self {
        Self {
            role: turn.role.to_string(),
            content: turn.content.clone(),
        }
    }
}

/// A full response from the Chat Completions API.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Completion choices; the first one carries the reply.
    pub choices: Vec<Choice>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The generated assistant message.
    pub message: ChoiceMessage,
}

/// The message within a completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    /// Reply text. `None` for tool-call-only responses, which mnemo does
    /// not request and treats as a provider error.
    pub content: Option<String>,
}

/// Error body returned by the OpenAI API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail within an [`ApiErrorResponse`].
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub type_: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mnemo_core::Turn;

    #[test]
    fn request_omits_reasoning_effort_when_none() {
        let req = ChatCompletionRequest {
            model: "gpt-5-mini".into(),
            messages: vec![ApiMessage::from(&Turn::user("hi"))],
            reasoning_effort: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("reasoning_effort").is_none());
    }

    #[test]
    fn request_serializes_reasoning_effort() {
        let req = ChatCompletionRequest {
            model: "gpt-5-mini".into(),
            messages: vec![],
            reasoning_effort: Some("minimal".into()),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["reasoning_effort"], "minimal");
    }

    #[test]
    fn response_parses_first_choice_content() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "hello"}}]
        }"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("hello")
        );
    }
}
