// Copyright 2026 UML Ontology Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Chat-completion boundary for a locally hosted Ollama server.
//!
//! The wire format is Ollama's `/api/chat` endpoint: one user-role message
//! in, one assistant message out, plus optional evaluation statistics. The
//! reply text lives in the direct `message.content` field.

use crate::error::{GenerateError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default base URL of a locally hosted Ollama server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// A single role-tagged chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role (`user`, `assistant`, ...).
    pub role: String,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Create a user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for the chat endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier.
    pub model: String,
    /// Conversation so far; this system always sends exactly one user turn.
    pub messages: Vec<ChatMessage>,
    /// Streaming is disabled; one complete reply is expected.
    pub stream: bool,
}

impl ChatRequest {
    /// Build a single-turn request for the given model and prompt.
    pub fn single_turn(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::user(prompt)],
            stream: false,
        }
    }
}

/// Response body from the chat endpoint.
///
/// Every field is optional on the wire; extraction decides what is required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    /// The assistant reply.
    #[serde(default)]
    pub message: Option<ChatMessage>,
    /// Tokens generated for the reply, when the backend reports it.
    #[serde(default)]
    pub eval_count: Option<u64>,
    /// Reply generation time in nanoseconds, when reported.
    #[serde(default)]
    pub eval_duration: Option<u64>,
    /// Total request time in nanoseconds, when reported.
    #[serde(default)]
    pub total_duration: Option<u64>,
}

/// Outbound chat-completion port.
///
/// The one seam between generation logic and the network; implementations
/// perform exactly one blocking request per call, with no retries.
#[cfg_attr(test, mockall::automock)]
pub trait ChatApi {
    /// Submit one request and return the parsed reply.
    fn chat(&self, request: &ChatRequest) -> Result<ChatResponse>;
}

/// Blocking HTTP client for an Ollama server.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl OllamaClient {
    /// Create a client against [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatApi for OllamaClient {
    fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let url = format!("{}/api/chat", self.base_url.trim_end_matches('/'));
        debug!(%url, model = %request.model, "sending chat request");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .map_err(|e| GenerateError::api(format!("request to {url} failed: {e}"), e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GenerateError::api_message(format!(
                "HTTP {status} from {url}: {body}"
            )));
        }

        response.json().map_err(|e| {
            GenerateError::MalformedResponse(format!("failed to parse chat response: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_turn_request_carries_one_user_message() {
        let request = ChatRequest::single_turn("llama3.1:8b", "hello");
        assert_eq!(request.model, "llama3.1:8b");
        assert!(!request.stream);
        assert_eq!(request.messages, vec![ChatMessage::user("hello")]);
    }

    #[test]
    fn response_fields_all_default_to_absent() {
        let response: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(response.message.is_none());
        assert!(response.eval_count.is_none());
    }

    #[test]
    fn response_parses_message_and_eval_count() {
        let response: ChatResponse = serde_json::from_str(
            r#"{
                "model": "llama3.1:8b",
                "message": {"role": "assistant", "content": "@prefix owl: ."},
                "eval_count": 26,
                "eval_duration": 2000000000
            }"#,
        )
        .unwrap();

        assert_eq!(response.message.unwrap().content, "@prefix owl: .");
        assert_eq!(response.eval_count, Some(26));
    }

    #[test]
    fn request_serializes_with_stream_disabled() {
        let request = ChatRequest::single_turn("m", "p");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["stream"], serde_json::json!(false));
        assert_eq!(json["messages"][0]["role"], "user");
    }
}
