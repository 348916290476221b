//! `ERNIE`-specific type definitions
//!
//! Request and response bodies of the Wenxin Workshop REST API. Only the
//! fields this crate reads or writes are modelled; unknown fields are ignored.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::StreamingFunc;

/// Provider-specific routing segment of a completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelPath(String);

impl ModelPath {
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Chat message sent to the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user<S: Into<String>>(content: S) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Body of `POST /chat/{path}`.
#[derive(Clone, Default, Serialize)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty_score: Option<f64>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Receives streamed chunks; never serialized.
    #[serde(skip)]
    pub streaming_func: Option<StreamingFunc>,
}

impl fmt::Debug for CompletionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionRequest")
            .field("messages", &self.messages.len())
            .field("temperature", &self.temperature)
            .field("top_p", &self.top_p)
            .field("penalty_score", &self.penalty_score)
            .field("stream", &self.stream)
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// Token usage reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Completion response (also the shape of each streamed chunk).
///
/// `error_code > 0` signals an application-level failure even when the HTTP
/// exchange succeeded.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionResponse {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub sentence_id: i64,
    pub is_end: bool,
    pub is_truncated: bool,
    pub result: String,
    pub need_clear_history: bool,
    pub usage: Usage,
    pub error_code: i64,
    pub error_msg: String,
}

impl CompletionResponse {
    pub const fn has_error_code(&self) -> bool {
        self.error_code > 0
    }
}

/// Body of `POST /embeddings/embedding-v1`.
#[derive(Debug, Clone, Serialize)]
pub struct EmbeddingRequest<'a> {
    pub input: &'a [String],
}

/// One embedding vector in an [`EmbeddingResponse`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingData {
    pub object: String,
    pub embedding: Vec<f32>,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingResponse {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub data: Vec<EmbeddingData>,
    pub usage: Usage,
    pub error_code: i64,
    pub error_msg: String,
}

impl EmbeddingResponse {
    pub const fn has_error_code(&self) -> bool {
        self.error_code > 0
    }
}

/// Response of the OAuth `client_credentials` exchange.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AccessTokenResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub refresh_token: String,
    pub scope: String,
    pub session_key: String,
    pub session_secret: String,
    pub error: String,
    pub error_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_request_omits_unset_fields() {
        let req = CompletionRequest {
            messages: vec![Message::user("hi")],
            temperature: Some(0.5),
            streaming_func: Some(std::sync::Arc::new(
                |_: &str| -> Result<(), crate::error::LlmError> { Ok(()) },
            )),
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "messages": [{"role": "user", "content": "hi"}],
                "temperature": 0.5
            })
        );
    }

    #[test]
    fn stream_flag_serialized_only_when_true() {
        let req = CompletionRequest {
            messages: vec![Message::user("hi")],
            stream: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["stream"], serde_json::json!(true));
    }

    #[test]
    fn error_body_decodes_with_defaults() {
        let resp: CompletionResponse = serde_json::from_str(
            r#"{"error_code":110,"error_msg":"Access token invalid or no longer valid"}"#,
        )
        .unwrap();
        assert!(resp.has_error_code());
        assert_eq!(resp.result, "");
        assert_eq!(resp.usage, Usage::default());
    }
}
