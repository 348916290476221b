//! Error handling types for the ERNIE provider.
//!
//! A single [`LlmError`] enum covers every failure surfaced by this crate:
//! transport failures, application-level error codes reported by the service,
//! construction-time configuration problems and the "no response"
//! condition of [`LanguageModel::call`](crate::traits::LanguageModel::call).

use thiserror::Error;

/// Unified error type for language model and embedding operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LlmError {
    /// Network or HTTP-level failure (connection, non-2xx status, timeout).
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// A request or response body could not be (de)serialized.
    #[error("JSON error: {0}")]
    JsonError(String),

    /// The service accepted the request but reported an application error code.
    #[error("has error code, error_code: {code}, error_msg: {message}, id: {id}")]
    ResponseCode {
        code: i64,
        message: String,
        id: String,
    },

    /// `generate` returned neither an error nor any generation.
    #[error("no response")]
    EmptyResponse,

    /// Neither an access token nor a complete API key / secret key pair was supplied.
    #[error(
        "auth not configured: {0}; pass an access token or an API key/secret key pair, \
         or export ERNIE_API_KEY and ERNIE_SECRET_KEY"
    )]
    MissingAuth(String),

    /// The OAuth token endpoint rejected the credentials.
    #[error("authentication error: {0}")]
    AuthenticationError(String),

    /// The streaming callback failed or the event stream was malformed.
    #[error("stream error: {0}")]
    StreamError(String),

    /// The caller cancelled the in-flight request.
    #[error("request cancelled")]
    Cancelled,

    /// Invalid client configuration (bad URL, unusable header value, ...).
    #[error("configuration error: {0}")]
    ConfigurationError(String),
}

impl LlmError {
    /// Build the distinguished application-level error.
    pub fn response_code(code: i64, message: impl Into<String>, id: impl Into<String>) -> Self {
        Self::ResponseCode {
            code,
            message: message.into(),
            id: id.into(),
        }
    }

    /// Whether this error came from a provider-reported error code.
    pub const fn is_response_code(&self) -> bool {
        matches!(self, Self::ResponseCode { .. })
    }

    /// The provider error code, if any.
    pub const fn error_code(&self) -> Option<i64> {
        match self {
            Self::ResponseCode { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}
